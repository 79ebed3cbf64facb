// src/export/viewer.rs

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Something able to show a freshly exported file to the user.
pub trait Viewer {
    fn open(&self, path: &Path) -> AppResult<()>;
}

/// Opens files with the host's default application.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl Viewer for SystemViewer {
    fn open(&self, path: &Path) -> AppResult<()> {
        open::that(path).map_err(AppError::from)
    }
}

/// Leaves exported files alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoViewer;

impl Viewer for NoViewer {
    fn open(&self, _path: &Path) -> AppResult<()> {
        Ok(())
    }
}
