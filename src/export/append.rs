// src/export/append.rs

use crate::errors::{AppError, AppResult};
use crate::export::SheetFormat;
use crate::export::json_csv::{append_csv_row, read_csv_rows};
use crate::export::xlsx::{read_xlsx_rows, write_xlsx_table};
use crate::models::entry::WellnessEntry;
use std::path::{Path, PathBuf};

/// Incremental mirror of every entry ever added.
///
/// Rows are only ever appended: deleting or clearing entries in memory does
/// not touch this file. A `.csv` target is appended in place. A `.xlsx`
/// target is read back, extended by one row and rewritten; a workbook whose
/// first row is not the wellness header is refused, never overwritten.
#[derive(Debug, Clone)]
pub struct AppendSink {
    path: PathBuf,
    format: SheetFormat,
}

impl AppendSink {
    pub fn new(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let format = SheetFormat::from_path(&path)?;

        if format == SheetFormat::Json {
            return Err(AppError::InvalidSheetFormat(format!(
                "{} cannot be appended to, use .csv or .xlsx",
                path.display()
            )));
        }

        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SheetFormat {
        self.format
    }

    /// Every row appended so far, header excluded.
    pub fn rows(&self) -> AppResult<Vec<Vec<String>>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        match self.format {
            SheetFormat::Xlsx => read_xlsx_rows(&self.path),
            _ => read_csv_rows(&self.path),
        }
    }

    pub fn append(&self, entry: &WellnessEntry) -> AppResult<()> {
        let row = entry.to_row();

        match self.format {
            SheetFormat::Xlsx => {
                let mut rows = self.rows()?;
                rows.push(row);
                write_xlsx_table(&rows, &self.path)?;
            }
            _ => append_csv_row(&self.path, &row)?,
        }

        log::debug!("appended row for '{}' to {}", entry.name, self.path.display());
        Ok(())
    }
}
