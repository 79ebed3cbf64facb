//! Unified application error type.
//! All modules (core, export, config, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::entry::Field;
use std::io;
use thiserror::Error;

/// Rejection of a raw form. Only the first failing check is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("{0} must contain only letters and spaces")]
    NotLetters(Field),

    #[error("Screen-free time must be a positive number")]
    NotPositive,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input
    // ---------------------------
    #[error("Invalid entry: {0}")]
    Validation(#[from] ValidationError),

    // ---------------------------
    // Log operations
    // ---------------------------
    #[error("No entry selected to delete")]
    NoSelection,

    #[error("Invalid selection {index}: the log has {len} entries")]
    InvalidSelection { index: usize, len: usize },

    #[error("No records to save")]
    NoEntries,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Spreadsheet format not supported: {0}")]
    InvalidSheetFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Export file {} is also the append file, pick another one", .0.display())]
    SameFile(std::path::PathBuf),
}

impl AppError {
    /// True for errors caused by the user's input rather than by the system.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::NoSelection
                | AppError::InvalidSelection { .. }
                | AppError::NoEntries
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
