// src/export/mod.rs

pub mod append;
mod excel_date;
mod json_csv;
pub mod viewer;
mod xlsx;

pub use append::AppendSink;
pub use viewer::{NoViewer, SystemViewer, Viewer};

use crate::errors::{AppError, AppResult};
use crate::models::entry::WellnessEntry;
use crate::ui::messages::success;
use std::path::Path;

/// Success line printed once the export file is written.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Spreadsheet flavour, picked from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetFormat {
    Csv,
    Json,
    Xlsx,
}

impl SheetFormat {
    /// `.xlsx` when the path has no extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| "xlsx".to_string());

        match ext.as_str() {
            "csv" => Ok(SheetFormat::Csv),
            "json" => Ok(SheetFormat::Json),
            "xlsx" => Ok(SheetFormat::Xlsx),
            other => Err(AppError::InvalidSheetFormat(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SheetFormat::Csv => "CSV",
            SheetFormat::Json => "JSON",
            SheetFormat::Xlsx => "XLSX",
        }
    }
}

/// Overwrite `path` with the header and every entry, in order.
pub fn write_table(entries: &[WellnessEntry], path: &Path) -> AppResult<SheetFormat> {
    let format = SheetFormat::from_path(path)?;

    match format {
        SheetFormat::Csv => json_csv::export_csv(entries, path)?,
        SheetFormat::Json => json_csv::export_json(entries, path)?,
        SheetFormat::Xlsx => {
            let rows: Vec<Vec<String>> = entries.iter().map(WellnessEntry::to_row).collect();
            xlsx::write_xlsx_table(&rows, path)?
        }
    }

    Ok(format)
}
