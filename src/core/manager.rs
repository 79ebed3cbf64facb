use crate::core::validator::validate;
use crate::errors::{AppError, AppResult};
use crate::export::{self, AppendSink, SheetFormat, SystemViewer, Viewer};
use crate::models::entry::{FREQUENCY, RawEntry, WellnessEntry};
use crate::models::status::Status;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub format: SheetFormat,
    pub rows: usize,
    /// Set when the file was written but could not be opened afterwards.
    pub viewer_warning: Option<String>,
}

/// Owns the in-memory wellness log of one session.
///
/// Every successful add is mirrored to the append file; exports overwrite
/// the export file with the current in-memory entries.
pub struct EntryLog {
    entries: Vec<WellnessEntry>,
    sink: AppendSink,
    export_path: PathBuf,
    viewer: Box<dyn Viewer>,
    open_after_export: bool,
}

impl EntryLog {
    pub fn new(append_file: impl Into<PathBuf>, export_file: impl Into<PathBuf>) -> AppResult<Self> {
        let export_path = export_file.into();
        // fail early on an unsupported export extension
        SheetFormat::from_path(&export_path)?;

        let sink = AppendSink::new(append_file)?;
        // exporting over the append file would drop its history
        if same_file(sink.path(), &export_path) {
            return Err(AppError::SameFile(export_path));
        }

        Ok(Self {
            entries: Vec::new(),
            sink,
            export_path,
            viewer: Box::new(SystemViewer),
            open_after_export: true,
        })
    }

    pub fn with_viewer(mut self, viewer: impl Viewer + 'static) -> Self {
        self.viewer = Box::new(viewer);
        self
    }

    pub fn open_after_export(mut self, enabled: bool) -> Self {
        self.open_after_export = enabled;
        self
    }

    pub fn entries(&self) -> &[WellnessEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn append_path(&self) -> &Path {
        self.sink.path()
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    pub fn add(&mut self, raw: &RawEntry) -> AppResult<&WellnessEntry> {
        let now = Local::now().naive_local();
        self.add_at(raw, now)
    }

    /// Same as [`EntryLog::add`] with an explicit timestamp.
    ///
    /// Nothing is kept in memory unless the append file was written.
    pub fn add_at(&mut self, raw: &RawEntry, timestamp: NaiveDateTime) -> AppResult<&WellnessEntry> {
        let valid = validate(raw)?;

        let entry = WellnessEntry {
            timestamp,
            name: valid.name,
            activity: valid.activity,
            me_time: valid.me_time,
            off_screen_minutes: valid.minutes,
            frequency: FREQUENCY,
            status: Status::classify(i64::from(valid.minutes)),
        };

        self.sink.append(&entry)?;

        log::debug!("added entry #{}: {}", self.entries.len() + 1, entry.display_line());
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove the selected entry (0-based) from memory only.
    pub fn delete_at(&mut self, selection: Option<usize>) -> AppResult<WellnessEntry> {
        let index = selection.ok_or(AppError::NoSelection)?;

        if index >= self.entries.len() {
            return Err(AppError::InvalidSelection {
                index,
                len: self.entries.len(),
            });
        }

        let removed = self.entries.remove(index);
        log::debug!("deleted entry at {index}: {}", removed.display_line());
        Ok(removed)
    }

    /// Drop every in-memory entry. Returns how many were dropped.
    pub fn clear_all(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        log::debug!("cleared {dropped} entries");
        dropped
    }

    /// Overwrite the export file with the current entries, then try to open it.
    pub fn export_all(&self) -> AppResult<ExportOutcome> {
        if self.entries.is_empty() {
            return Err(AppError::NoEntries);
        }

        let format = export::write_table(&self.entries, &self.export_path)?;

        let viewer_warning = if self.open_after_export {
            match self.viewer.open(&self.export_path) {
                Ok(()) => None,
                Err(e) => {
                    log::warn!("could not open {}: {e}", self.export_path.display());
                    Some(format!("File saved, but couldn't open automatically: {e}"))
                }
            }
        } else {
            None
        };

        Ok(ExportOutcome {
            path: self.export_path.clone(),
            format,
            rows: self.entries.len(),
            viewer_warning,
        })
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (std::path::absolute(a), std::path::absolute(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
