use crate::core::manager::EntryLog;
use crate::errors::AppResult;
use crate::models::entry::{Field, RawEntry, WellnessEntry};
use crate::models::status::Status;

/// The four inputs of the session form plus the live wellness status.
#[derive(Debug, Clone, Default)]
pub struct Form {
    raw: RawEntry,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.raw.get_mut(field) = value.into();
    }

    pub fn get(&self, field: Field) -> &str {
        self.raw.get(field)
    }

    pub fn raw(&self) -> &RawEntry {
        &self.raw
    }

    /// Recomputed from the screen-time field on every call.
    pub fn status(&self) -> Status {
        Status::from_raw(&self.raw.screen_time)
    }

    pub fn clear(&mut self) {
        self.raw = RawEntry::default();
    }

    /// Add the form to the log; the form is cleared only on success.
    pub fn submit<'a>(&mut self, log: &'a mut EntryLog) -> AppResult<&'a WellnessEntry> {
        let entry = log.add(&self.raw)?;
        self.clear();
        Ok(entry)
    }
}
