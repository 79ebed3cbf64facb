use serde::Serialize;
use std::fmt;

/// Minimum screen-free minutes for an entry to count as healthy.
pub const HEALTHY_THRESHOLD_MINUTES: i64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "Healthy")]
    Healthy,
    #[serde(rename = "Needs More Me-Time")]
    NeedsMoreMeTime,
}

impl Status {
    /// Classify a number of screen-free minutes.
    pub fn classify(minutes: i64) -> Self {
        if minutes >= HEALTHY_THRESHOLD_MINUTES {
            Status::Healthy
        } else {
            Status::NeedsMoreMeTime
        }
    }

    /// Live classification of the raw screen-time field, as typed.
    ///
    /// Anything that is not a plain run of decimal digits counts as
    /// "needs more me-time", same as zero.
    pub fn from_raw(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Status::NeedsMoreMeTime;
        }

        match s.parse::<i64>() {
            Ok(n) => Status::classify(n),
            // only digits but too big for i64: certainly above threshold
            Err(_) => Status::Healthy,
        }
    }

    /// Label written to spreadsheets and shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Healthy => "Healthy",
            Status::NeedsMoreMeTime => "Needs More Me-Time",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, Status::Healthy)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
