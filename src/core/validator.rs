//! Input validation for the four form fields.

use crate::errors::ValidationError;
use crate::models::entry::{Field, RawEntry};
use regex::Regex;
use std::sync::LazyLock;

static LETTERS_AND_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

/// A form that passed every check. Text fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEntry {
    pub name: String,
    pub activity: String,
    pub me_time: String,
    pub minutes: u32,
}

pub fn is_valid_text(text: &str) -> bool {
    LETTERS_AND_SPACES.is_match(text)
}

/// Digits only, parses to an integer > 0.
pub fn parse_minutes(raw: &str) -> Option<u32> {
    let s = raw.trim();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|m| *m > 0)
}

/// Validate a raw form.
///
/// Presence is checked first for all fields (Name → Activity → Me-Time →
/// Screen-Time), then the content of each field in the same order. Only the
/// first failure is returned.
pub fn validate(raw: &RawEntry) -> Result<ValidEntry, ValidationError> {
    for field in Field::ALL {
        if raw.get(field).trim().is_empty() {
            return Err(ValidationError::Missing(field));
        }
    }

    for field in [Field::Name, Field::Activity, Field::MeTime] {
        if !is_valid_text(raw.get(field).trim()) {
            return Err(ValidationError::NotLetters(field));
        }
    }

    let minutes = parse_minutes(&raw.screen_time).ok_or(ValidationError::NotPositive)?;

    Ok(ValidEntry {
        name: raw.name.trim().to_string(),
        activity: raw.activity.trim().to_string(),
        me_time: raw.me_time.trim().to_string(),
        minutes,
    })
}
