//! Colour helpers for terminal output.
use crate::models::status::Status;
use ansi_term::Colour;

/// Healthy → green, needs more me-time → red.
pub fn color_for_status(status: Status) -> Colour {
    match status {
        Status::Healthy => Colour::Green,
        Status::NeedsMoreMeTime => Colour::Red,
    }
}

pub fn paint_status(status: Status) -> String {
    color_for_status(status).bold().paint(status.label()).to_string()
}

/// Dimmed text, used for the index column and empty form fields.
pub fn dim(s: &str) -> String {
    Colour::Fixed(244).paint(s).to_string()
}
