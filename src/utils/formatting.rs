//! Formatting utilities used for CLI outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// 150 → "02h 30m"
pub fn mins2readable(mins: u64) -> String {
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}
