// src/export/excel_date.rs

use crate::models::entry::TIMESTAMP_FORMAT;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Interpret a timestamp string as an Excel serial date-time, with the
/// number format to display it.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let dt_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

    for fmt in dt_formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return naive_datetime_to_excel_serial(&dt).map(|serial| ("yyyy-mm-dd hh:mm:ss", serial));
        }
    }

    None
}

/// Inverse of [`parse_to_excel_date`], rounded to the second.
pub(crate) fn excel_serial_to_timestamp(serial: f64) -> Option<String> {
    if !serial.is_finite() {
        return None;
    }
    let secs = TimeDelta::try_seconds((serial * 86400.0).round() as i64)?;
    let dt = excel_epoch()?.checked_add_signed(secs)?;
    Some(dt.format(TIMESTAMP_FORMAT).to_string())
}

fn excel_epoch() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let duration = *dt - excel_epoch()?;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}
