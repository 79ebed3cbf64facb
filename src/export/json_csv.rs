// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::models::entry::{HEADERS, WellnessEntry};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed, one object per entry keyed by the header names.
pub(crate) fn export_json(entries: &[WellnessEntry], path: &Path) -> AppResult<()> {
    log::info!("writing {} entries as JSON to {}", entries.len(), path.display());

    let json_data = serde_json::to_string_pretty(entries)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

/// Export CSV, overwriting the file (header included thanks to serde).
pub(crate) fn export_csv(entries: &[WellnessEntry], path: &Path) -> AppResult<()> {
    log::info!("writing {} entries as CSV to {}", entries.len(), path.display());

    let mut wtr = csv::Writer::from_path(path)?;
    if entries.is_empty() {
        wtr.write_record(HEADERS)?;
    }
    for item in entries {
        wtr.serialize(item)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Append one row to a CSV file, writing the header first when the file is
/// new or empty.
pub(crate) fn append_csv_row(path: &Path, row: &[String]) -> AppResult<()> {
    let is_new = path.metadata().map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = csv::Writer::from_writer(file);

    if is_new {
        wtr.write_record(HEADERS)?;
    }
    wtr.write_record(row)?;

    wtr.flush()?;
    Ok(())
}

/// Read back every data row of a CSV file written by [`append_csv_row`].
pub(crate) fn read_csv_rows(path: &Path) -> AppResult<Vec<Vec<String>>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
