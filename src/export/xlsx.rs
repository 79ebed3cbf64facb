// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{excel_serial_to_timestamp, parse_to_excel_date};
use crate::models::entry::HEADERS;
use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::fs;
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const TIMESTAMP_COL: usize = 0;
const MINUTES_COL: usize = 4;

/// Write a styled workbook: coloured header, frozen first row, banded rows
/// and columns sized to their content. The file is always overwritten, via
/// a temporary file renamed into place so a failed save leaves the old one.
pub(crate) fn write_xlsx_table(rows: &[Vec<String>], path: &Path) -> AppResult<()> {
    log::info!("writing {} rows as XLSX to {}", rows.len(), path.display());

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Wellness Log").map_err(to_io_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x4B0082))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_io_app_error)?;

    let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xF5F4FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, values) in rows.iter().enumerate() {
        if values.len() != HEADERS.len() {
            return Err(AppError::Export(format!(
                "row {} has {} columns, expected {}",
                row_index + 1,
                values.len(),
                HEADERS.len()
            )));
        }

        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col, value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    let tmp = path.with_extension("xlsx.tmp");
    workbook.save(path_str(&tmp)?).map_err(to_io_app_error)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Read the data rows of the first sheet of a wellness workbook, header
/// excluded. Fails when the first row is not the wellness header.
pub(crate) fn read_xlsx_rows(path: &Path) -> AppResult<Vec<Vec<String>>> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(to_io_app_error)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Export(format!("{} has no worksheet", path.display())))?
        .map_err(to_io_app_error)?;

    let mut rows = range.rows();

    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let header: Vec<String> = header.iter().map(|c| c.to_string().trim().to_string()).collect();
    if header != HEADERS {
        return Err(AppError::Export(format!(
            "{} is not a wellness log (unexpected header {:?})",
            path.display(),
            header
        )));
    }

    Ok(rows
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(col, cell)| cell_to_string(col, cell))
                .collect()
        })
        .collect())
}

/// Back to the strings written by [`write_xlsx_table`].
fn cell_to_string(col: usize, cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) => s.clone(),
        Data::DateTime(dt) => excel_serial_to_timestamp(dt.as_f64()).unwrap_or_else(|| cell.to_string()),
        Data::Float(f) if col == TIMESTAMP_COL => {
            excel_serial_to_timestamp(*f).unwrap_or_else(|| f.to_string())
        }
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Int(i) => i.to_string(),
        other => other.to_string(),
    }
}

/// Timestamp as an Excel date-time, minutes as a number, the rest as text.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: usize,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if col == TIMESTAMP_COL
        && let Some((num_format, serial)) = parse_to_excel_date(s)
    {
        let fmt = base.set_num_format(num_format);
        worksheet
            .write_with_format(row, col as u16, serial, &fmt)
            .map_err(to_io_app_error)?;
        return Ok(());
    }

    if col == MINUTES_COL
        && let Ok(num) = s.parse::<f64>()
    {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col as u16, num, &fmt)
            .map_err(to_io_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col as u16, s, &base)
        .map_err(to_io_app_error)?;

    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
