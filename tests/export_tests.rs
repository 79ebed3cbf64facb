mod common;
use calamine::Data;
use common::{
    BrokenViewer, HEADER_LINE, at, csv_log, raw, read_lines, read_workbook, temp_out, text,
};
use rust_xlsxwriter::Workbook;
use std::fs;
use wellnesslog::core::EntryLog;
use wellnesslog::errors::AppError;
use wellnesslog::export::{AppendSink, NoViewer, SheetFormat, write_table};
use wellnesslog::models::entry::HEADERS;

#[test]
fn test_export_empty_log_fails() {
    let (log, _, export) = csv_log("export_empty");
    assert!(matches!(log.export_all(), Err(AppError::NoEntries)));
    assert!(!export.exists());
}

#[test]
fn test_export_contains_entries_in_order() {
    let (mut log, _, export) = csv_log("export_order");
    log.add_at(&raw("Jane Doe", "Meditation", "Reading", "150"), at(8, 0, 0))
        .expect("add");
    log.add_at(&raw("Bob", "Yoga", "Walking", "30"), at(9, 0, 0))
        .expect("add");

    let outcome = log.export_all().expect("export");
    assert_eq!(outcome.rows, 2);
    assert_eq!(outcome.format, SheetFormat::Csv);
    assert_eq!(outcome.path, export);
    assert!(outcome.viewer_warning.is_none());

    assert_eq!(
        read_lines(&export),
        vec![
            HEADER_LINE.to_string(),
            "2025-10-01 08:00:00,Jane Doe,Meditation,Reading,150,1,Healthy".to_string(),
            "2025-10-01 09:00:00,Bob,Yoga,Walking,30,1,Needs More Me-Time".to_string(),
        ]
    );
}

#[test]
fn test_export_overwrites_previous_file() {
    let (mut log, _, export) = csv_log("export_overwrite");
    log.add_at(&raw("Jane", "Yoga", "Walking", "150"), at(8, 0, 0)).expect("add");
    log.add_at(&raw("Bob", "Yoga", "Walking", "30"), at(9, 0, 0)).expect("add");
    log.export_all().expect("first export");

    log.delete_at(Some(0)).expect("delete");
    log.export_all().expect("second export");

    let lines = read_lines(&export);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("Bob"));
    assert!(!lines.iter().any(|l| l.contains("Jane")));
}

#[test]
fn test_viewer_failure_is_only_a_warning() {
    let append = temp_out("viewer_warning_append", "csv");
    let export = temp_out("viewer_warning_export", "csv");
    let mut log = EntryLog::new(&append, &export)
        .expect("log")
        .with_viewer(BrokenViewer);

    log.add(&raw("Jane", "Yoga", "Walking", "150")).expect("add");
    let outcome = log.export_all().expect("export must succeed");

    let warning = outcome.viewer_warning.expect("warning expected");
    assert!(warning.contains("no viewer installed"));
    assert!(export.exists());
}

#[test]
fn test_viewer_not_called_when_disabled() {
    let append = temp_out("viewer_disabled_append", "csv");
    let export = temp_out("viewer_disabled_export", "csv");
    let mut log = EntryLog::new(&append, &export)
        .expect("log")
        .with_viewer(BrokenViewer)
        .open_after_export(false);

    log.add(&raw("Jane", "Yoga", "Walking", "150")).expect("add");
    let outcome = log.export_all().expect("export");
    assert!(outcome.viewer_warning.is_none());
}

#[test]
fn test_export_write_failure_is_an_error() {
    let append = temp_out("export_fail_append", "csv");
    let mut export = std::env::temp_dir();
    export.push("wellnesslog_missing_dir_for_test");
    fs::remove_dir_all(&export).ok();
    export.push("log.csv");

    let mut log = EntryLog::new(&append, &export).expect("log").with_viewer(NoViewer);
    log.add(&raw("Jane", "Yoga", "Walking", "150")).expect("add");

    assert!(log.export_all().is_err());
    assert_eq!(log.len(), 1);
}

#[test]
fn test_export_json() {
    let append = temp_out("export_json_append", "csv");
    let export = temp_out("export_json", "json");
    let mut log = EntryLog::new(&append, &export).expect("log").with_viewer(NoViewer);
    log.add_at(&raw("Jane Doe", "Meditation", "Reading", "150"), at(8, 0, 0))
        .expect("add");

    log.export_all().expect("export");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&export).expect("read")).expect("json");
    let first = &value[0];
    assert_eq!(first["Timestamp"], "2025-10-01 08:00:00");
    assert_eq!(first["Name"], "Jane Doe");
    assert_eq!(first["Off-screen Time (min)"], 150);
    assert_eq!(first["Frequency"], "1");
    assert_eq!(first["Status"], "Healthy");
}

#[test]
fn test_export_xlsx_writes_workbook() {
    let append = temp_out("export_xlsx_append", "csv");
    let export = temp_out("export_xlsx", "xlsx");
    let mut log = EntryLog::new(&append, &export).expect("log").with_viewer(NoViewer);
    log.add_at(&raw("Jane Doe", "Meditation", "Reading", "150"), at(8, 0, 0))
        .expect("add");
    log.add_at(&raw("Bob", "Yoga", "Walking", "30"), at(9, 0, 0))
        .expect("add");

    log.export_all().expect("export");

    let rows = read_workbook(&export);
    assert_eq!(rows.len(), 3);

    let header: Vec<String> = rows[0].iter().map(text).collect();
    assert_eq!(header, HEADERS);

    assert_eq!(text(&rows[1][1]), "Jane Doe");
    assert_eq!(text(&rows[2][1]), "Bob");
    assert_eq!(rows[1][4], Data::Float(150.0));
    assert_eq!(text(&rows[1][5]), "1");
    assert_eq!(text(&rows[2][6]), "Needs More Me-Time");

    // 2025-10-01 08:00:00 as an Excel serial
    let serial = match &rows[1][0] {
        Data::DateTime(dt) => dt.as_f64(),
        Data::Float(f) => *f,
        other => panic!("expected a date cell, got {other:?}"),
    };
    assert!((serial - 45931.333333).abs() < 1e-5);
}

#[test]
fn test_xlsx_append_file_reads_back_rows() {
    let append = temp_out("append_xlsx", "xlsx");
    let export = temp_out("append_xlsx_export", "csv");
    let mut log = EntryLog::new(&append, &export).expect("log").with_viewer(NoViewer);

    log.add_at(&raw("Jane", "Yoga", "Walking", "150"), at(8, 0, 0)).expect("add");
    log.add_at(&raw("Bob", "Yoga", "Walking", "30"), at(9, 0, 5)).expect("add");
    log.clear_all();

    assert!(!append.with_extension("csv").exists());

    let rows = AppendSink::new(&append).expect("sink").rows().expect("rows");
    assert_eq!(
        rows,
        vec![
            vec!["2025-10-01 08:00:00", "Jane", "Yoga", "Walking", "150", "1", "Healthy"],
            vec!["2025-10-01 09:00:05", "Bob", "Yoga", "Walking", "30", "1", "Needs More Me-Time"],
        ]
    );
}

#[test]
fn test_xlsx_append_keeps_existing_workbook() {
    let append = temp_out("append_xlsx_existing", "xlsx");

    // a workbook written by an earlier export, nothing else next to it
    {
        let scratch = temp_out("append_xlsx_existing_scratch", "csv");
        let mut log = EntryLog::new(&scratch, &append).expect("log").with_viewer(NoViewer);
        log.add_at(&raw("Jane", "Yoga", "Walking", "150"), at(8, 0, 0)).expect("add");
        log.export_all().expect("export");
    }

    let export = temp_out("append_xlsx_existing_export", "csv");
    let mut log = EntryLog::new(&append, &export).expect("log").with_viewer(NoViewer);
    log.add_at(&raw("Bob", "Yoga", "Walking", "30"), at(9, 0, 0)).expect("add");

    let rows = read_workbook(&append);
    assert_eq!(rows.len(), 3);
    assert_eq!(text(&rows[1][1]), "Jane");
    assert_eq!(text(&rows[2][1]), "Bob");
}

#[test]
fn test_xlsx_append_refuses_foreign_workbook() {
    let append = temp_out("append_xlsx_foreign", "xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Budget").expect("write");
    sheet.write_number(1, 0, 42.0).expect("write");
    workbook.save(&append).expect("save");

    let export = temp_out("append_xlsx_foreign_export", "csv");
    let mut log = EntryLog::new(&append, &export).expect("log").with_viewer(NoViewer);

    let err = log.add(&raw("Jane", "Yoga", "Walking", "150")).unwrap_err();
    assert!(matches!(err, AppError::Export(_)));
    assert!(log.is_empty());

    let rows = read_workbook(&append);
    assert_eq!(rows.len(), 2);
    assert_eq!(text(&rows[0][0]), "Budget");
}

#[test]
fn test_export_file_cannot_be_the_append_file() {
    let path = temp_out("same_file", "csv");
    assert!(matches!(
        EntryLog::new(&path, &path),
        Err(AppError::SameFile(_))
    ));

    assert!(matches!(
        EntryLog::new("wellness_same.xlsx", "./wellness_same.xlsx"),
        Err(AppError::SameFile(_))
    ));
    assert!(!path.exists());
}

#[test]
fn test_append_file_reused_across_sessions() {
    let append = temp_out("append_sessions", "csv");
    let export = temp_out("append_sessions_export", "csv");

    {
        let mut log = EntryLog::new(&append, &export).expect("log");
        log.add(&raw("Jane", "Yoga", "Walking", "150")).expect("add");
    }
    {
        let mut log = EntryLog::new(&append, &export).expect("log");
        assert!(log.is_empty());
        log.add(&raw("Bob", "Yoga", "Walking", "30")).expect("add");
    }

    let lines = read_lines(&append);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HEADER_LINE);
    assert_eq!(lines.iter().filter(|l| l.starts_with("Timestamp")).count(), 1);
}

#[test]
fn test_unsupported_formats() {
    let json_append = temp_out("unsupported_append", "json");
    assert!(matches!(
        AppendSink::new(&json_append),
        Err(AppError::InvalidSheetFormat(_))
    ));

    let append = temp_out("unsupported_export_append", "csv");
    let txt = temp_out("unsupported_export", "txt");
    assert!(matches!(
        EntryLog::new(&append, &txt),
        Err(AppError::InvalidSheetFormat(_))
    ));

    assert!(matches!(
        write_table(&[], &txt),
        Err(AppError::InvalidSheetFormat(_))
    ));
}
