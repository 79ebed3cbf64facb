#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use calamine::{Data, Reader, Xlsx, open_workbook};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use wellnesslog::core::EntryLog;
use wellnesslog::errors::{AppError, AppResult};
use wellnesslog::export::{NoViewer, Viewer};
use wellnesslog::models::RawEntry;

pub fn wl() -> Command {
    cargo_bin_cmd!("wellnesslog")
}

/// Create a unique output path inside the system temp dir and remove any existing file
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wellnesslog.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Fresh empty directory used as HOME/APPDATA for CLI tests
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wellnesslog_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Temp HOME with a config that never opens exported files
pub fn temp_home_no_viewer(name: &str) -> PathBuf {
    let home = temp_home(name);
    let dir = if cfg!(target_os = "windows") {
        home.join("wellnesslog")
    } else {
        home.join(".wellnesslog")
    };
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(dir.join("wellnesslog.conf"), "open_after_export: false\n").expect("write config");
    home
}

pub fn wl_in(home: &Path) -> Command {
    let mut cmd = wl();
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Entry log writing CSV files in the temp dir, without viewer.
pub fn csv_log(name: &str) -> (EntryLog, PathBuf, PathBuf) {
    let append = temp_out(&format!("{name}_append"), "csv");
    let export = temp_out(&format!("{name}_export"), "csv");
    let log = EntryLog::new(&append, &export)
        .expect("entry log")
        .with_viewer(NoViewer);
    (log, append, export)
}

pub fn raw(name: &str, activity: &str, me_time: &str, minutes: &str) -> RawEntry {
    RawEntry::new(name, activity, me_time, minutes)
}

pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 1)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid timestamp")
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read file")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Data rows of the first sheet of a workbook, header included.
pub fn read_workbook(path: &Path) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("open workbook");
    let range = workbook
        .worksheet_range_at(0)
        .expect("first sheet")
        .expect("read sheet");
    range.rows().map(<[Data]>::to_vec).collect()
}

pub fn text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        other => panic!("expected a text cell, got {other:?}"),
    }
}

pub const HEADER_LINE: &str =
    "Timestamp,Name,Wellness Activity,Me-Time Activity,Off-screen Time (min),Frequency,Status";

/// Viewer that always fails, like a host without a spreadsheet program.
pub struct BrokenViewer;

impl Viewer for BrokenViewer {
    fn open(&self, _path: &Path) -> AppResult<()> {
        Err(AppError::from(std::io::Error::other("no viewer installed")))
    }
}
