#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rtimesheet::config::Config;
use rtimesheet::models::{Record, TimeSpan};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// The binary pointed at an isolated config file, non-interactive.
pub fn rts_in(config: &Path) -> Command {
    let mut cmd = rts();
    cmd.arg("--config").arg(config).arg("-n");
    cmd
}

/// A fresh temp dir holding `rtimesheet.conf`; data dirs default next to it.
pub fn setup() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = dir.path().join("rtimesheet.conf");
    (dir, config)
}

pub fn load_config(path: &Path) -> Config {
    Config::load(Some(path)).expect("load config")
}

pub fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn span(s: &str) -> TimeSpan {
    TimeSpan::parse(s).expect("valid span")
}

pub fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

pub fn normal(d: NaiveDate, work: &str, pause: &str, comment: &str) -> Record {
    Record::new(d, span(work), span(pause), comment, false)
}

/// Read a cell of the `Timesheet` sheet as text. `(row, col)` are 1-based.
pub fn cell_text(path: &Path, row: u32, col: u32) -> String {
    let book = umya_spreadsheet::reader::xlsx::read(path).expect("read xlsx");
    book.get_sheet_by_name("Timesheet")
        .expect("Timesheet sheet")
        .get_value((col, row))
}

pub fn cell_number(path: &Path, row: u32, col: u32) -> f64 {
    let raw = cell_text(path, row, col);
    raw.trim()
        .parse()
        .unwrap_or_else(|_| panic!("cell ({row}, {col}) is not a number: '{raw}'"))
}
