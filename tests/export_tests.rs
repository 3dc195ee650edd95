mod common;
use common::{cell_number, cell_text, date, load_config, normal, setup};
use rtimesheet::config::Config;
use rtimesheet::core::ExportLogic;
use rtimesheet::errors::AppError;
use rtimesheet::export::layout::*;
use rtimesheet::export::{
    Language, export_path, generate_templates, read_carryover, template_path,
};
use rtimesheet::models::Record;
use rtimesheet::store::RecordStore;
use std::fs;

/// Config in a temp dir, with a display name and generated templates.
fn prepared() -> (tempfile::TempDir, Config) {
    let (dir, path) = setup();
    let mut cfg = load_config(&path);
    cfg.set("name", "Max Mustermann").unwrap();
    generate_templates(&cfg.templates_dir(), false).unwrap();
    (dir, cfg)
}

fn store(cfg: &Config) -> RecordStore {
    RecordStore::new(cfg.records_dir())
}

#[test]
fn test_generate_templates_skips_existing() {
    let (_dir, cfg) = prepared();
    let dir = cfg.templates_dir();

    for n in [20, 21, 22, 23] {
        assert!(template_path(&dir, n).is_file(), "template for {n} days");
    }
    assert!(generate_templates(&dir, false).unwrap().is_empty());
    assert_eq!(generate_templates(&dir, true).unwrap().len(), 4);
}

#[test]
fn test_export_fills_header_and_rows() {
    let (_dir, cfg) = prepared();
    let s = store(&cfg);
    // inserted out of order: the report must be sorted by date
    s.add(Record::special(date(20, 3, 2024), "Berufsschule")).unwrap();
    s.add(normal(date(15, 3, 2024), "09:00-17:00", "12:00-12:30", "sick leave"))
        .unwrap();

    let summary = ExportLogic::export(&cfg, date(1, 3, 2024), Language::De).unwrap();
    let out = export_path(&cfg.exports_dir(), 2024, 3);
    assert_eq!(summary.path, out);
    assert_eq!(summary.workdays, 21);
    assert_eq!(summary.template, template_path(&cfg.templates_dir(), 21));

    // header
    assert_eq!(cell_text(&out, NAME_CELL.row, NAME_CELL.col), "Max Mustermann");
    assert_eq!(cell_text(&out, MONTH_CELL.row, MONTH_CELL.col), "März 2024");
    assert_eq!(cell_number(&out, CARRYOVER_CELL.row, CARRYOVER_CELL.col), 0.0);

    // first row: 15.03.2024, a Friday
    let r = FIRST_RECORD_ROW;
    assert_eq!(cell_text(&out, r, COL_WEEKDAY), "Freitag");
    assert_eq!(cell_number(&out, r, COL_DATE), 45366.0);
    assert_eq!(cell_number(&out, r, COL_WORK_START), 0.375);
    assert!((cell_number(&out, r, COL_WORK_END) - 17.0 / 24.0).abs() < 1e-9);
    assert_eq!(cell_number(&out, r, COL_BREAK_START), 0.5);
    assert!((cell_number(&out, r, COL_BREAK_END) - 12.5 / 24.0).abs() < 1e-9);
    assert_eq!(cell_text(&out, r, COL_COMMENT), "sick leave");

    // second row: special day, fixed credit and no times
    let r = FIRST_RECORD_ROW + 1;
    assert_eq!(cell_text(&out, r, COL_WEEKDAY), "Mittwoch");
    assert_eq!(cell_number(&out, r, COL_TOTAL), 8.0);
    for col in [COL_WORK_START, COL_WORK_END, COL_BREAK_START, COL_BREAK_END] {
        assert_eq!(cell_text(&out, r, col), "", "column {col} must stay blank");
    }
    assert_eq!(cell_text(&out, r, COL_COMMENT), "Berufsschule");

    // balance: 0 + 7.5 + 8 - 21 * 8
    assert_eq!(summary.totals.worked_hours, 15.5);
    assert_eq!(cell_number(&out, BALANCE_ROW, COL_SUMMARY), -152.5);
}

#[test]
fn test_export_in_english() {
    let (_dir, cfg) = prepared();
    store(&cfg)
        .add(normal(date(15, 3, 2024), "09:00-17:00", "12:00-12:30", ""))
        .unwrap();

    ExportLogic::export(&cfg, date(15, 3, 2024), Language::En).unwrap();
    let out = export_path(&cfg.exports_dir(), 2024, 3);

    assert_eq!(cell_text(&out, MONTH_CELL.row, MONTH_CELL.col), "March 2024");
    assert_eq!(cell_text(&out, FIRST_RECORD_ROW, COL_WEEKDAY), "Friday");
}

#[test]
fn test_template_is_not_modified() {
    let (_dir, cfg) = prepared();
    store(&cfg)
        .add(normal(date(15, 3, 2024), "09:00-17:00", "12:00-12:30", "x"))
        .unwrap();

    let template = template_path(&cfg.templates_dir(), 21);
    let before = fs::read(&template).unwrap();
    ExportLogic::export(&cfg, date(15, 3, 2024), Language::De).unwrap();
    assert_eq!(fs::read(&template).unwrap(), before);
}

#[test]
fn test_empty_month_writes_nothing() {
    let (_dir, cfg) = prepared();

    let err = ExportLogic::export(&cfg, date(1, 3, 2024), Language::De).unwrap_err();
    assert!(matches!(err, AppError::EmptyExport(ref m) if m == "März 2024"));
    assert!(!export_path(&cfg.exports_dir(), 2024, 3).exists());
}

#[test]
fn test_missing_template_is_an_error() {
    let (_dir, path) = setup();
    let cfg = load_config(&path);
    store(&cfg)
        .add(normal(date(15, 3, 2024), "09:00-17:00", "12:00-12:30", ""))
        .unwrap();

    let err = ExportLogic::export(&cfg, date(15, 3, 2024), Language::De).unwrap_err();
    assert!(matches!(err, AppError::MissingTemplate(ref p) if p.ends_with("template_timesheet_21_days.xlsx")));
    assert!(!export_path(&cfg.exports_dir(), 2024, 3).exists());
}

#[test]
fn test_carryover_of_missing_export_is_zero() {
    let (dir, _path) = setup();
    assert_eq!(read_carryover(&dir.path().join("nope.xlsx")).unwrap(), 0.0);
}

#[test]
fn test_corrupt_previous_export_is_fatal() {
    let (_dir, cfg) = prepared();
    store(&cfg)
        .add(normal(date(15, 3, 2024), "09:00-17:00", "12:00-12:30", ""))
        .unwrap();

    let prev = export_path(&cfg.exports_dir(), 2024, 2);
    fs::create_dir_all(cfg.exports_dir()).unwrap();
    fs::write(&prev, b"definitely not a zip archive").unwrap();

    let err = ExportLogic::export(&cfg, date(15, 3, 2024), Language::De).unwrap_err();
    assert!(matches!(err, AppError::Spreadsheet(_)));
    assert!(!export_path(&cfg.exports_dir(), 2024, 3).exists());
}

#[test]
fn test_balance_carries_into_next_month() {
    let (_dir, cfg) = prepared();
    let s = store(&cfg);

    // February 2024: 21 working days, one special day → 8 - 168
    s.add(Record::special(date(1, 2, 2024), "")).unwrap();
    ExportLogic::export(&cfg, date(1, 2, 2024), Language::De).unwrap();
    let feb = export_path(&cfg.exports_dir(), 2024, 2);
    assert_eq!(read_carryover(&feb).unwrap(), -160.0);

    s.add(normal(date(15, 3, 2024), "09:00-17:00", "12:00-12:30", ""))
        .unwrap();
    let summary = ExportLogic::export(&cfg, date(15, 3, 2024), Language::De).unwrap();
    assert_eq!(summary.carryover, -160.0);

    let mar = export_path(&cfg.exports_dir(), 2024, 3);
    assert_eq!(cell_number(&mar, CARRYOVER_CELL.row, CARRYOVER_CELL.col), -160.0);
    assert_eq!(cell_number(&mar, BALANCE_ROW, COL_SUMMARY), -160.0 + 7.5 - 168.0);
}

#[test]
fn test_january_reads_december_of_previous_year() {
    let (_dir, cfg) = prepared();
    let s = store(&cfg);

    // December 2023: 21 working days
    s.add(Record::special(date(29, 12, 2023), "")).unwrap();
    ExportLogic::export(&cfg, date(29, 12, 2023), Language::De).unwrap();

    // January 2024: 23 working days
    s.add(Record::special(date(2, 1, 2024), "")).unwrap();
    let summary = ExportLogic::export(&cfg, date(2, 1, 2024), Language::De).unwrap();

    assert_eq!(summary.workdays, 23);
    assert_eq!(summary.carryover, 8.0 - 168.0);
    assert_eq!(summary.totals.balance, -160.0 + 8.0 - 184.0);
}

#[test]
fn test_reexport_is_idempotent() {
    let (_dir, cfg) = prepared();
    store(&cfg)
        .add(normal(date(4, 3, 2024), "08:00-16:00", "12:00-12:30", "a"))
        .unwrap();

    let first = ExportLogic::export(&cfg, date(4, 3, 2024), Language::De).unwrap();
    let second = ExportLogic::export(&cfg, date(4, 3, 2024), Language::De).unwrap();
    assert_eq!(first.totals, second.totals);

    let out = export_path(&cfg.exports_dir(), 2024, 3);
    assert_eq!(cell_text(&out, FIRST_RECORD_ROW, COL_COMMENT), "a");
    assert_eq!(cell_text(&out, FIRST_RECORD_ROW + 1, COL_COMMENT), "");
}
