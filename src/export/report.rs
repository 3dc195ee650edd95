// src/export/report.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{
    DATE_NUM_FORMAT, TIME_NUM_FORMAT, date_to_excel_serial, time_to_excel_serial,
};
use crate::export::layout::*;
use crate::export::locale::Language;
use crate::export::workbook::ReportWorkbook;
use crate::models::Record;
use crate::models::record::SPECIAL_DAY_HOURS;
use std::path::Path;

/// Everything the report header needs besides the records.
#[derive(Debug, Clone)]
pub struct ReportHeader {
    pub name: String,
    pub year: i32,
    pub month: u32,
    pub workdays: i64,
    pub carryover: f64,
    pub language: Language,
}

/// Totals written into the report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportTotals {
    pub worked_hours: f64,
    pub target_hours: f64,
    pub balance: f64,
}

impl ReportTotals {
    pub fn compute(records: &[Record], header: &ReportHeader) -> Self {
        let worked_hours: f64 = records.iter().map(Record::worked_hours).sum();
        let target_hours = header.workdays as f64 * SPECIAL_DAY_HOURS;
        Self {
            worked_hours,
            target_hours,
            balance: header.carryover + worked_hours - target_hours,
        }
    }
}

/// Fill `template` with `records` (already sorted by date) and save the
/// result to `out`. The template file itself is never modified.
pub fn render_report(
    template: &Path,
    out: &Path,
    records: &[Record],
    header: &ReportHeader,
) -> AppResult<ReportTotals> {
    if records.len() > MAX_RECORD_ROWS as usize {
        return Err(AppError::Spreadsheet(format!(
            "{} records do not fit the {} rows of the template",
            records.len(),
            MAX_RECORD_ROWS
        )));
    }

    let mut book = ReportWorkbook::open(template)?;
    let lang = header.language;

    book.set_text(SHEET_TIMESHEET, NAME_CELL, &header.name)?;
    book.set_text(
        SHEET_TIMESHEET,
        MONTH_CELL,
        &lang.month_year(header.year, header.month),
    )?;
    book.set_number(SHEET_TIMESHEET, CARRYOVER_CELL, header.carryover)?;

    for (i, record) in records.iter().enumerate() {
        let row = FIRST_RECORD_ROW + i as u32;
        write_record_row(&mut book, row, record, lang)?;
    }

    let totals = ReportTotals::compute(records, header);
    let balance_cell = book.balance_cell()?;
    book.set_number(SHEET_TIMESHEET, balance_cell, totals.balance)?;

    book.save(out)?;
    Ok(totals)
}

fn write_record_row(
    book: &mut ReportWorkbook,
    row: u32,
    record: &Record,
    lang: Language,
) -> AppResult<()> {
    let at = |col| Cell::new(row, col);

    book.set_text(SHEET_TIMESHEET, at(COL_WEEKDAY), lang.weekday_of(record.date))?;
    book.set_formatted(
        SHEET_TIMESHEET,
        at(COL_DATE),
        date_to_excel_serial(record.date),
        DATE_NUM_FORMAT,
    )?;

    if record.special {
        // time columns stay blank
        book.set_number(SHEET_TIMESHEET, at(COL_TOTAL), SPECIAL_DAY_HOURS)?;
    } else {
        let times = [
            (COL_WORK_START, record.work.start),
            (COL_WORK_END, record.work.end),
            (COL_BREAK_START, record.pause.start),
            (COL_BREAK_END, record.pause.end),
        ];
        for (col, t) in times {
            book.set_formatted(
                SHEET_TIMESHEET,
                at(col),
                time_to_excel_serial(t),
                TIME_NUM_FORMAT,
            )?;
        }
    }

    book.set_text(SHEET_TIMESHEET, at(COL_COMMENT), &record.comment)?;
    Ok(())
}
