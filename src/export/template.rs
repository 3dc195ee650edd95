// src/export/template.rs

use crate::errors::AppResult;
use crate::export::excel_date::{DATE_NUM_FORMAT, HOURS_NUM_FORMAT, TIME_NUM_FORMAT};
use crate::export::layout::*;
use crate::models::record::SPECIAL_DAY_HOURS;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::fs;
use std::path::{Path, PathBuf};

/// Every working-day count a Monday–Friday month can have.
pub const TEMPLATE_WORKDAYS: [i64; 4] = [20, 21, 22, 23];

/// `template_timesheet_{N}_days.xlsx` inside `dir`.
pub fn template_path(dir: &Path, workdays: i64) -> PathBuf {
    dir.join(format!("template_timesheet_{}_days.xlsx", workdays))
}

/// Write the blank templates into `dir`. Existing files are kept unless
/// `force`. Returns the paths actually written.
pub fn generate_templates(dir: &Path, force: bool) -> AppResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for workdays in TEMPLATE_WORKDAYS {
        let path = template_path(dir, workdays);
        if path.exists() && !force {
            continue;
        }
        write_template(&path, workdays)?;
        written.push(path);
    }
    Ok(written)
}

/// One blank report for a month with `workdays` working days.
pub fn write_template(path: &Path, workdays: i64) -> AppResult<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_TIMESHEET)?;
    write_timesheet(sheet, workdays)?;

    let log = workbook.add_worksheet();
    log.set_name(SHEET_LOGGING)?;
    write_logging(log)?;

    workbook.save(path)?;
    Ok(())
}

// rust_xlsxwriter addresses are 0-based
fn at(cell: Cell) -> (u32, u16) {
    (cell.row - 1, (cell.col - 1) as u16)
}

fn write_timesheet(sheet: &mut Worksheet, workdays: i64) -> AppResult<()> {
    let title = Format::new().set_bold().set_font_size(16);
    let label = Format::new().set_bold();
    let header = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    let cell = Format::new().set_border(FormatBorder::Thin);
    let date = cell.clone().set_num_format(DATE_NUM_FORMAT);
    let time = cell.clone().set_num_format(TIME_NUM_FORMAT);
    let hours = cell.clone().set_num_format(HOURS_NUM_FORMAT);

    // ---------------------------
    // Header block
    // ---------------------------
    let (r, c) = at(TITLE_CELL);
    sheet.write_with_format(r, c, "Stundenzettel", &title)?;

    let (r, c) = at(NAME_CELL);
    sheet.write_with_format(r, c - 2, "Name:", &label)?;
    let (r, c) = at(MONTH_CELL);
    sheet.write_with_format(r, c - 2, "Monat:", &label)?;
    let (r, c) = at(CARRYOVER_CELL);
    sheet.write_with_format(r, c - 2, "Übertrag:", &label)?;
    sheet.write_number_with_format(r, c, 0.0, &hours)?;

    // ---------------------------
    // Record grid
    // ---------------------------
    let columns = [
        (COL_WEEKDAY, "Wochentag", 12.0),
        (COL_DATE, "Datum", 12.0),
        (COL_WORK_START, "Beginn", 9.0),
        (COL_WORK_END, "Ende", 9.0),
        (COL_BREAK_START, "Pause von", 10.0),
        (COL_BREAK_END, "Pause bis", 10.0),
        (COL_BREAK_HOURS, "Pause (h)", 10.0),
        (COL_TOTAL, "Stunden", 10.0),
        (COL_SUMMARY, "", 10.0),
        (COL_COMMENT, "Bemerkung", 30.0),
    ];
    for (col, text, width) in columns {
        let (r, c) = at(Cell::new(GRID_HEADER_ROW, col));
        if text.is_empty() {
            sheet.write_blank(r, c, &header)?;
        } else {
            sheet.write_with_format(r, c, text, &header)?;
        }
        sheet.set_column_width(c, width)?;
    }

    for row in FIRST_RECORD_ROW..=last_record_row() {
        let a1 = |col: u32| Cell::new(row, col).a1();
        let r = row - 1;

        sheet.write_blank(r, (COL_WEEKDAY - 1) as u16, &cell)?;
        sheet.write_blank(r, (COL_DATE - 1) as u16, &date)?;
        for col in [COL_WORK_START, COL_WORK_END, COL_BREAK_START, COL_BREAK_END] {
            sheet.write_blank(r, (col - 1) as u16, &time)?;
        }

        let break_formula = format!(
            "=IF({fs}=\"\",0,({fe}-{fs})*24)",
            fs = a1(COL_BREAK_START),
            fe = a1(COL_BREAK_END)
        );
        sheet.write_formula_with_format(r, (COL_BREAK_HOURS - 1) as u16, break_formula.as_str(), &hours)?;

        let total_formula = format!(
            "=IF({ws}=\"\",\"\",({we}-{ws})*24-{bh})",
            ws = a1(COL_WORK_START),
            we = a1(COL_WORK_END),
            bh = a1(COL_BREAK_HOURS)
        );
        sheet.write_formula_with_format(r, (COL_TOTAL - 1) as u16, total_formula.as_str(), &hours)?;

        sheet.write_blank(r, (COL_COMMENT - 1) as u16, &cell)?;
    }

    // ---------------------------
    // Summary
    // ---------------------------
    let first_total = Cell::new(FIRST_RECORD_ROW, COL_TOTAL).a1();
    let last_total = Cell::new(last_record_row(), COL_TOTAL).a1();
    let target = Cell::new(TARGET_ROW, COL_SUMMARY).a1();
    let worked = Cell::new(WORKED_ROW, COL_SUMMARY).a1();
    let carry = Cell::new(CARRY_ROW, COL_SUMMARY).a1();

    let summary = [
        (TARGET_ROW, "Soll (h)", format!("={}*{}", workdays, SPECIAL_DAY_HOURS)),
        (WORKED_ROW, "Ist (h)", format!("=SUM({}:{})", first_total, last_total)),
        (CARRY_ROW, "Übertrag (h)", format!("={}", CARRYOVER_CELL.a1())),
        (BALANCE_ROW, "Saldo (h)", format!("={}+{}-{}", carry, worked, target)),
    ];
    for (row, text, formula) in summary {
        let (r, c) = at(Cell::new(row, COL_SUMMARY));
        sheet.write_with_format(r, c - 2, text, &label)?;
        sheet.write_formula_with_format(r, c, formula.as_str(), &hours)?;
    }

    Ok(())
}

fn write_logging(log: &mut Worksheet) -> AppResult<()> {
    log.write_string(0, 0, "Zeiger auf den Saldo")?;

    let (r, c) = at(POINTER_ROW_CELL);
    log.write_string(r, c - 1, "Zeile")?;
    log.write_number(r, c, BALANCE_ROW)?;

    let (r, c) = at(POINTER_COL_CELL);
    log.write_string(r, c - 1, "Spalte")?;
    log.write_number(r, c, COL_SUMMARY)?;

    Ok(())
}
