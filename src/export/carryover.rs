// src/export/carryover.rs

use crate::errors::AppResult;
use crate::export::layout::SHEET_TIMESHEET;
use crate::export::workbook::ReportWorkbook;
use std::path::Path;

/// Hours carried over from a finished export.
///
/// A missing file means there is nothing to carry over (0). A file that
/// exists but cannot be read, lacks a sheet or has a broken balance pointer
/// is an error. An empty balance cell counts as 0.
pub fn read_carryover(path: &Path) -> AppResult<f64> {
    if !path.exists() {
        return Ok(0.0);
    }

    let book = ReportWorkbook::open(path)?;
    let cell = book.balance_cell()?;
    Ok(book.number(SHEET_TIMESHEET, cell)?.unwrap_or(0.0))
}
