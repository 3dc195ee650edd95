// src/export/layout.rs
//
// Fixed cell layout shared by the template generator, the report renderer
// and the carryover reader. Rows and columns are 1-based, as in the
// spreadsheet UI.

pub const SHEET_TIMESHEET: &str = "Timesheet";
pub const SHEET_LOGGING: &str = "Logging";

/// A cell address, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// `(col, row)` as expected by umya-spreadsheet.
    pub(crate) fn coords(&self) -> (u32, u32) {
        (self.col, self.row)
    }

    /// `A1`-style reference, used in template formulas.
    pub fn a1(&self) -> String {
        format!("{}{}", column_letters(self.col), self.row)
    }
}

pub(crate) fn column_letters(mut col: u32) -> String {
    let mut letters = Vec::new();
    while col > 0 {
        let rem = (col - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        col = (col - 1) / 26;
    }
    letters.iter().rev().collect()
}

// ---------------------------
// Header
// ---------------------------
pub const TITLE_CELL: Cell = Cell::new(2, 2);
pub const NAME_CELL: Cell = Cell::new(7, 4);
pub const MONTH_CELL: Cell = Cell::new(8, 4);
pub const CARRYOVER_CELL: Cell = Cell::new(8, 10);

// ---------------------------
// Record grid
// ---------------------------
pub const GRID_HEADER_ROW: u32 = 11;
pub const FIRST_RECORD_ROW: u32 = 12;
/// One row per calendar day at most.
pub const MAX_RECORD_ROWS: u32 = 31;

pub const COL_WEEKDAY: u32 = 2;
pub const COL_DATE: u32 = 3;
pub const COL_WORK_START: u32 = 4;
pub const COL_WORK_END: u32 = 5;
pub const COL_BREAK_START: u32 = 6;
pub const COL_BREAK_END: u32 = 7;
pub const COL_BREAK_HOURS: u32 = 8;
pub const COL_TOTAL: u32 = 9;
pub const COL_COMMENT: u32 = 11;

pub fn last_record_row() -> u32 {
    FIRST_RECORD_ROW + MAX_RECORD_ROWS - 1
}

// ---------------------------
// Summary (value column J)
// ---------------------------
pub const COL_SUMMARY: u32 = 10;
pub const TARGET_ROW: u32 = 44;
pub const WORKED_ROW: u32 = 45;
pub const CARRY_ROW: u32 = 46;
pub const BALANCE_ROW: u32 = 47;

// ---------------------------
// Logging sheet: where to find the closing balance
// ---------------------------
pub const POINTER_ROW_CELL: Cell = Cell::new(2, 2);
pub const POINTER_COL_CELL: Cell = Cell::new(3, 2);
