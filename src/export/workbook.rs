// src/export/workbook.rs
//
// Thin wrapper over umya-spreadsheet: open an existing .xlsx, read and write
// individual cells by sheet name, save to a new path.

use crate::errors::{AppError, AppResult};
use crate::export::layout::{Cell, POINTER_COL_CELL, POINTER_ROW_CELL, SHEET_LOGGING};
use std::path::Path;
use umya_spreadsheet::{Spreadsheet, Worksheet};

pub(crate) struct ReportWorkbook {
    book: Spreadsheet,
}

impl ReportWorkbook {
    pub(crate) fn open(path: &Path) -> AppResult<Self> {
        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| {
            AppError::Spreadsheet(format!("cannot open {}: {}", path.display(), e))
        })?;
        Ok(Self { book })
    }

    pub(crate) fn save(&self, path: &Path) -> AppResult<()> {
        umya_spreadsheet::writer::xlsx::write(&self.book, path).map_err(|e| {
            AppError::Spreadsheet(format!("cannot save {}: {}", path.display(), e))
        })
    }

    fn sheet(&self, name: &str) -> AppResult<&Worksheet> {
        self.book
            .get_sheet_by_name(name)
            .ok_or_else(|| AppError::Spreadsheet(format!("missing sheet '{}'", name)))
    }

    fn sheet_mut(&mut self, name: &str) -> AppResult<&mut Worksheet> {
        self.book
            .get_sheet_by_name_mut(name)
            .ok_or_else(|| AppError::Spreadsheet(format!("missing sheet '{}'", name)))
    }

    /// Raw text of a cell; empty when the cell does not exist.
    pub(crate) fn text(&self, sheet: &str, cell: Cell) -> AppResult<String> {
        Ok(self.sheet(sheet)?.get_value(cell.coords()))
    }

    /// Numeric value of a cell. `None` when the cell is empty; an error when
    /// it holds something that is not a number.
    pub(crate) fn number(&self, sheet: &str, cell: Cell) -> AppResult<Option<f64>> {
        let raw = self.text(sheet, cell)?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<f64>().map(Some).map_err(|_| {
            AppError::Spreadsheet(format!(
                "expected a number in {}!{}, found '{}'",
                sheet,
                cell.a1(),
                raw
            ))
        })
    }

    pub(crate) fn set_text(&mut self, sheet: &str, cell: Cell, value: &str) -> AppResult<()> {
        self.sheet_mut(sheet)?
            .get_cell_mut(cell.coords())
            .set_value_string(value);
        Ok(())
    }

    pub(crate) fn set_number(&mut self, sheet: &str, cell: Cell, value: f64) -> AppResult<()> {
        self.sheet_mut(sheet)?
            .get_cell_mut(cell.coords())
            .set_value_number(value);
        Ok(())
    }

    /// Write a number with an explicit number format (dates and times).
    pub(crate) fn set_formatted(
        &mut self,
        sheet: &str,
        cell: Cell,
        value: f64,
        num_format: &str,
    ) -> AppResult<()> {
        let c = self.sheet_mut(sheet)?.get_cell_mut(cell.coords());
        c.set_value_number(value);
        c.get_style_mut()
            .get_number_format_mut()
            .set_format_code(num_format);
        Ok(())
    }

    /// Cell holding the month's closing balance, as recorded on the
    /// `Logging` sheet (B2 = row, B3 = column).
    pub(crate) fn balance_cell(&self) -> AppResult<Cell> {
        let row = self.pointer(POINTER_ROW_CELL)?;
        let col = self.pointer(POINTER_COL_CELL)?;
        Ok(Cell::new(row, col))
    }

    fn pointer(&self, cell: Cell) -> AppResult<u32> {
        let value = self.number(SHEET_LOGGING, cell)?.ok_or_else(|| {
            AppError::Spreadsheet(format!("empty pointer cell {}!{}", SHEET_LOGGING, cell.a1()))
        })?;

        if value < 1.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
            return Err(AppError::Spreadsheet(format!(
                "invalid pointer {} in {}!{}",
                value,
                SHEET_LOGGING,
                cell.a1()
            )));
        }
        Ok(value as u32)
    }
}
