//! Per-month record storage.
//!
//! Every operation reloads the month from disk, mutates it in memory and
//! writes the complete collection back. There is no locking: two
//! concurrent invocations on the same month race and the last one wins.

mod json;
mod month;

pub use month::MonthlyRecords;

use crate::errors::{AppError, AppResult};
use crate::models::Record;
use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};

/// Result of an update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// The stored record already had the requested content; nothing written.
    Unchanged,
}

pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `timesheet_YYYY_MM.json` inside the records directory.
    pub fn month_path(&self, year: i32, month: u32) -> PathBuf {
        self.dir.join(format!("timesheet_{}_{:02}.json", year, month))
    }

    pub fn load(&self, year: i32, month: u32) -> AppResult<MonthlyRecords> {
        MonthlyRecords::load(year, month, self.month_path(year, month))
    }

    pub fn load_for(&self, date: NaiveDate) -> AppResult<MonthlyRecords> {
        self.load(date.year(), date.month())
    }

    pub fn add(&self, record: Record) -> AppResult<()> {
        let mut month = self.load_for(record.date)?;
        let date_str = record.date_str();

        if !month.insert(record) {
            return Err(AppError::RecordConflict(date_str));
        }
        month.persist()
    }

    pub fn update(&self, record: Record) -> AppResult<UpdateOutcome> {
        let mut month = self.load_for(record.date)?;

        match month.get(record.date) {
            None => return Err(AppError::RecordNotFound(record.date_str())),
            Some(existing) if *existing == record => return Ok(UpdateOutcome::Unchanged),
            Some(_) => {}
        }

        month.replace(record);
        month.persist()?;
        Ok(UpdateOutcome::Updated)
    }

    /// Remove the record at `date` and return it.
    pub fn delete(&self, date: NaiveDate) -> AppResult<Record> {
        let mut month = self.load_for(date)?;

        let removed = month
            .remove(date)
            .ok_or_else(|| AppError::RecordNotFound(crate::utils::date::format_date(date)))?;

        month.persist()?;
        Ok(removed)
    }
}
