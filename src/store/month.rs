use super::json;
use crate::errors::AppResult;
use crate::models::Record;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// All records of one (year, month), as loaded from its backing file.
#[derive(Debug)]
pub struct MonthlyRecords {
    pub year: i32,
    pub month: u32,
    path: PathBuf,
    records: Vec<Record>,
}

impl MonthlyRecords {
    pub fn load(year: i32, month: u32, path: PathBuf) -> AppResult<Self> {
        let records = json::load_records(&path)?;
        Ok(Self {
            year,
            month,
            path,
            records,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self, date: NaiveDate) -> bool {
        self.position(date).is_some()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&Record> {
        self.records.iter().find(|r| r.date == date)
    }

    fn position(&self, date: NaiveDate) -> Option<usize> {
        self.records.iter().position(|r| r.date == date)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion (on-disk) order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records sorted by date ascending.
    pub fn sorted(&self) -> Vec<Record> {
        let mut out = self.records.clone();
        out.sort_by_key(|r| r.date);
        out
    }

    /// Append `record`; returns false if its date is already taken.
    pub(crate) fn insert(&mut self, record: Record) -> bool {
        if self.exists(record.date) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Swap the record with the same date for `record`, keeping its position.
    pub(crate) fn replace(&mut self, record: Record) -> Option<Record> {
        let idx = self.position(record.date)?;
        Some(std::mem::replace(&mut self.records[idx], record))
    }

    pub(crate) fn remove(&mut self, date: NaiveDate) -> Option<Record> {
        let idx = self.position(date)?;
        Some(self.records.remove(idx))
    }

    /// Write the whole collection back, or drop the file once nothing is left.
    pub(crate) fn persist(&self) -> AppResult<()> {
        if self.records.is_empty() {
            json::remove_records(&self.path)
        } else {
            json::write_records(&self.path, &self.records)
        }
    }
}
