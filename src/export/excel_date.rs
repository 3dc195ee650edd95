// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

pub(crate) const DATE_NUM_FORMAT: &str = "dd.mm.yyyy";
pub(crate) const TIME_NUM_FORMAT: &str = "hh:mm";
pub(crate) const HOURS_NUM_FORMAT: &str = "0.00";

/// Excel day zero (serial 0), accounting for the 1900 leap-year bug.
fn excel_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default()
}

/// Serial number of a date: whole days since the Excel epoch.
pub(crate) fn date_to_excel_serial(d: NaiveDate) -> f64 {
    (d - excel_epoch()).num_days() as f64
}

/// Serial number of a time of day: fraction of 24 hours.
pub(crate) fn time_to_excel_serial(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}
