// src/export/locale.rs

use chrono::{Datelike, NaiveDate, Weekday};
use clap::ValueEnum;

/// Display language for weekday and month names in the report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Language {
    #[default]
    De,
    En,
}

const WEEKDAYS_DE: [&str; 7] = [
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
    "Sonntag",
];
const WEEKDAYS_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTHS_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];
const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Language {
    pub fn weekday_name(&self, day: Weekday) -> &'static str {
        let idx = day.num_days_from_monday() as usize;
        match self {
            Language::De => WEEKDAYS_DE[idx],
            Language::En => WEEKDAYS_EN[idx],
        }
    }

    /// Month name for `month` in 1..=12; empty for anything else.
    pub fn month_name(&self, month: u32) -> &'static str {
        let table = match self {
            Language::De => &MONTHS_DE,
            Language::En => &MONTHS_EN,
        };
        month
            .checked_sub(1)
            .and_then(|i| table.get(i as usize))
            .copied()
            .unwrap_or("")
    }

    /// "März 2024"
    pub fn month_year(&self, year: i32, month: u32) -> String {
        format!("{} {}", self.month_name(month), year)
    }

    pub fn weekday_of(&self, date: NaiveDate) -> &'static str {
        self.weekday_name(date.weekday())
    }
}
