use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{4}$").expect("valid date regex"));

/// Parse `DD.MM.YYYY`. The calendar date must exist.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if !DATE_RE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn last_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (y, m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_of_month(y, m)?.pred_opt()
}

/// (year, month) of the month before `date`'s month.
pub fn previous_month(date: NaiveDate) -> (i32, u32) {
    if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    }
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = first_of_month(year, month);

    while let Some(day) = d {
        if day.month() != month {
            break;
        }
        out.push(day);
        d = day.succ_opt();
    }

    out
}
