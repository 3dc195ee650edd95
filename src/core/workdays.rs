//! Net working days between two dates.

use crate::utils::date::{first_of_month, last_of_month};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::{BTreeSet, HashSet};

pub struct WorkCalendar {
    weekend: HashSet<Weekday>,
    holidays: BTreeSet<NaiveDate>,
}

impl Default for WorkCalendar {
    /// Saturday/Sunday weekend, no holidays.
    fn default() -> Self {
        Self::new([Weekday::Sat, Weekday::Sun], [])
    }
}

impl WorkCalendar {
    pub fn new(
        weekend: impl IntoIterator<Item = Weekday>,
        holidays: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        Self {
            weekend: weekend.into_iter().collect(),
            holidays: holidays.into_iter().collect(),
        }
    }

    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday())
    }

    pub fn is_workday(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(&date)
    }

    /// Working days in `[start, end]`, both ends included.
    ///
    /// The span is padded up to a whole number of weeks past `end`, counted
    /// per week, and the padding days are taken back out. Holidays on
    /// weekend days are not subtracted twice.
    pub fn net_workdays(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        if end < start {
            return 0;
        }

        let span = (end - start).num_days() + 1;
        let (full_weeks, extra_days) = (span / 7, span % 7);
        let per_week = 7 - self.weekend.len() as i64;

        let mut workdays = (full_weeks + 1) * per_week;
        for d in 1..(8 - extra_days) {
            if !self.is_weekend(end + Duration::days(d)) {
                workdays -= 1;
            }
        }

        let holidays_in_range = self
            .holidays
            .range(start..=end)
            .filter(|h| !self.is_weekend(**h))
            .count() as i64;

        workdays - holidays_in_range
    }

    /// Working days from the first to the last day of the month.
    pub fn workdays_in_month(&self, year: i32, month: u32) -> i64 {
        match (first_of_month(year, month), last_of_month(year, month)) {
            (Some(start), Some(end)) => self.net_workdays(start, end),
            _ => 0,
        }
    }
}
