use crate::utils::time::{format_time, parse_time};
use chrono::NaiveTime;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2}:\d{2})\s*-\s*(\d{1,2}:\d{2})\s*$").expect("valid span regex")
});

/// A start/end pair of naive times (`HH:MM-HH:MM`).
///
/// No ordering between `start` and `end` is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSpan {
    /// `00:00-00:00`, used by special records.
    pub const MIDNIGHT: TimeSpan = TimeSpan {
        start: NaiveTime::MIN,
        end: NaiveTime::MIN,
    };

    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let caps = SPAN_RE.captures(s)?;
        let start = parse_time(&caps[1])?;
        let end = parse_time(&caps[2])?;
        Some(Self { start, end })
    }

    /// Length of the span in minutes. Negative if `end` precedes `start`.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_time(self.start), format_time(self.end))
    }
}
