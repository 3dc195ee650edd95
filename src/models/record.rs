use super::span::TimeSpan;
use crate::errors::AppError;
use crate::utils::date::{format_date, parse_date};
use crate::utils::time::{format_time, minutes_to_hours, parse_time};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hours credited for a special record (sick leave, holiday, training…).
pub const SPECIAL_DAY_HOURS: f64 = 8.0;

/// One logged day.
///
/// On disk every field is a string (see [`RecordRow`]); in memory the
/// record is fully typed and compared field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordRow", into = "RecordRow")]
pub struct Record {
    pub date: NaiveDate,
    pub work: TimeSpan,
    pub pause: TimeSpan,
    pub comment: String,
    pub special: bool,
}

impl Record {
    pub fn new(
        date: NaiveDate,
        work: TimeSpan,
        pause: TimeSpan,
        comment: impl Into<String>,
        special: bool,
    ) -> Self {
        Self {
            date,
            work,
            pause,
            comment: comment.into(),
            special,
        }
    }

    /// A special record carries no time data.
    pub fn special(date: NaiveDate, comment: impl Into<String>) -> Self {
        Self::new(date, TimeSpan::MIDNIGHT, TimeSpan::MIDNIGHT, comment, true)
    }

    pub fn date_str(&self) -> String {
        format_date(self.date)
    }

    /// Hours credited for this day: work span minus break span, or the fixed
    /// credit for special records.
    pub fn worked_hours(&self) -> f64 {
        if self.special {
            SPECIAL_DAY_HOURS
        } else {
            minutes_to_hours(self.work.minutes() - self.pause.minutes())
        }
    }
}

/// On-disk shape of a record: a flat object of strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRow {
    pub date: String,
    pub start_day: String,
    pub end_day: String,
    pub start_break: String,
    pub end_break: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default = "default_special")]
    pub special: String,
}

fn default_special() -> String {
    "False".to_string()
}

impl From<Record> for RecordRow {
    fn from(r: Record) -> Self {
        Self {
            date: format_date(r.date),
            start_day: format_time(r.work.start),
            end_day: format_time(r.work.end),
            start_break: format_time(r.pause.start),
            end_break: format_time(r.pause.end),
            comment: r.comment,
            special: if r.special { "True" } else { "False" }.to_string(),
        }
    }
}

impl TryFrom<RecordRow> for Record {
    type Error = AppError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        let date = parse_date(&row.date)
            .ok_or_else(|| AppError::InvalidRecord(format!("date '{}'", row.date)))?;

        let time = |field: &str, value: &str| {
            parse_time(value).ok_or_else(|| {
                AppError::InvalidRecord(format!("{} '{}' on {}", field, value, row.date))
            })
        };

        let work = TimeSpan::new(
            time("start_day", &row.start_day)?,
            time("end_day", &row.end_day)?,
        );
        let pause = TimeSpan::new(
            time("start_break", &row.start_break)?,
            time("end_break", &row.end_break)?,
        );

        let special = match row.special.trim().to_ascii_lowercase().as_str() {
            "true" => true,
            "false" | "" => false,
            other => {
                return Err(AppError::InvalidRecord(format!(
                    "special '{}' on {}",
                    other, row.date
                )));
            }
        };

        Ok(Self {
            date,
            work,
            pause,
            comment: row.comment,
            special,
        })
    }
}
