//! Time utilities: parsing HH:MM, formatting hours, etc.

use chrono::NaiveTime;

pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), TIME_FORMAT).ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// Minutes as decimal hours (`450` → `7.5`).
pub fn minutes_to_hours(mins: i64) -> f64 {
    mins as f64 / 60.0
}

/// Signed decimal hours with two digits (`+7.50`, `-1.25`).
pub fn format_hours(hours: f64, want_sign: bool) -> String {
    if want_sign && hours > 0.0 {
        format!("+{:.2}", hours)
    } else {
        format!("{:.2}", hours)
    }
}
