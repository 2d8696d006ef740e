//! Date-delta math: decompose spans into days, hours, minutes and seconds.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::Serialize;

/// A span decomposed into whole days, hour-of-day, minute-of-hour and
/// second-of-minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Decompose a second count into days, hours, minutes and seconds.
pub fn days_time_from_seconds(seconds: u64) -> TimeRemaining {
    TimeRemaining {
        days: seconds / 86_400,
        hours: seconds / 3_600 % 24,
        minutes: seconds / 60 % 60,
        seconds: seconds % 60,
    }
}

/// Time remaining between two instants, `None` unless `finish` is strictly
/// after `start`.
pub fn remaining_between<Tz: TimeZone>(
    start: DateTime<Tz>,
    finish: DateTime<Tz>,
) -> Option<TimeRemaining> {
    if finish > start {
        let seconds = finish.signed_duration_since(start).num_seconds();
        Some(days_time_from_seconds(seconds as u64))
    } else {
        None
    }
}

/// Like [`days_time_from_seconds`], but `None` for negative input.
pub fn remaining_from_seconds(seconds: i64) -> Option<TimeRemaining> {
    u64::try_from(seconds).ok().map(days_time_from_seconds)
}

/// True when the string parses as an RFC 3339 timestamp, a plain
/// `YYYY-MM-DD` date, or a datetime without offset.
pub fn is_date(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}
