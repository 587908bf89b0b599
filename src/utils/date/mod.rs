// Date utility functions
// Day truncation and week arithmetic shared by the grid and the drag engine

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Strip hour, minute, second and sub-second parts from a timestamp.
pub fn truncate_to_day(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.date().and_time(NaiveTime::MIN)
}

/// Midnight of the given calendar day.
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn is_midnight(timestamp: NaiveDateTime) -> bool {
    timestamp.time() == NaiveTime::MIN
}

/// Signed number of whole calendar days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}
