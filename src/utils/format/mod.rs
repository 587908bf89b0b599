//! Display helpers for hosts rendering the grid.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::event::Event;

/// Format a time of day using the "24h" or "12h" preference.
pub fn format_time(timestamp: NaiveDateTime, use_12h: bool) -> String {
    if use_12h {
        timestamp.format("%-I:%M %p").to_string()
    } else {
        timestamp.format("%H:%M").to_string()
    }
}

/// "08:30 - 09:30" style label for an event card.
pub fn format_time_range(event: &Event, use_12h: bool) -> String {
    format!(
        "{} - {}",
        format_time(event.start, use_12h),
        format_time(event.end, use_12h)
    )
}

/// Column header for a day, e.g. "14.10.".
pub fn format_day_header(day: NaiveDate) -> String {
    day.format("%-d.%-m.").to_string()
}

/// Hour label for the timeline gutter.
pub fn format_hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> Event {
        let day = NaiveDate::from_ymd_opt(2025, 10, 14).unwrap();
        Event::new(
            1,
            "Sample Event",
            day.and_hms_opt(8, 30, 0).unwrap(),
            day.and_hms_opt(13, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_format_time_range_24h() {
        assert_eq!(format_time_range(&event(), false), "08:30 - 13:00");
    }

    #[test]
    fn test_format_time_range_12h() {
        assert_eq!(format_time_range(&event(), true), "8:30 AM - 1:00 PM");
    }

    #[test]
    fn test_format_day_header() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_day_header(day), "7.3.");
    }

    #[test]
    fn test_format_hour_label() {
        assert_eq!(format_hour_label(0), "00:00");
        assert_eq!(format_hour_label(23), "23:00");
    }
}
