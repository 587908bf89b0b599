// Test fixtures - reusable test data
// Provides consistent dates and events across the integration tests

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use surgery_calendar::models::event::Event;
use surgery_calendar::services::event::InMemoryEventStore;
use surgery_calendar::{CellAddress, VisibleWeek};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Tuesday, Oct 14 2025 - "today" for the fixture week
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 14).unwrap()
    }

    /// Day `offset` of the fixture week
    pub fn week_day(offset: i64) -> NaiveDate {
        today() + Duration::days(offset)
    }

    pub fn at(offset: i64, hour: u32, minute: u32) -> NaiveDateTime {
        week_day(offset).and_hms_opt(hour, minute, 0).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Returns Dec 29, 2025, a week that runs into the next year
    pub fn year_end_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 29).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// The seeded sample event: day 0, 08:30 - 09:30
    pub fn sample_event() -> Event {
        Event::new(1, "Sample Event", dates::at(0, 8, 30), dates::at(0, 9, 30)).unwrap()
    }

    /// A long case that runs past midnight
    pub fn overnight_case() -> Event {
        Event::new(2, "Transplant", dates::at(1, 22, 0), dates::at(2, 2, 15)).unwrap()
    }

    /// Another event starting at the same time as `sample_event`
    pub fn concurrent_case() -> Event {
        Event::new(3, "Second theatre", dates::at(0, 8, 30), dates::at(0, 10, 0)).unwrap()
    }
}

pub fn week() -> VisibleWeek {
    VisibleWeek::starting(dates::today())
}

pub fn store() -> InMemoryEventStore {
    InMemoryEventStore::with_events([
        events::sample_event(),
        events::overnight_case(),
        events::concurrent_case(),
    ])
    .unwrap()
}

pub fn cell(offset: i64, hour: u32, block: u32) -> CellAddress {
    CellAddress::new(dates::week_day(offset), hour, block).unwrap()
}
