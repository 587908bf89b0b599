//! Sample events for a fresh calendar.

use chrono::{Duration, NaiveDate};

use crate::error::SchedulerResult;
use crate::models::event::Event;
use crate::utils::date::midnight;

/// The single sample event shown on first launch: today, 08:30 to 09:30.
pub fn sample_events(today: NaiveDate) -> SchedulerResult<Vec<Event>> {
    let start = midnight(today) + Duration::hours(8) + Duration::minutes(30);
    let end = start + Duration::hours(1);

    Ok(vec![Event::new(1, "Sample Event", start, end)?])
}
