use super::InMemoryEventStore;
use crate::models::event::Event;
use chrono::{NaiveDate, NaiveDateTime};

impl InMemoryEventStore {
    /// List every event in insertion order.
    pub(crate) fn list_all(&self) -> Vec<Event> {
        self.events.clone()
    }

    /// Events whose start is exactly `timestamp`.
    pub(crate) fn find_by_start(&self, timestamp: NaiveDateTime) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.start == timestamp)
            .cloned()
            .collect()
    }

    /// Events starting on the given calendar day.
    pub(crate) fn find_by_day(&self, day: NaiveDate) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.start.date() == day)
            .cloned()
            .collect()
    }

    /// Events starting in the half-open range `[start, end)`.
    pub(crate) fn find_by_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.start >= start && event.start < end)
            .cloned()
            .collect()
    }
}
