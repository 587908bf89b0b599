//! Event store.
//! The [`EventStore`] trait is the capability the drag engine writes
//! through; [`InMemoryEventStore`] keeps events in insertion order.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::SchedulerResult;
use crate::models::event::{Event, EventId};
use crate::models::grid::VisibleWeek;

pub mod crud;
pub mod queries;
pub mod seed;

/// Storage for the scheduled events shown on the grid.
#[cfg_attr(test, mockall::automock)]
pub trait EventStore {
    /// Look up an event by id.
    fn get(&self, id: EventId) -> Option<Event>;

    /// All events whose start equals `timestamp` exactly, in insertion order.
    fn events_at(&self, timestamp: NaiveDateTime) -> Vec<Event>;

    /// Snapshot of every event, in insertion order.
    fn all(&self) -> Vec<Event>;

    /// Replace the event with matching `id`. The store is left untouched on error.
    fn replace(&mut self, id: EventId, updated: Event) -> SchedulerResult<()>;

    /// Add a new event.
    fn insert(&mut self, event: Event) -> SchedulerResult<()>;
}

/// Event store backed by a `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryEventStore {
    events: Vec<Event>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed events, rejecting invalid or duplicate entries.
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> SchedulerResult<Self> {
        let mut store = Self::new();
        for event in events {
            store.insert_event(event)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events starting on `day`, in insertion order.
    pub fn events_on_day(&self, day: NaiveDate) -> Vec<Event> {
        self.find_by_day(day)
    }

    /// Events starting inside the visible week, in insertion order.
    pub fn events_in_week(&self, week: &VisibleWeek) -> Vec<Event> {
        let (start, end) = week.span();
        self.find_by_range(start, end)
    }
}

impl EventStore for InMemoryEventStore {
    fn get(&self, id: EventId) -> Option<Event> {
        self.find(id).cloned()
    }

    fn events_at(&self, timestamp: NaiveDateTime) -> Vec<Event> {
        self.find_by_start(timestamp)
    }

    fn all(&self) -> Vec<Event> {
        self.list_all()
    }

    fn replace(&mut self, id: EventId, updated: Event) -> SchedulerResult<()> {
        self.replace_event(id, updated)
    }

    fn insert(&mut self, event: Event) -> SchedulerResult<()> {
        self.insert_event(event)
    }
}
