// Event module
// Scheduled event ("surgery") placed on the 15-minute grid

use chrono::{Duration, NaiveDateTime};

use crate::error::{SchedulerError, SchedulerResult};
use crate::models::grid::is_grid_aligned;

/// Stable identifier of an event.
pub type EventId = i64;

/// A titled time range on the calendar grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Stable identifier, unique within a store
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start, on the 15-minute grid
    /// * `end` - Event end, on the 15-minute grid and after `start`
    ///
    /// # Examples
    /// ```
    /// use surgery_calendar::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 10, 14).unwrap();
    /// let start = day.and_hms_opt(8, 30, 0).unwrap();
    /// let end = day.and_hms_opt(9, 30, 0).unwrap();
    /// let event = Event::new(1, "Knee arthroscopy", start, end).unwrap();
    /// assert_eq!(event.duration(), chrono::Duration::hours(1));
    /// ```
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> SchedulerResult<Self> {
        let event = Self {
            id,
            title: title.into(),
            start,
            end,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events step by step
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> SchedulerResult<()> {
        if self.title.trim().is_empty() {
            return Err(SchedulerError::InvalidEvent(
                "Event title cannot be empty".to_string(),
            ));
        }

        if self.end <= self.start {
            return Err(SchedulerError::InvalidEvent(
                "Event end time must be after start time".to_string(),
            ));
        }

        if !is_grid_aligned(self.start) || !is_grid_aligned(self.end) {
            return Err(SchedulerError::InvalidEvent(format!(
                "Event {} is not aligned to the 15-minute grid",
                self.id
            )));
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// The same event moved by `delta`, duration unchanged.
    ///
    /// Fails with `InvalidCellAddress` when either end would leave the
    /// representable date range.
    pub fn translated(&self, delta: Duration) -> SchedulerResult<Self> {
        let shift = |timestamp: NaiveDateTime| {
            timestamp.checked_add_signed(delta).ok_or_else(|| {
                SchedulerError::InvalidCellAddress(format!(
                    "moving event {} by {} overflows the calendar",
                    self.id, delta
                ))
            })
        };

        Ok(Self {
            start: shift(self.start)?,
            end: shift(self.end)?,
            ..self.clone()
        })
    }

    /// The same event moved so that it starts at `start`.
    pub fn moved_to(&self, start: NaiveDateTime) -> SchedulerResult<Self> {
        self.translated(start - self.start)
    }
}

/// Builder for creating events
pub struct EventBuilder {
    id: Option<EventId>,
    title: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    duration: Option<Duration>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            start: None,
            end: None,
            duration: None,
        }
    }

    /// Set the event id
    pub fn id(mut self, id: EventId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the start time
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the end time relative to the start (ignored when `end` is set)
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Build the event
    pub fn build(self) -> SchedulerResult<Event> {
        let missing = |field: &str| SchedulerError::InvalidEvent(format!("Event {} is required", field));

        let id = self.id.ok_or_else(|| missing("id"))?;
        let title = self.title.ok_or_else(|| missing("title"))?;
        let start = self.start.ok_or_else(|| missing("start time"))?;
        let end = match (self.end, self.duration) {
            (Some(end), _) => end,
            (None, Some(duration)) => start
                .checked_add_signed(duration)
                .ok_or_else(|| SchedulerError::InvalidEvent("Event end time is out of range".to_string()))?,
            (None, None) => return Err(missing("end time")),
        };

        Event::new(id, title, start, end)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 14)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()
    }

    fn sample_end() -> NaiveDateTime {
        sample_start() + Duration::hours(1)
    }

    fn invalid_reason(result: SchedulerResult<Event>) -> String {
        match result {
            Err(SchedulerError::InvalidEvent(reason)) => reason,
            other => panic!("expected InvalidEvent, got {:?}", other),
        }
    }

    #[test]
    fn test_new_event_success() {
        let event = Event::new(7, "Hip replacement", sample_start(), sample_end()).unwrap();

        assert_eq!(event.id, 7);
        assert_eq!(event.title, "Hip replacement");
        assert_eq!(event.start, sample_start());
        assert_eq!(event.end, sample_end());
    }

    #[test]
    fn test_new_event_empty_title() {
        let result = Event::new(1, "   ", sample_start(), sample_end());
        assert_eq!(invalid_reason(result), "Event title cannot be empty");
    }

    #[test]
    fn test_new_event_invalid_times() {
        let result = Event::new(1, "Meeting", sample_start(), sample_start() - Duration::hours(1));
        assert_eq!(invalid_reason(result), "Event end time must be after start time");
    }

    #[test]
    fn test_new_event_equal_times() {
        let result = Event::new(1, "Meeting", sample_start(), sample_start());
        assert!(result.is_err());
    }

    #[test]
    fn test_new_event_off_grid() {
        let start = sample_start() + Duration::minutes(5);
        let result = Event::new(1, "Meeting", start, start + Duration::hours(1));
        assert!(invalid_reason(result).contains("15-minute grid"));
    }

    #[test]
    fn test_builder_with_duration() {
        let event = Event::builder()
            .id(3)
            .title("Appendectomy")
            .start(sample_start())
            .duration(Duration::minutes(45))
            .build()
            .unwrap();

        assert_eq!(event.end, sample_start() + Duration::minutes(45));
    }

    #[test]
    fn test_builder_end_wins_over_duration() {
        let event = Event::builder()
            .id(3)
            .title("Appendectomy")
            .start(sample_start())
            .end(sample_end())
            .duration(Duration::minutes(45))
            .build()
            .unwrap();

        assert_eq!(event.end, sample_end());
    }

    #[test]
    fn test_builder_missing_fields() {
        let result = Event::builder().title("Meeting").start(sample_start()).end(sample_end()).build();
        assert_eq!(invalid_reason(result), "Event id is required");

        let result = Event::builder().id(1).start(sample_start()).end(sample_end()).build();
        assert_eq!(invalid_reason(result), "Event title is required");

        let result = Event::builder().id(1).title("Meeting").end(sample_end()).build();
        assert_eq!(invalid_reason(result), "Event start time is required");

        let result = Event::builder().id(1).title("Meeting").start(sample_start()).build();
        assert_eq!(invalid_reason(result), "Event end time is required");
    }

    #[test]
    fn test_translated_preserves_duration_and_identity() {
        let event = Event::new(9, "Biopsy", sample_start(), sample_end()).unwrap();
        let moved = event.translated(Duration::days(2) + Duration::minutes(330)).unwrap();

        assert_eq!(moved.id, event.id);
        assert_eq!(moved.title, event.title);
        assert_eq!(moved.duration(), event.duration());
        assert_eq!(moved.start, sample_start() + Duration::days(2) + Duration::minutes(330));
    }

    #[test]
    fn test_translated_past_last_date_fails() {
        let last_day = NaiveDate::MAX.and_hms_opt(23, 0, 0).unwrap();
        let event = Event::new(9, "Biopsy", last_day, last_day + Duration::minutes(45)).unwrap();

        let result = event.translated(Duration::minutes(15));

        assert!(matches!(result, Err(SchedulerError::InvalidCellAddress(_))));
    }

    #[test]
    fn test_moved_to() {
        let event = Event::new(9, "Biopsy", sample_start(), sample_end()).unwrap();
        let target = sample_start() - Duration::hours(6);
        let moved = event.moved_to(target).unwrap();

        assert_eq!(moved.start, target);
        assert_eq!(moved.end, target + Duration::hours(1));
    }
}
