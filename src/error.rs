//! Error types for the scheduling core.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::event::EventId;

/// Errors raised by the time grid, the event store and the drag engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("Invalid cell address: {0}")]
    InvalidCellAddress(String),

    #[error("Event with id {0} not found")]
    UnknownEventId(EventId),

    #[error("Cannot start a drag on event {0}: not in the store")]
    InvalidDragSource(EventId),

    #[error("A drag session is already active (session {0})")]
    SessionAlreadyActive(u64),

    #[error("Drag session {0} is not the active session")]
    StaleSession(u64),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Event with id {0} already exists")]
    DuplicateEventId(EventId),
}

impl SchedulerError {
    pub(crate) fn unaligned(timestamp: NaiveDateTime) -> Self {
        SchedulerError::InvalidCellAddress(format!(
            "{} is not on the 15-minute grid",
            timestamp.format("%Y-%m-%d %H:%M:%S%.f")
        ))
    }
}

/// Result type alias for scheduling operations.
pub type SchedulerResult<T> = Result<T, SchedulerError>;
