// Drag-to-reschedule engine
//
// One gesture runs Idle -> Dragging -> Idle:
// - begin_drag snapshots the stored event
// - on_hover_cell shifts the live snapshot by whole days (day-crossing)
// - end_drag translates the snapshot onto the drop cell and commits it,
//   or discards it when there is no drop target

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Duration, NaiveDate};

use crate::error::{SchedulerError, SchedulerResult};
use crate::models::event::{Event, EventId};
use crate::models::grid::CellAddress;
use crate::services::event::EventStore;
use crate::utils::date::days_between;

pub type SessionId = u64;

/// Session ids are unique across every engine in the process.
static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// State of one in-flight move gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    id: SessionId,
    /// Snapshot taken at drag start, never modified
    original: Event,
    /// Live snapshot, shifted by the current day offset
    source_event: Event,
    /// Day of the cell the drag began over
    origin_day: NaiveDate,
    hovered_day: NaiveDate,
}

impl DragSession {
    fn from_event(id: SessionId, event: Event) -> Self {
        let origin_day = event.start.date();
        Self {
            id,
            source_event: event.clone(),
            original: event,
            origin_day,
            hovered_day: origin_day,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn event_id(&self) -> EventId {
        self.original.id
    }

    /// The live, day-adjusted snapshot.
    pub fn source_event(&self) -> &Event {
        &self.source_event
    }

    pub fn original(&self) -> &Event {
        &self.original
    }

    pub fn origin_day(&self) -> NaiveDate {
        self.origin_day
    }

    pub fn hovered_day(&self) -> NaiveDate {
        self.hovered_day
    }

    /// Whole days between the origin column and the hovered column.
    pub fn day_shift(&self) -> i64 {
        days_between(self.origin_day, self.hovered_day)
    }

    /// Re-derive the live snapshot for a pointer over `day`.
    ///
    /// The shift is always measured from `origin_day` and applied to the
    /// original snapshot, so repeated or revisited hovers never compound.
    ///
    /// A day the event cannot be moved to (past the end of the calendar)
    /// leaves the previous snapshot in place.
    pub fn hover_day(&mut self, day: NaiveDate) {
        let shift = days_between(self.origin_day, day);
        let shifted = Duration::try_days(shift)
            .ok_or_else(|| SchedulerError::InvalidCellAddress(format!("day {} is out of range", day)))
            .and_then(|delta| self.original.translated(delta));

        match shifted {
            Ok(event) => {
                self.hovered_day = day;
                self.source_event = event;
            }
            Err(err) => log::trace!("Drag session {} kept its snapshot: {}", self.id, err),
        }
    }

    /// The event as it would be committed on a drop over `target`.
    pub fn rescheduled_to(&self, target: CellAddress) -> SchedulerResult<Event> {
        let delta = target.timestamp() - self.source_event.start;
        self.source_event.translated(delta)
    }
}

/// Owns the single-active-session guard; the store is passed per call.
#[derive(Debug, Default)]
pub struct DragEngine {
    active: Option<SessionId>,
}

impl DragEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_session(&self) -> Option<SessionId> {
        self.active
    }

    /// Start dragging the stored event `event_id`.
    pub fn begin_drag<S: EventStore + ?Sized>(
        &mut self,
        store: &S,
        event_id: EventId,
    ) -> SchedulerResult<DragSession> {
        if let Some(active) = self.active {
            log::warn!("Rejected drag of event {}: session {} still active", event_id, active);
            return Err(SchedulerError::SessionAlreadyActive(active));
        }

        let event = store.get(event_id).ok_or_else(|| {
            log::warn!("Rejected drag of unknown event {}", event_id);
            SchedulerError::InvalidDragSource(event_id)
        })?;

        let id = NEXT_SESSION.fetch_add(1, Ordering::Relaxed);
        let session = DragSession::from_event(id, event);
        self.active = Some(session.id);

        log::debug!(
            "Drag session {} started for event {} at {}",
            session.id,
            event_id,
            session.original.start
        );
        Ok(session)
    }

    /// Pointer entered a cell of `hovered_day`.
    pub fn on_hover_cell(&self, session: &mut DragSession, hovered_day: NaiveDate) {
        session.hover_day(hovered_day);
        log::trace!(
            "Drag session {} hovering {} (shift {} days)",
            session.id,
            hovered_day,
            session.day_shift()
        );
    }

    /// Finish the gesture; commits when a drop cell is given.
    ///
    /// The session is consumed and the engine returns to idle whether the
    /// commit succeeds or not. A failed commit leaves the store untouched.
    pub fn end_drag<S: EventStore + ?Sized>(
        &mut self,
        store: &mut S,
        session: DragSession,
        target: Option<CellAddress>,
    ) -> SchedulerResult<Option<Event>> {
        if self.active != Some(session.id) {
            log::warn!("Ignored end of stale drag session {}", session.id);
            return Err(SchedulerError::StaleSession(session.id));
        }
        self.active = None;

        let Some(target) = target else {
            log::debug!("Drag session {} discarded without a drop target", session.id);
            return Ok(None);
        };

        let updated = session.rescheduled_to(target).map_err(|err| {
            log::warn!("Failed to move event {}: {}", session.event_id(), err);
            err
        })?;
        if let Err(err) = store.replace(updated.id, updated.clone()) {
            log::warn!("Failed to move event {}: {}", updated.id, err);
            return Err(err);
        }

        log::info!(
            "Moved event {} from {} to {}",
            updated.id,
            session.original.start,
            updated.start
        );
        Ok(Some(updated))
    }

    /// Pointer-cancel: discard the session without touching the store.
    pub fn cancel_drag(&mut self, session: DragSession) {
        if self.active == Some(session.id) {
            self.active = None;
            log::debug!("Drag session {} cancelled", session.id);
        }
    }
}
