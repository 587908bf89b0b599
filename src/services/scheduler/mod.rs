//! Scheduler facade.
//!
//! The entry point a rendering/drag-and-drop host talks to. It owns the
//! event store, the drag engine, the visible week and at most one in-flight
//! [`DragSession`], and hands the host an opaque [`SessionHandle`] instead of
//! the session itself.

use chrono::NaiveDate;

use crate::error::{SchedulerError, SchedulerResult};
use crate::models::event::{Event, EventId};
use crate::models::grid::{CellAddress, VisibleWeek};
use crate::models::settings::Settings;
use crate::services::drag::{DragEngine, DragSession, SessionId};
use crate::services::event::{seed, EventStore, InMemoryEventStore};

/// Opaque reference to the active drag session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionHandle(SessionId);

pub struct Scheduler<S: EventStore = InMemoryEventStore> {
    store: S,
    engine: DragEngine,
    session: Option<DragSession>,
    week: VisibleWeek,
    restrict_to_visible_week: bool,
}

impl Scheduler<InMemoryEventStore> {
    /// Build a scheduler for `today` from settings, seeding the sample event when configured.
    pub fn from_settings(today: NaiveDate, settings: &Settings) -> SchedulerResult<Self> {
        let store = if settings.seed_sample_events {
            InMemoryEventStore::with_events(seed::sample_events(today)?)?
        } else {
            InMemoryEventStore::new()
        };
        let week = VisibleWeek::anchored(today, settings.week_anchor, settings.first_day_of_week);

        Ok(Self::new(store, week).restrict_to_visible_week(settings.restrict_to_visible_week))
    }
}

impl<S: EventStore> Scheduler<S> {
    pub fn new(store: S, week: VisibleWeek) -> Self {
        Self {
            store,
            engine: DragEngine::new(),
            session: None,
            week,
            restrict_to_visible_week: true,
        }
    }

    /// Whether cell addresses outside the visible week are rejected.
    pub fn restrict_to_visible_week(mut self, restrict: bool) -> Self {
        self.restrict_to_visible_week = restrict;
        self
    }

    pub fn visible_week(&self) -> &VisibleWeek {
        &self.week
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Snapshot of every event, for header and timeline passes.
    pub fn events(&self) -> Vec<Event> {
        self.store.all()
    }

    /// Events starting exactly at `cell`, for painting that cell.
    pub fn events_at(&self, cell: CellAddress) -> SchedulerResult<Vec<Event>> {
        self.check_cell(cell)?;
        Ok(self.store.events_at(cell.timestamp()))
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn begin_drag(&mut self, event_id: EventId) -> SchedulerResult<SessionHandle> {
        let session = self.engine.begin_drag(&self.store, event_id)?;
        let handle = SessionHandle(session.id());
        self.session = Some(session);
        Ok(handle)
    }

    /// Pointer moved over `cell`. Unknown handles are ignored.
    pub fn on_hover_cell(&mut self, handle: SessionHandle, cell: CellAddress) {
        match self.session.as_mut() {
            Some(session) if session.id() == handle.0 => {
                self.engine.on_hover_cell(session, cell.day());
            }
            _ => log::trace!("Hover for inactive drag session {} ignored", handle.0),
        }
    }

    /// Live snapshot of the dragged event, for preview rendering.
    pub fn drag_preview(&self, handle: SessionHandle) -> Option<&Event> {
        self.session
            .as_ref()
            .filter(|session| session.id() == handle.0)
            .map(DragSession::source_event)
    }

    /// Finish the gesture, committing when a drop cell is given.
    ///
    /// A rejected drop cell discards the session, same as dropping nowhere.
    pub fn end_drag(
        &mut self,
        handle: SessionHandle,
        target: Option<CellAddress>,
    ) -> SchedulerResult<Option<Event>> {
        let session = self.take_session(handle)?;

        if let Some(cell) = target {
            if let Err(err) = self.check_cell(cell) {
                log::warn!("Drop rejected for drag session {}: {}", handle.0, err);
                self.engine.cancel_drag(session);
                return Err(err);
            }
        }

        self.engine.end_drag(&mut self.store, session, target)
    }

    /// Pointer-cancel: discard the session without touching the store.
    pub fn cancel_drag(&mut self, handle: SessionHandle) {
        if let Ok(session) = self.take_session(handle) {
            self.engine.cancel_drag(session);
        }
    }

    fn take_session(&mut self, handle: SessionHandle) -> SchedulerResult<DragSession> {
        match self.session.take() {
            Some(session) if session.id() == handle.0 => Ok(session),
            other => {
                self.session = other;
                Err(SchedulerError::StaleSession(handle.0))
            }
        }
    }

    fn check_cell(&self, cell: CellAddress) -> SchedulerResult<()> {
        if self.restrict_to_visible_week && !self.week.contains(cell.day()) {
            return Err(SchedulerError::InvalidCellAddress(format!(
                "day {} is outside the visible week {}..={}",
                cell.day(),
                self.week.first(),
                self.week.last()
            )));
        }
        Ok(())
    }
}
