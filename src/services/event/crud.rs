use super::InMemoryEventStore;
use crate::error::{SchedulerError, SchedulerResult};
use crate::models::event::{Event, EventId};

impl InMemoryEventStore {
    /// Add a new event after validating it.
    pub(crate) fn insert_event(&mut self, event: Event) -> SchedulerResult<()> {
        event.validate()?;

        if self.find(event.id).is_some() {
            return Err(SchedulerError::DuplicateEventId(event.id));
        }

        log::debug!("Inserted event {} ({})", event.id, event.title);
        self.events.push(event);
        Ok(())
    }

    /// Retrieve an event by ID.
    pub(crate) fn find(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Swap in `updated` for the event with `id`, validating before any write.
    pub(crate) fn replace_event(&mut self, id: EventId, updated: Event) -> SchedulerResult<()> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or(SchedulerError::UnknownEventId(id))?;

        if updated.id != id {
            return Err(SchedulerError::InvalidEvent(format!(
                "Event id {} cannot replace event {}",
                updated.id, id
            )));
        }
        updated.validate()?;

        self.events[index] = updated;
        Ok(())
    }
}
