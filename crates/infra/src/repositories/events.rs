//! In-memory event repository with the reservation save discipline.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use spotbook_core::{AggregateRoot, DomainError, DomainResult, ExpectedVersion};
use spotbook_ticketing::{Event, EventId, EventRepository};

use crate::outbox::{OutboxRecord, OutboxStore};

/// In-memory [`EventRepository`].
///
/// Provides the concurrency discipline the reservation invariant depends on:
/// a save is accepted only when it was produced from the latest stored
/// snapshot. The aggregate's version counts one per reservation and each
/// reservation carries one pending fact, so the snapshot a save was built
/// from is `version - pending facts`; if the stored aggregate moved past
/// that, the save loses with `Conflict` and the caller reloads and retries.
///
/// Facts are staged in the outbox and the aggregate stored under one write
/// lock, so aggregate state and staged facts can never diverge.
pub struct InMemoryEventRepository {
    events: RwLock<HashMap<EventId, Event>>,
    outbox: Arc<dyn OutboxStore>,
}

impl InMemoryEventRepository {
    pub fn new(outbox: Arc<dyn OutboxStore>) -> Self {
        Self {
            events: RwLock::new(HashMap::new()),
            outbox,
        }
    }

    fn stage_and_store(
        &self,
        mut event: Event,
        events: &mut HashMap<EventId, Event>,
    ) -> Event {
        for fact in event.take_domain_events() {
            self.outbox.append(OutboxRecord::of(&fact));
        }
        events.insert(*event.event_id(), event.clone());
        event
    }
}

impl EventRepository for InMemoryEventRepository {
    fn event_of_id(&self, id: &EventId) -> Option<Event> {
        self.events
            .read()
            .expect("event store lock poisoned")
            .get(id)
            .cloned()
    }

    fn create(&self, event: Event) -> Event {
        let mut events = self.events.write().expect("event store lock poisoned");
        self.stage_and_store(event, &mut events)
    }

    fn update(&self, event: Event) -> DomainResult<Event> {
        let mut events = self
            .events
            .write()
            .map_err(|_| DomainError::conflict("event store lock poisoned"))?;

        let stored_version = events
            .get(event.event_id())
            .map(|stored| stored.version())
            .unwrap_or(0);
        let base_version = event.version() - event.domain_events().len() as u64;
        ExpectedVersion::Exact(base_version).check(stored_version)?;

        Ok(self.stage_and_store(event, &mut events))
    }

    fn delete_all(&self) {
        self.events
            .write()
            .expect("event store lock poisoned")
            .clear();
    }
}
