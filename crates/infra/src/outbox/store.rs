//! Outbox record and staging store.

use std::sync::RwLock;

use uuid::Uuid;

use spotbook_ticketing::DomainEvent;

/// One staged fact: the fact's own id, its JSON rendering, and whether the
/// relay already shipped it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboxRecord {
    id: Uuid,
    content: String,
    published: bool,
}

impl OutboxRecord {
    /// Stage a fact. The record takes the fact's identity, so staging the
    /// same fact twice replaces rather than duplicates.
    pub fn of(fact: &DomainEvent) -> Self {
        let content = serde_json::to_string(fact)
            // Facts are plain id/timestamp structs; failing to render one is
            // a programming error, mirrored from the reference behavior.
            .expect("domain event serializes to JSON");
        Self {
            id: fact.domain_event_id(),
            content,
            published: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_published(&self) -> bool {
        self.published
    }
}

/// Staging-area contract consumed by repositories (append side) and the
/// relay (drain side).
pub trait OutboxStore: Send + Sync {
    /// Insert a record, replacing any record with the same id.
    fn append(&self, record: OutboxRecord);

    /// Up to `limit` unpublished records, oldest first.
    fn unpublished(&self, limit: usize) -> Vec<OutboxRecord>;

    /// Note a record as shipped; unknown ids are ignored.
    fn mark_published(&self, id: Uuid);

    /// Test/reset hook only.
    fn delete_all(&self);
}

/// In-memory staging area.
///
/// Intended for tests/dev. Keeps insertion order.
#[derive(Debug, Default)]
pub struct InMemoryOutboxStore {
    records: RwLock<Vec<OutboxRecord>>,
}

impl InMemoryOutboxStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutboxStore for InMemoryOutboxStore {
    fn append(&self, record: OutboxRecord) {
        let mut records = self.records.write().expect("outbox lock poisoned");
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    fn unpublished(&self, limit: usize) -> Vec<OutboxRecord> {
        self.records
            .read()
            .expect("outbox lock poisoned")
            .iter()
            .filter(|r| !r.published)
            .take(limit)
            .cloned()
            .collect()
    }

    fn mark_published(&self, id: Uuid) {
        let mut records = self.records.write().expect("outbox lock poisoned");
        if let Some(record) = records.iter_mut().find(|r| r.id == id) {
            record.published = true;
        }
    }

    fn delete_all(&self) {
        self.records.write().expect("outbox lock poisoned").clear();
    }
}

#[cfg(test)]
mod tests {
    use spotbook_customers::CustomerId;
    use spotbook_ticketing::{EventId, EventTicketId, EventTicketReserved};

    use super::*;

    fn reserved_fact() -> DomainEvent {
        DomainEvent::EventTicketReserved(EventTicketReserved::new(
            EventTicketId::new(),
            EventId::new(),
            CustomerId::new(),
        ))
    }

    #[test]
    fn staging_the_same_fact_twice_keeps_one_record() {
        let store = InMemoryOutboxStore::new();
        let fact = reserved_fact();

        store.append(OutboxRecord::of(&fact));
        store.append(OutboxRecord::of(&fact));

        assert_eq!(store.unpublished(100).len(), 1);
    }

    #[test]
    fn unpublished_respects_the_limit_and_order() {
        let store = InMemoryOutboxStore::new();
        let facts: Vec<DomainEvent> = (0..5).map(|_| reserved_fact()).collect();
        for fact in &facts {
            store.append(OutboxRecord::of(fact));
        }

        let batch = store.unpublished(3);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].id(), facts[0].domain_event_id());
        assert_eq!(batch[2].id(), facts[2].domain_event_id());
    }

    #[test]
    fn published_records_leave_the_batch() {
        let store = InMemoryOutboxStore::new();
        let fact = reserved_fact();
        store.append(OutboxRecord::of(&fact));

        store.mark_published(fact.domain_event_id());

        assert!(store.unpublished(100).is_empty());
    }

    #[test]
    fn record_content_is_the_fact_json() {
        let fact = reserved_fact();
        let record = OutboxRecord::of(&fact);

        let parsed: serde_json::Value = serde_json::from_str(record.content()).unwrap();
        assert_eq!(parsed["type"], "event-ticket.reserved");
        assert_eq!(parsed["domain_event_id"], fact.domain_event_id().to_string());
        assert!(!record.is_published());
    }
}
