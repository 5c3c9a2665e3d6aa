//! Domain-event facts emitted by the ticketing aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use spotbook_customers::CustomerId;

use crate::event::EventId;
use crate::event_ticket::EventTicketId;
use crate::ticket::TicketId;

/// An immutable record of something that happened.
///
/// Closed set: the outbox-serialization boundary matches exhaustively, so a
/// new fact kind cannot ship without a serialization rule. Facts are emitted
/// once, appended to the owning aggregate's pending list and drained by the
/// persistence collaborator; the aggregate never deduplicates them, the
/// outbox keys records by fact id.
///
/// The serialized form carries the type tag in a `type` field, matching the
/// tag strings returned by [`DomainEvent::event_type`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    #[serde(rename = "event-ticket.reserved")]
    EventTicketReserved(EventTicketReserved),
    #[serde(rename = "ticket.created")]
    TicketCreated(TicketCreated),
}

impl DomainEvent {
    /// Unique identity of the fact itself.
    pub fn domain_event_id(&self) -> Uuid {
        match self {
            DomainEvent::EventTicketReserved(e) => e.domain_event_id,
            DomainEvent::TicketCreated(e) => e.domain_event_id,
        }
    }

    /// Stable type tag for downstream consumers.
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::EventTicketReserved(_) => "event-ticket.reserved",
            DomainEvent::TicketCreated(_) => "ticket.created",
        }
    }

    /// When the fact occurred (business time).
    pub fn occurred_on(&self) -> DateTime<Utc> {
        match self {
            DomainEvent::EventTicketReserved(e) => e.occurred_on,
            DomainEvent::TicketCreated(e) => e.occurred_on,
        }
    }
}

/// A customer reserved a spot at an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTicketReserved {
    pub domain_event_id: Uuid,
    pub event_ticket_id: EventTicketId,
    pub event_id: EventId,
    pub customer_id: CustomerId,
    pub occurred_on: DateTime<Utc>,
}

impl EventTicketReserved {
    pub fn new(event_ticket_id: EventTicketId, event_id: EventId, customer_id: CustomerId) -> Self {
        Self {
            domain_event_id: Uuid::now_v7(),
            event_ticket_id,
            event_id,
            customer_id,
            occurred_on: Utc::now(),
        }
    }
}

/// A payment-side ticket was created for a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCreated {
    pub domain_event_id: Uuid,
    pub ticket_id: TicketId,
    pub event_ticket_id: EventTicketId,
    pub event_id: EventId,
    pub customer_id: CustomerId,
    pub occurred_on: DateTime<Utc>,
}

impl TicketCreated {
    pub fn new(
        ticket_id: TicketId,
        event_ticket_id: EventTicketId,
        event_id: EventId,
        customer_id: CustomerId,
    ) -> Self {
        Self {
            domain_event_id: Uuid::now_v7(),
            ticket_id,
            event_ticket_id,
            event_id,
            customer_id,
            occurred_on: Utc::now(),
        }
    }
}
