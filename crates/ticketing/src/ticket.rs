//! Payment-side ticket lifecycle object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use spotbook_core::{Entity, domain_id};
use spotbook_customers::CustomerId;

use crate::domain_event::{DomainEvent, TicketCreated};
use crate::event::EventId;
use crate::event_ticket::EventTicketId;

domain_id!(TicketId, "TicketId");

/// Ticket payment status. Only `Pending` is produced by the reservation
/// path; the payment state machine lives with an external collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Pending,
    Paid,
    Canceled,
}

/// The payment/fulfillment side of a reservation.
#[derive(Debug, Clone)]
pub struct Ticket {
    ticket_id: TicketId,
    customer_id: CustomerId,
    event_id: EventId,
    status: TicketStatus,
    paid_at: Option<DateTime<Utc>>,
    reserved_at: DateTime<Utc>,
    domain_events: Vec<DomainEvent>,
}

impl Ticket {
    /// Create a pending ticket reserved now.
    pub fn new_ticket(customer_id: CustomerId, event_id: EventId) -> Self {
        Self {
            ticket_id: TicketId::new(),
            customer_id,
            event_id,
            status: TicketStatus::Pending,
            paid_at: None,
            reserved_at: Utc::now(),
            domain_events: Vec::new(),
        }
    }

    /// Create a pending ticket for an existing reservation, recording a
    /// `TicketCreated` fact that links back to the reservation.
    pub fn new_ticket_for_reservation(
        event_ticket_id: EventTicketId,
        customer_id: CustomerId,
        event_id: EventId,
    ) -> Self {
        let mut ticket = Self::new_ticket(customer_id, event_id);
        ticket
            .domain_events
            .push(DomainEvent::TicketCreated(TicketCreated::new(
                ticket.ticket_id,
                event_ticket_id,
                event_id,
                customer_id,
            )));
        ticket
    }

    /// Rehydrate a ticket from storage.
    pub fn with(
        id: TicketId,
        customer_id: CustomerId,
        event_id: EventId,
        status: TicketStatus,
        paid_at: Option<DateTime<Utc>>,
        reserved_at: DateTime<Utc>,
    ) -> Self {
        Self {
            ticket_id: id,
            customer_id,
            event_id,
            status,
            paid_at,
            reserved_at,
            domain_events: Vec::new(),
        }
    }

    pub fn ticket_id(&self) -> &TicketId {
        &self.ticket_id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn status(&self) -> TicketStatus {
        self.status
    }

    pub fn paid_at(&self) -> Option<DateTime<Utc>> {
        self.paid_at
    }

    pub fn reserved_at(&self) -> DateTime<Utc> {
        self.reserved_at
    }

    /// Pending facts, drained by the persistence collaborator.
    pub fn domain_events(&self) -> &[DomainEvent] {
        &self.domain_events
    }

    /// Hand the pending facts to the persistence collaborator, leaving the
    /// aggregate in its canonical stored form (no pending facts).
    pub fn take_domain_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.domain_events)
    }
}

impl Entity for Ticket {
    type Id = TicketId;

    fn id(&self) -> &Self::Id {
        &self.ticket_id
    }
}

impl PartialEq for Ticket {
    fn eq(&self, other: &Self) -> bool {
        self.ticket_id == other.ticket_id
    }
}

impl Eq for Ticket {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ticket_starts_pending_and_unpaid() {
        let ticket = Ticket::new_ticket(CustomerId::new(), EventId::new());
        assert_eq!(ticket.status(), TicketStatus::Pending);
        assert!(ticket.paid_at().is_none());
        assert!(ticket.domain_events().is_empty());
    }

    #[test]
    fn ticket_for_a_reservation_records_its_creation_fact() {
        let event_ticket_id = EventTicketId::new();
        let customer_id = CustomerId::new();
        let event_id = EventId::new();

        let ticket = Ticket::new_ticket_for_reservation(event_ticket_id, customer_id, event_id);

        let facts = ticket.domain_events();
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].event_type(), "ticket.created");
        match &facts[0] {
            DomainEvent::TicketCreated(fact) => {
                assert_eq!(&fact.ticket_id, ticket.ticket_id());
                assert_eq!(fact.event_ticket_id, event_ticket_id);
                assert_eq!(fact.event_id, event_id);
                assert_eq!(fact.customer_id, customer_id);
            }
            other => panic!("expected TicketCreated, got {other:?}"),
        }
    }

    #[test]
    fn rehydration_carries_no_pending_facts() {
        let ticket = Ticket::with(
            TicketId::new(),
            CustomerId::new(),
            EventId::new(),
            TicketStatus::Paid,
            Some(Utc::now()),
            Utc::now(),
        );
        assert_eq!(ticket.status(), TicketStatus::Paid);
        assert!(ticket.paid_at().is_some());
        assert!(ticket.domain_events().is_empty());
    }
}
