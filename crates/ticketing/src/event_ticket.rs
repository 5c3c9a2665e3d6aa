//! Reservation record: one customer, one spot, one event.

use spotbook_core::{Entity, domain_id};
use spotbook_customers::CustomerId;

use crate::event::EventId;
use crate::ticket::TicketId;

domain_id!(EventTicketId, "EventTicketId");

/// One reservation within an [`Event`](crate::Event).
///
/// Owned by its event aggregate: fresh instances are only minted through
/// `Event::reserve_ticket`. Immutable once created except for the later
/// association of the paid-side [`TicketId`].
#[derive(Debug, Clone)]
pub struct EventTicket {
    event_ticket_id: EventTicketId,
    event_id: EventId,
    customer_id: CustomerId,
    ticket_id: Option<TicketId>,
    ordering: u32,
}

impl EventTicket {
    /// Mint a fresh reservation. Crate-private: reachable only through the
    /// event aggregate's reservation operation.
    pub(crate) fn new_ticket(event_id: EventId, customer_id: CustomerId, ordering: u32) -> Self {
        Self {
            event_ticket_id: EventTicketId::new(),
            event_id,
            customer_id,
            ticket_id: None,
            ordering,
        }
    }

    /// Rehydrate a reservation from storage, all fields known.
    pub fn with(
        event_ticket_id: EventTicketId,
        event_id: EventId,
        customer_id: CustomerId,
        ticket_id: Option<TicketId>,
        ordering: u32,
    ) -> Self {
        Self {
            event_ticket_id,
            event_id,
            customer_id,
            ticket_id,
            ordering,
        }
    }

    /// Associate the payment-side ticket. The only post-construction change.
    pub fn associate_ticket(&mut self, ticket_id: TicketId) {
        self.ticket_id = Some(ticket_id);
    }

    pub fn event_ticket_id(&self) -> &EventTicketId {
        &self.event_ticket_id
    }

    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn ticket_id(&self) -> Option<&TicketId> {
        self.ticket_id.as_ref()
    }

    /// 1-based position in the event's reservation sequence.
    pub fn ordering(&self) -> u32 {
        self.ordering
    }
}

impl Entity for EventTicket {
    type Id = EventTicketId;

    fn id(&self) -> &Self::Id {
        &self.event_ticket_id
    }
}

impl PartialEq for EventTicket {
    fn eq(&self, other: &Self) -> bool {
        self.event_ticket_id == other.event_ticket_id
    }
}

impl Eq for EventTicket {}
