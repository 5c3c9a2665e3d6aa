//! In-memory ticket repository.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use spotbook_ticketing::{Ticket, TicketId, TicketRepository};

use crate::outbox::{OutboxRecord, OutboxStore};

/// In-memory [`TicketRepository`]. Saves stage the ticket's pending facts
/// (its creation fact, when present) together with the aggregate.
pub struct InMemoryTicketRepository {
    tickets: RwLock<HashMap<TicketId, Ticket>>,
    outbox: Arc<dyn OutboxStore>,
}

impl InMemoryTicketRepository {
    pub fn new(outbox: Arc<dyn OutboxStore>) -> Self {
        Self {
            tickets: RwLock::new(HashMap::new()),
            outbox,
        }
    }

    fn stage_and_store(&self, mut ticket: Ticket) -> Ticket {
        let mut tickets = self.tickets.write().expect("ticket store lock poisoned");
        for fact in ticket.take_domain_events() {
            self.outbox.append(OutboxRecord::of(&fact));
        }
        tickets.insert(*ticket.ticket_id(), ticket.clone());
        ticket
    }
}

impl TicketRepository for InMemoryTicketRepository {
    fn ticket_of_id(&self, id: &TicketId) -> Option<Ticket> {
        self.tickets
            .read()
            .expect("ticket store lock poisoned")
            .get(id)
            .cloned()
    }

    fn create(&self, ticket: Ticket) -> Ticket {
        self.stage_and_store(ticket)
    }

    fn update(&self, ticket: Ticket) -> Ticket {
        self.stage_and_store(ticket)
    }

    fn delete_all(&self) {
        self.tickets
            .write()
            .expect("ticket store lock poisoned")
            .clear();
    }
}
