//! Event and ticket repository ports.

use spotbook_core::DomainResult;

use crate::event::{Event, EventId};
use crate::ticket::{Ticket, TicketId};

/// Lookup and persistence contract for [`Event`] aggregates.
///
/// Saves are whole-aggregate; the implementation stages the aggregate's
/// pending facts in the same transaction as the aggregate state. The
/// reservation invariants are only as strong as the discipline this port's
/// implementation provides around load-mutate-save: at most one
/// reservation-producing save may win per aggregate snapshot, which is why
/// `update` is fallible: a save from a stale snapshot must be rejected so
/// the caller can reload and retry.
pub trait EventRepository: Send + Sync {
    fn event_of_id(&self, id: &EventId) -> Option<Event>;

    /// Persist a new aggregate and return the canonical stored form.
    fn create(&self, event: Event) -> Event;

    /// Persist the whole aggregate from the latest snapshot.
    ///
    /// Fails with `Conflict` when the stored aggregate advanced since this
    /// snapshot was loaded.
    fn update(&self, event: Event) -> DomainResult<Event>;

    /// Test/reset hook only.
    fn delete_all(&self);
}

/// Lookup and persistence contract for [`Ticket`] aggregates.
pub trait TicketRepository: Send + Sync {
    fn ticket_of_id(&self, id: &TicketId) -> Option<Ticket>;

    /// Persist a new aggregate and return the canonical stored form.
    fn create(&self, ticket: Ticket) -> Ticket;

    /// Persist the whole aggregate and return the canonical stored form.
    fn update(&self, ticket: Ticket) -> Ticket;

    /// Test/reset hook only.
    fn delete_all(&self);
}
