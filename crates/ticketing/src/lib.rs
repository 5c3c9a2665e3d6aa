//! `spotbook-ticketing` — the Event aggregate and everything it owns.
//!
//! The heart of the system: [`Event`] enforces the reservation invariants
//! (no oversell, no double-booking) and records a [`DomainEvent`] fact for
//! every successful reservation. [`EventTicket`] is the reservation record,
//! [`Ticket`] the payment-side lifecycle object.

pub mod domain_event;
pub mod event;
pub mod event_ticket;
pub mod repository;
pub mod ticket;

pub use domain_event::{DomainEvent, EventTicketReserved, TicketCreated};
pub use event::{Event, EventId};
pub use event_ticket::{EventTicket, EventTicketId};
pub use repository::{EventRepository, TicketRepository};
pub use ticket::{Ticket, TicketId, TicketStatus};
