//! `spotbook-infra` — persistence collaborators for the domain ports.
//!
//! In-memory repository implementations (tests/dev; lifecycle scoped to the
//! serving process or test fixture, never process-wide), the outbox staging
//! area, and the relay job that ships staged facts to a queue gateway.

pub mod outbox;
pub mod repositories;


pub use outbox::{
    InMemoryOutboxStore, InMemoryQueueGateway, OutboxRecord, OutboxRelay, OutboxStore, QueueError,
    QueueGateway, WorkerHandle,
};
pub use repositories::{
    InMemoryCustomerRepository, InMemoryEventRepository, InMemoryPartnerRepository,
    InMemoryTicketRepository,
};
