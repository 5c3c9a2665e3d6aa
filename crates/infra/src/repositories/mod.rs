//! In-memory implementations of the domain repository ports.
//!
//! Tests/dev only. Each store is an explicit object passed by `Arc` into the
//! use-case layer, with its lifecycle scoped to the serving process or test
//! fixture, never a process-wide singleton.

pub mod customers;
pub mod events;
pub mod partners;
pub mod tickets;

pub use customers::InMemoryCustomerRepository;
pub use events::InMemoryEventRepository;
pub use partners::InMemoryPartnerRepository;
pub use tickets::InMemoryTicketRepository;
