//! `spotbook-customers` — the Customer aggregate and its repository port.

pub mod customer;
pub mod repository;

pub use customer::{Customer, CustomerId};
pub use repository::CustomerRepository;
