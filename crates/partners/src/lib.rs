//! `spotbook-partners` — the Partner aggregate and its repository port.

pub mod partner;
pub mod repository;

pub use partner::{Partner, PartnerId};
pub use repository::PartnerRepository;
