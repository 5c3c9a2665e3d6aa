//! `spotbook-person` — person-scoped value objects.
//!
//! Validated immutable scalars shared by customers and partners: [`Name`],
//! [`Cpf`], [`Cnpj`] and [`Email`]. Construction is the only entry point and
//! the single failure mode is [`DomainError::InvalidValue`] carrying the
//! value's type name.
//!
//! [`DomainError::InvalidValue`]: spotbook_core::DomainError::InvalidValue

pub mod cnpj;
pub mod cpf;
pub mod email;
pub mod name;

pub use cnpj::Cnpj;
pub use cpf::Cpf;
pub use email::Email;
pub use name::Name;
