//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// invariants, conflicts). Infrastructure concerns belong elsewhere.
///
/// The `Display` output of each variant is the user-facing message and is a
/// compatibility contract; callers match on the variant, never on the text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed its presence/format/checksum rule.
    #[error("Invalid value for {0}")]
    InvalidValue(&'static str),

    /// The event date is missing or not an ISO calendar date.
    #[error("Invalid date for Event")]
    InvalidDate,

    /// Duplicate Cpf/Cnpj/Email on creation.
    #[error("{0} already exists")]
    AlreadyExists(&'static str),

    /// The customer already holds a ticket for the event.
    ///
    /// The message text predates the customer-id-scoped check and is kept
    /// verbatim for compatibility.
    #[error("Email already registered")]
    AlreadyRegistered,

    /// Event capacity is exhausted.
    #[error("Event sold out")]
    SoldOut,

    /// The referenced partner does not resolve.
    #[error("Partner not found")]
    PartnerNotFound,

    /// The referenced customer does not resolve.
    #[error("Customer not found")]
    CustomerNotFound,

    /// The referenced event does not resolve.
    #[error("Event not found")]
    EventNotFound,

    /// An aggregate save lost an optimistic-concurrency race.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_value(field: &'static str) -> Self {
        Self::InvalidValue(field)
    }

    pub fn already_exists(entity: &'static str) -> Self {
        Self::AlreadyExists(entity)
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
