//! Customer aggregate.

use spotbook_core::{DomainResult, Entity, domain_id};
use spotbook_person::{Cpf, Email, Name};

domain_id!(CustomerId, "CustomerId");

/// Aggregate root: a customer who can reserve event tickets.
///
/// Validated on construction, immutable thereafter; changing a field means
/// reconstructing the whole aggregate. No concurrency concerns.
#[derive(Debug, Clone)]
pub struct Customer {
    customer_id: CustomerId,
    name: Name,
    cpf: Cpf,
    email: Email,
}

impl Customer {
    /// Create a customer with a fresh identity.
    ///
    /// Fields validate in declaration order; the first invalid one wins.
    pub fn new_customer(name: &str, cpf: &str, email: &str) -> DomainResult<Self> {
        Self::with(CustomerId::new(), name, cpf, email)
    }

    /// Rehydrate a customer from a known identity (storage load path).
    pub fn with(id: CustomerId, name: &str, cpf: &str, email: &str) -> DomainResult<Self> {
        Ok(Self {
            customer_id: id,
            name: Name::new(name)?,
            cpf: Cpf::new(cpf)?,
            email: Email::new(email)?,
        })
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.customer_id
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.customer_id == other.customer_id
    }
}

impl Eq for Customer {}
