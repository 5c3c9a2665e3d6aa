//! Customer repository port.

use spotbook_person::{Cpf, Email};

use crate::customer::{Customer, CustomerId};

/// Lookup and persistence contract for [`Customer`] aggregates.
///
/// Lookups have return-or-absent semantics; "not found" is not an error at
/// this layer. Implemented by the persistence collaborator.
pub trait CustomerRepository: Send + Sync {
    fn customer_of_id(&self, id: &CustomerId) -> Option<Customer>;

    fn customer_of_cpf(&self, cpf: &Cpf) -> Option<Customer>;

    fn customer_of_email(&self, email: &Email) -> Option<Customer>;

    /// Persist a new aggregate and return the canonical stored form.
    fn create(&self, customer: Customer) -> Customer;

    /// Persist the whole aggregate and return the canonical stored form.
    fn update(&self, customer: Customer) -> Customer;

    /// Test/reset hook only.
    fn delete_all(&self);
}
