//! Register a new customer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use spotbook_core::{DomainError, DomainResult};
use spotbook_customers::{Customer, CustomerRepository};
use spotbook_person::{Cpf, Email};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCustomerInput {
    pub cpf: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerOutput {
    pub id: String,
    pub cpf: String,
    pub email: String,
    pub name: String,
}

impl From<&Customer> for CreateCustomerOutput {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.customer_id().to_string(),
            cpf: customer.cpf().to_string(),
            email: customer.email().to_string(),
            name: customer.name().to_string(),
        }
    }
}

/// Use case: create a customer unless its Cpf or Email is already taken.
///
/// Uniqueness is checked cpf first, then email; both failures report
/// `Customer already exists`.
pub struct CreateCustomer {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl CreateCustomer {
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customer_repository,
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn execute(&self, input: CreateCustomerInput) -> DomainResult<CreateCustomerOutput> {
        if self
            .customer_repository
            .customer_of_cpf(&Cpf::new(&input.cpf)?)
            .is_some()
        {
            return Err(DomainError::already_exists("Customer"));
        }
        if self
            .customer_repository
            .customer_of_email(&Email::new(&input.email)?)
            .is_some()
        {
            return Err(DomainError::already_exists("Customer"));
        }

        let customer = Customer::new_customer(&input.name, &input.cpf, &input.email)?;
        let stored = self.customer_repository.create(customer);
        debug!(customer_id = %stored.customer_id(), "customer created");

        Ok(CreateCustomerOutput::from(&stored))
    }
}
