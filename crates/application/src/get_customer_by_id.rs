//! Look up a customer by id.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use spotbook_core::DomainResult;
use spotbook_customers::{Customer, CustomerId, CustomerRepository};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCustomerByIdInput {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCustomerByIdOutput {
    pub id: String,
    pub cpf: String,
    pub email: String,
    pub name: String,
}

impl From<&Customer> for GetCustomerByIdOutput {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.customer_id().to_string(),
            cpf: customer.cpf().to_string(),
            email: customer.email().to_string(),
            name: customer.name().to_string(),
        }
    }
}

/// Use case: fetch a customer, absent when the id does not resolve.
pub struct GetCustomerById {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl GetCustomerById {
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customer_repository,
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn execute(
        &self,
        input: GetCustomerByIdInput,
    ) -> DomainResult<Option<GetCustomerByIdOutput>> {
        let id: CustomerId = input.id.parse()?;
        Ok(self
            .customer_repository
            .customer_of_id(&id)
            .map(|customer| GetCustomerByIdOutput::from(&customer)))
    }
}
