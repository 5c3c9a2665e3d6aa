//! In-memory customer repository.

use std::collections::HashMap;
use std::sync::RwLock;

use spotbook_customers::{Customer, CustomerId, CustomerRepository};
use spotbook_person::{Cpf, Email};

/// In-memory [`CustomerRepository`].
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn customer_of_id(&self, id: &CustomerId) -> Option<Customer> {
        self.customers
            .read()
            .expect("customer store lock poisoned")
            .get(id)
            .cloned()
    }

    fn customer_of_cpf(&self, cpf: &Cpf) -> Option<Customer> {
        self.customers
            .read()
            .expect("customer store lock poisoned")
            .values()
            .find(|c| c.cpf() == cpf)
            .cloned()
    }

    fn customer_of_email(&self, email: &Email) -> Option<Customer> {
        self.customers
            .read()
            .expect("customer store lock poisoned")
            .values()
            .find(|c| c.email() == email)
            .cloned()
    }

    fn create(&self, customer: Customer) -> Customer {
        self.customers
            .write()
            .expect("customer store lock poisoned")
            .insert(*customer.customer_id(), customer.clone());
        customer
    }

    fn update(&self, customer: Customer) -> Customer {
        self.create(customer)
    }

    fn delete_all(&self) {
        self.customers
            .write()
            .expect("customer store lock poisoned")
            .clear();
    }
}
