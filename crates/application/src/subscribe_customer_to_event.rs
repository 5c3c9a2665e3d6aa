//! Subscribe a customer to an event: the reservation use case.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use spotbook_core::{DomainError, DomainResult};
use spotbook_customers::{CustomerId, CustomerRepository};
use spotbook_ticketing::{EventId, EventRepository};

/// Upper bound on optimistic-save retries. Every conflict means another
/// reservation committed in between, so in practice the loop ends long
/// before this.
const MAX_RESERVE_ATTEMPTS: u32 = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeCustomerToEventInput {
    pub event_id: String,
    pub customer_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeCustomerToEventOutput {
    pub event_id: String,
    pub event_ticket_id: String,
    pub reservation_date: DateTime<Utc>,
}

/// Use case: reserve one spot at an event for a customer.
///
/// The customer lookup runs before the event lookup; a caller with neither
/// always sees `Customer not found`. The reservation itself is a
/// load-reserve-save cycle against the event repository; when the save loses
/// an optimistic-concurrency race the cycle restarts from a fresh load, so
/// the aggregate guards re-run against the state that actually won.
pub struct SubscribeCustomerToEvent {
    customer_repository: Arc<dyn CustomerRepository>,
    event_repository: Arc<dyn EventRepository>,
}

impl SubscribeCustomerToEvent {
    pub fn new(
        customer_repository: Arc<dyn CustomerRepository>,
        event_repository: Arc<dyn EventRepository>,
    ) -> Self {
        Self {
            customer_repository,
            event_repository,
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn execute(
        &self,
        input: SubscribeCustomerToEventInput,
    ) -> DomainResult<SubscribeCustomerToEventOutput> {
        let customer_id: CustomerId = input.customer_id.parse()?;
        let customer = self
            .customer_repository
            .customer_of_id(&customer_id)
            .ok_or(DomainError::CustomerNotFound)?;

        let event_id: EventId = input.event_id.parse()?;

        let mut attempts = 0;
        loop {
            let mut event = self
                .event_repository
                .event_of_id(&event_id)
                .ok_or(DomainError::EventNotFound)?;

            let ticket = event.reserve_ticket(customer.customer_id())?;

            match self.event_repository.update(event) {
                Ok(saved) => {
                    debug!(
                        event_id = %event_id,
                        event_ticket_id = %ticket.event_ticket_id(),
                        ordering = ticket.ordering(),
                        "ticket reserved"
                    );
                    return Ok(SubscribeCustomerToEventOutput {
                        event_id: saved.event_id().to_string(),
                        event_ticket_id: ticket.event_ticket_id().to_string(),
                        reservation_date: Utc::now(),
                    });
                }
                Err(DomainError::Conflict(msg)) => {
                    attempts += 1;
                    if attempts >= MAX_RESERVE_ATTEMPTS {
                        return Err(DomainError::conflict(msg));
                    }
                    debug!(event_id = %event_id, attempts, "reservation save conflicted, retrying");
                }
                Err(err) => return Err(err),
            }
        }
    }
}
