//! Create an event for a partner.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use spotbook_core::{DomainError, DomainResult};
use spotbook_partners::{PartnerId, PartnerRepository};
use spotbook_ticketing::{Event, EventRepository};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventInput {
    pub date: String,
    pub name: String,
    pub total_spots: u32,
    pub partner_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventOutput {
    pub id: String,
    pub date: String,
    pub name: String,
    pub total_spots: u32,
    pub partner_id: String,
}

/// Use case: create an event after resolving its partner.
pub struct CreateEvent {
    event_repository: Arc<dyn EventRepository>,
    partner_repository: Arc<dyn PartnerRepository>,
}

impl CreateEvent {
    pub fn new(
        event_repository: Arc<dyn EventRepository>,
        partner_repository: Arc<dyn PartnerRepository>,
    ) -> Self {
        Self {
            event_repository,
            partner_repository,
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn execute(&self, input: CreateEventInput) -> DomainResult<CreateEventOutput> {
        let partner_id: PartnerId = input.partner_id.parse()?;
        let partner = self
            .partner_repository
            .partner_of_id(&partner_id)
            .ok_or(DomainError::PartnerNotFound)?;

        let event = self.event_repository.create(Event::new_event(
            &input.name,
            &input.date,
            input.total_spots,
            &partner,
        )?);
        debug!(event_id = %event.event_id(), partner_id = %partner_id, "event created");

        Ok(CreateEventOutput {
            id: event.event_id().to_string(),
            date: event.date().to_string(),
            name: event.name().to_string(),
            total_spots: event.total_spots(),
            partner_id: event.partner_id().to_string(),
        })
    }
}
