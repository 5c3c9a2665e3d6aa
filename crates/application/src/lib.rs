//! `spotbook-application` — thin use cases over the domain.
//!
//! Each use case composes repository ports and aggregate operations: load,
//! invoke, persist, map to a plain output. No transport or storage concerns
//! live here; failures are domain errors surfaced to the caller as-is.

pub mod create_customer;
pub mod create_event;
pub mod create_partner;
pub mod get_customer_by_id;
pub mod get_partner_by_id;
pub mod subscribe_customer_to_event;

pub use create_customer::{CreateCustomer, CreateCustomerInput, CreateCustomerOutput};
pub use create_event::{CreateEvent, CreateEventInput, CreateEventOutput};
pub use create_partner::{CreatePartner, CreatePartnerInput, CreatePartnerOutput};
pub use get_customer_by_id::{GetCustomerById, GetCustomerByIdInput, GetCustomerByIdOutput};
pub use get_partner_by_id::{GetPartnerById, GetPartnerByIdInput, GetPartnerByIdOutput};
pub use subscribe_customer_to_event::{
    SubscribeCustomerToEvent, SubscribeCustomerToEventInput, SubscribeCustomerToEventOutput,
};
