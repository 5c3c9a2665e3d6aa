//! Partner repository port.

use spotbook_person::{Cnpj, Email};

use crate::partner::{Partner, PartnerId};

/// Lookup and persistence contract for [`Partner`] aggregates.
///
/// Lookups have return-or-absent semantics; "not found" is not an error at
/// this layer. Implemented by the persistence collaborator.
pub trait PartnerRepository: Send + Sync {
    fn partner_of_id(&self, id: &PartnerId) -> Option<Partner>;

    fn partner_of_cnpj(&self, cnpj: &Cnpj) -> Option<Partner>;

    fn partner_of_email(&self, email: &Email) -> Option<Partner>;

    /// Persist a new aggregate and return the canonical stored form.
    fn create(&self, partner: Partner) -> Partner;

    /// Persist the whole aggregate and return the canonical stored form.
    fn update(&self, partner: Partner) -> Partner;

    /// Test/reset hook only.
    fn delete_all(&self);
}
