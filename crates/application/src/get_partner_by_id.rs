//! Look up a partner by id.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use spotbook_core::DomainResult;
use spotbook_partners::{Partner, PartnerId, PartnerRepository};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPartnerByIdInput {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPartnerByIdOutput {
    pub id: String,
    pub cnpj: String,
    pub email: String,
    pub name: String,
}

impl From<&Partner> for GetPartnerByIdOutput {
    fn from(partner: &Partner) -> Self {
        Self {
            id: partner.partner_id().to_string(),
            cnpj: partner.cnpj().to_string(),
            email: partner.email().to_string(),
            name: partner.name().to_string(),
        }
    }
}

/// Use case: fetch a partner, absent when the id does not resolve.
pub struct GetPartnerById {
    partner_repository: Arc<dyn PartnerRepository>,
}

impl GetPartnerById {
    pub fn new(partner_repository: Arc<dyn PartnerRepository>) -> Self {
        Self { partner_repository }
    }

    #[tracing::instrument(skip_all)]
    pub fn execute(
        &self,
        input: GetPartnerByIdInput,
    ) -> DomainResult<Option<GetPartnerByIdOutput>> {
        let id: PartnerId = input.id.parse()?;
        Ok(self
            .partner_repository
            .partner_of_id(&id)
            .map(|partner| GetPartnerByIdOutput::from(&partner)))
    }
}
