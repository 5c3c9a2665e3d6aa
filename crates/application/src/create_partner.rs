//! Register a new partner.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use spotbook_core::{DomainError, DomainResult};
use spotbook_partners::{Partner, PartnerRepository};
use spotbook_person::{Cnpj, Email};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePartnerInput {
    pub cnpj: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePartnerOutput {
    pub id: String,
    pub cnpj: String,
    pub email: String,
    pub name: String,
}

impl From<&Partner> for CreatePartnerOutput {
    fn from(partner: &Partner) -> Self {
        Self {
            id: partner.partner_id().to_string(),
            cnpj: partner.cnpj().to_string(),
            email: partner.email().to_string(),
            name: partner.name().to_string(),
        }
    }
}

/// Use case: create a partner unless its Cnpj or Email is already taken.
///
/// Uniqueness is checked cnpj first, then email; both failures report
/// `Partner already exists`.
pub struct CreatePartner {
    partner_repository: Arc<dyn PartnerRepository>,
}

impl CreatePartner {
    pub fn new(partner_repository: Arc<dyn PartnerRepository>) -> Self {
        Self { partner_repository }
    }

    #[tracing::instrument(skip_all)]
    pub fn execute(&self, input: CreatePartnerInput) -> DomainResult<CreatePartnerOutput> {
        if self
            .partner_repository
            .partner_of_cnpj(&Cnpj::new(&input.cnpj)?)
            .is_some()
        {
            return Err(DomainError::already_exists("Partner"));
        }
        if self
            .partner_repository
            .partner_of_email(&Email::new(&input.email)?)
            .is_some()
        {
            return Err(DomainError::already_exists("Partner"));
        }

        let partner = Partner::new_partner(&input.name, &input.cnpj, &input.email)?;
        let stored = self.partner_repository.create(partner);
        debug!(partner_id = %stored.partner_id(), "partner created");

        Ok(CreatePartnerOutput::from(&stored))
    }
}

#[cfg(test)]
mod tests {
    use spotbook_infra::InMemoryPartnerRepository;

    use super::*;

    fn use_case() -> CreatePartner {
        CreatePartner::new(Arc::new(InMemoryPartnerRepository::new()))
    }

    fn disney() -> CreatePartnerInput {
        CreatePartnerInput {
            cnpj: "90.113.692/0001-77".into(),
            email: "john.doe@gmail.com".into(),
            name: "John Doe".into(),
        }
    }

    #[test]
    fn creates_a_partner() {
        let output = use_case().execute(disney()).unwrap();

        assert!(!output.id.is_empty());
        assert_eq!(output.cnpj, "90.113.692/0001-77");
        assert_eq!(output.email, "john.doe@gmail.com");
        assert_eq!(output.name, "John Doe");
    }

    #[test]
    fn refuses_a_duplicated_cnpj() {
        let use_case = use_case();
        use_case.execute(disney()).unwrap();

        let mut input = disney();
        input.email = "john2@gmail.com".into();
        let err = use_case.execute(input).unwrap_err();

        assert_eq!(err, DomainError::already_exists("Partner"));
        assert_eq!(err.to_string(), "Partner already exists");
    }

    #[test]
    fn refuses_a_duplicated_email() {
        let use_case = use_case();
        use_case.execute(disney()).unwrap();

        let mut input = disney();
        input.cnpj = "06.518.614/0001-46".into();
        let err = use_case.execute(input).unwrap_err();

        assert_eq!(err, DomainError::already_exists("Partner"));
    }

    #[test]
    fn propagates_field_validation_failures() {
        let mut input = disney();
        input.cnpj = "90113692000177".into();
        let err = use_case().execute(input).unwrap_err();
        assert_eq!(err, DomainError::invalid_value("Cnpj"));
    }
}
