//! Partner aggregate.

use spotbook_core::{DomainResult, Entity, domain_id};
use spotbook_person::{Cnpj, Email, Name};

domain_id!(PartnerId, "PartnerId");

/// Aggregate root: a partner who organizes events.
///
/// Same lifecycle as `Customer`: validated on construction, immutable
/// thereafter, identity-based equality.
#[derive(Debug, Clone)]
pub struct Partner {
    partner_id: PartnerId,
    name: Name,
    cnpj: Cnpj,
    email: Email,
}

impl Partner {
    /// Create a partner with a fresh identity.
    ///
    /// Fields validate in declaration order; the first invalid one wins.
    pub fn new_partner(name: &str, cnpj: &str, email: &str) -> DomainResult<Self> {
        Self::with(PartnerId::new(), name, cnpj, email)
    }

    /// Rehydrate a partner from a known identity (storage load path).
    pub fn with(id: PartnerId, name: &str, cnpj: &str, email: &str) -> DomainResult<Self> {
        Ok(Self {
            partner_id: id,
            name: Name::new(name)?,
            cnpj: Cnpj::new(cnpj)?,
            email: Email::new(email)?,
        })
    }

    pub fn partner_id(&self) -> &PartnerId {
        &self.partner_id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn cnpj(&self) -> &Cnpj {
        &self.cnpj
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

impl Entity for Partner {
    type Id = PartnerId;

    fn id(&self) -> &Self::Id {
        &self.partner_id
    }
}

impl PartialEq for Partner {
    fn eq(&self, other: &Self) -> bool {
        self.partner_id == other.partner_id
    }
}

impl Eq for Partner {}

#[cfg(test)]
mod tests {
    use spotbook_core::DomainError;

    use super::*;

    #[test]
    fn creates_a_partner() {
        let partner =
            Partner::new_partner("John Doe", "41.536.538/0001-00", "john.doe@gmail.com").unwrap();
        assert_eq!(partner.name().as_str(), "John Doe");
        assert_eq!(partner.cnpj().as_str(), "41.536.538/0001-00");
        assert_eq!(partner.email().as_str(), "john.doe@gmail.com");
    }

    #[test]
    fn rejects_an_invalid_name() {
        let err =
            Partner::new_partner("", "41.536.538/0001-00", "john.doe@gmail.com").unwrap_err();
        assert_eq!(err, DomainError::invalid_value("Name"));
    }

    #[test]
    fn rejects_an_invalid_cnpj() {
        let err = Partner::new_partner("John Doe", "41536538000100", "john.doe@gmail.com")
            .unwrap_err();
        assert_eq!(err, DomainError::invalid_value("Cnpj"));
        assert_eq!(err.to_string(), "Invalid value for Cnpj");
    }

    #[test]
    fn rejects_an_invalid_email() {
        let err =
            Partner::new_partner("John Doe", "41.536.538/0001-00", "john.doe").unwrap_err();
        assert_eq!(err, DomainError::invalid_value("Email"));
    }

    #[test]
    fn name_is_checked_before_cnpj_and_email() {
        let err = Partner::new_partner("", "bad", "bad").unwrap_err();
        assert_eq!(err, DomainError::invalid_value("Name"));
    }

    #[test]
    fn equality_goes_by_identity() {
        let a = Partner::new_partner("John Doe", "41.536.538/0001-00", "john.doe@gmail.com")
            .unwrap();
        let b = Partner::new_partner("John Doe", "41.536.538/0001-00", "john.doe@gmail.com")
            .unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
