//! In-memory partner repository.

use std::collections::HashMap;
use std::sync::RwLock;

use spotbook_partners::{Partner, PartnerId, PartnerRepository};
use spotbook_person::{Cnpj, Email};

/// In-memory [`PartnerRepository`].
#[derive(Debug, Default)]
pub struct InMemoryPartnerRepository {
    partners: RwLock<HashMap<PartnerId, Partner>>,
}

impl InMemoryPartnerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PartnerRepository for InMemoryPartnerRepository {
    fn partner_of_id(&self, id: &PartnerId) -> Option<Partner> {
        self.partners
            .read()
            .expect("partner store lock poisoned")
            .get(id)
            .cloned()
    }

    fn partner_of_cnpj(&self, cnpj: &Cnpj) -> Option<Partner> {
        self.partners
            .read()
            .expect("partner store lock poisoned")
            .values()
            .find(|p| p.cnpj() == cnpj)
            .cloned()
    }

    fn partner_of_email(&self, email: &Email) -> Option<Partner> {
        self.partners
            .read()
            .expect("partner store lock poisoned")
            .values()
            .find(|p| p.email() == email)
            .cloned()
    }

    fn create(&self, partner: Partner) -> Partner {
        self.partners
            .write()
            .expect("partner store lock poisoned")
            .insert(*partner.partner_id(), partner.clone());
        partner
    }

    fn update(&self, partner: Partner) -> Partner {
        self.create(partner)
    }

    fn delete_all(&self) {
        self.partners
            .write()
            .expect("partner store lock poisoned")
            .clear();
    }
}
