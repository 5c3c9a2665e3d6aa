//! Person/event display name.

use serde::{Deserialize, Serialize};

use spotbook_core::{DomainError, DomainResult, ValueObject};

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 255;

/// A non-blank name between 3 and 255 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let len = value.chars().count();
        if value.trim().is_empty() || len < MIN_LEN || len > MAX_LEN {
            return Err(DomainError::invalid_value("Name"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Name {}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
