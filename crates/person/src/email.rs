//! Email address.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use spotbook_core::{DomainError, DomainResult, ValueObject};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9_.-]+)@([\da-z.-]+)\.([a-z.]{2,6})$").expect("valid email pattern")
});

/// A lowercase email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !PATTERN.is_match(&value) {
            return Err(DomainError::invalid_value("Email"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {}

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_addresses() {
        for email in ["john.doe@gmail.com", "sidarta.silva@gmail.com", "a_b-c@my-host.com.br"] {
            let actual = Email::new(email).unwrap();
            assert_eq!(actual.as_str(), email);
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "   ",
            "john.doe",
            "john.doe@",
            "@gmail.com",
            "john.doe@gmail",
            "John.Doe@gmail.com",
            "john doe@gmail.com",
        ] {
            let err = Email::new(email).unwrap_err();
            assert_eq!(err, DomainError::invalid_value("Email"));
        }
    }
}
