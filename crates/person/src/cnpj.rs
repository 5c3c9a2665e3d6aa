//! CNPJ: Brazilian legal-entity registry number.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use spotbook_core::{DomainError, DomainResult, ValueObject};

static MASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}$").expect("valid CNPJ mask")
});

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// A masked CNPJ (`dd.ddd.ddd/dddd-dd`) with valid mod-11 check digits.
///
/// Format and checksum failures are indistinguishable to the caller; both
/// surface as `Invalid value for Cnpj`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cnpj(String);

impl Cnpj {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !MASK.is_match(&value) || !checksum_ok(&value) {
            return Err(DomainError::invalid_value("Cnpj"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Cnpj {}

impl core::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Verify the two CNPJ check digits: a weighted mod-11 sum where the digit is
/// 0 when the remainder is below 2, else `11 - remainder`.
fn checksum_ok(masked: &str) -> bool {
    let digits: Vec<u32> = masked.chars().filter_map(|c| c.to_digit(10)).collect();
    debug_assert_eq!(digits.len(), 14);

    let check = |weights: &[u32]| {
        let sum: u32 = weights.iter().zip(&digits).map(|(w, d)| w * d).sum();
        match sum % 11 {
            r if r < 2 => 0,
            r => 11 - r,
        }
    };

    check(&FIRST_WEIGHTS) == digits[12] && check(&SECOND_WEIGHTS) == digits[13]
}
