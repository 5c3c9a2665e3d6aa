//! CPF: Brazilian natural-person registry number.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use spotbook_core::{DomainError, DomainResult, ValueObject};

static MASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").expect("valid CPF mask"));

/// A masked CPF (`ddd.ddd.ddd-dd`) with valid mod-11 check digits.
///
/// Format and checksum failures are indistinguishable to the caller; both
/// surface as `Invalid value for Cpf`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !MASK.is_match(&value) || !checksum_ok(&value) {
            return Err(DomainError::invalid_value("Cpf"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Cpf {}

impl core::fmt::Display for Cpf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Verify the two CPF check digits.
///
/// Digit `n` (0-based position 9, then 10) closes a weighted sum of the
/// preceding digits with weights `n+1 .. 2`; the digit is `(sum * 10) % 11`,
/// folding 10 to 0.
fn checksum_ok(masked: &str) -> bool {
    let digits: Vec<u32> = masked.chars().filter_map(|c| c.to_digit(10)).collect();
    debug_assert_eq!(digits.len(), 11);

    [9usize, 10].iter().all(|&n| {
        let sum: u32 = digits[..n]
            .iter()
            .enumerate()
            .map(|(i, d)| d * (n as u32 + 1 - i as u32))
            .sum();
        let check = (sum * 10) % 11 % 10;
        check == digits[n]
    })
}
