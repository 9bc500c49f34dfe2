//! CLI output formatting.

use num_bigint::BigUint;
use serde::Serialize;

use fibprime_core::primality::Primality;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain decimal values, one per line.
    #[default]
    Text,
    /// One JSON record per line.
    Json,
}

/// Number of decimal digits in `value` (1 for zero).
#[must_use]
pub fn digit_count(value: &BigUint) -> usize {
    value.to_str_radix(10).len()
}

/// Format a prime-check result, e.g. `"2 is probably prime with 1 digits"`.
#[must_use]
pub fn format_prime_line(value: &BigUint, primality: Primality) -> String {
    let digits = value.to_str_radix(10);
    format!("{digits} {} with {} digits", primality.status(), digits.len())
}

/// A single serialized result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    /// Fibonacci index.
    pub n: u64,
    /// F(n) in decimal. Kept as a string since it exceeds every JSON number type.
    pub value: String,
    /// Decimal digit count of F(n).
    pub digits: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primality: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<u64>,
}

impl ResultRecord {
    #[must_use]
    pub fn new(n: u64, value: &BigUint, primality: Option<Primality>) -> Self {
        let value = value.to_str_radix(10);
        Self {
            n,
            digits: value.len(),
            value,
            primality: primality.map(Primality::label),
            factor: primality.and_then(Primality::factor),
        }
    }
}
