//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by the application.
//! `CoreCalculator` is the internal trait implemented by algorithms.
//! `FibCalculator` is a decorator that adds the fast path (n <= 93).

use std::sync::Arc;

use num_bigint::BigUint;

use crate::constants::{FIB_TABLE, MAX_FIB_U64};
use crate::fastdoubling::FastDoubling;

/// Error type for Fibonacci and primality operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// An index was negative or not an integer.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),
}

/// Public trait for Fibonacci calculators.
pub trait Calculator: Send + Sync {
    /// Calculate F(n).
    fn calculate(&self, n: u64) -> Result<BigUint, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `FibCalculator` which adds the fast path.
pub trait CoreCalculator: Send + Sync {
    /// Perform the core calculation for large n.
    fn calculate_core(&self, n: u64) -> Result<BigUint, FibError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreCalculator` with the small-n fast path.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }

    /// Fast path for small n (n <= 93) using precomputed table.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn calculate_small(n: u64) -> BigUint {
        BigUint::from(FIB_TABLE[n as usize])
    }
}

impl Default for FibCalculator {
    fn default() -> Self {
        Self::new(Arc::new(FastDoubling::new()))
    }
}

impl Calculator for FibCalculator {
    fn calculate(&self, n: u64) -> Result<BigUint, FibError> {
        if n <= MAX_FIB_U64 {
            return Ok(Self::calculate_small(n));
        }

        tracing::debug!(n, algorithm = self.inner.name(), "delegating to core calculator");
        self.inner.calculate_core(n)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_small_values() {
        assert_eq!(FibCalculator::calculate_small(0), BigUint::from(0u64));
        assert_eq!(FibCalculator::calculate_small(1), BigUint::from(1u64));
        assert_eq!(FibCalculator::calculate_small(10), BigUint::from(55u64));
        assert_eq!(FibCalculator::calculate_small(20), BigUint::from(6765u64));
    }

    #[test]
    fn calculate_small_max() {
        assert_eq!(
            FibCalculator::calculate_small(93),
            BigUint::from(12_200_160_415_121_876_738u64)
        );
    }

    #[test]
    fn fast_path_matches_core() {
        let core = FastDoubling::new();
        for n in 0..=MAX_FIB_U64 {
            assert_eq!(
                FibCalculator::calculate_small(n),
                core.calculate_core(n).unwrap(),
                "mismatch at n={n}"
            );
        }
    }

    #[test]
    fn decorator_crosses_fast_path_boundary() {
        let calc = FibCalculator::default();
        let f93 = calc.calculate(93).unwrap();
        let f94 = calc.calculate(94).unwrap();
        let f95 = calc.calculate(95).unwrap();
        assert_eq!(f93 + &f94, f95);
        assert_eq!(calc.name(), "FastDoubling");
    }

    #[test]
    fn fib_error_display() {
        let err = FibError::InvalidInput("negative index: -1".into());
        assert_eq!(err.to_string(), "invalid input: negative index: -1");

        let err = FibError::Config("bad bounds".into());
        assert_eq!(err.to_string(), "configuration error: bad bounds");
    }
}
