//! # fibprime-core
//!
//! Core library for fibprime: an exact Fast Doubling Fibonacci engine and a
//! bounded trial-division primality check backed by an immutable prime table.

pub mod calculator;
pub mod constants;
pub mod fastdoubling;
pub mod index;
pub mod primality;
pub mod primes;

// Re-exports
pub use calculator::{Calculator, CoreCalculator, FibCalculator, FibError};
pub use constants::{exit_codes, DEFAULT_MAX_N, DEFAULT_TOP_N, FIB_TABLE, MAX_FIB_U64};
pub use fastdoubling::{FastDoubling, FibPair};
pub use index::parse_index;
pub use primality::{Primality, PrimalityChecker};
pub use primes::PrimeTable;

use num_bigint::BigUint;

/// Compute F(n) using the fast doubling algorithm.
///
/// Small indices are served from [`FIB_TABLE`]; everything else runs the
/// iterative doubling scan. Use the [`Calculator`] trait directly when the
/// calculator needs to be injected.
///
/// # Example
/// ```
/// assert_eq!(fibprime_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibprime_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    if n <= MAX_FIB_U64 {
        FibCalculator::calculate_small(n)
    } else {
        FastDoubling::fib(n)
    }
}
