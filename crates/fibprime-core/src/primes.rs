//! Precomputed table of small primes used for trial division.

use std::sync::OnceLock;

use num_integer::Roots;

use crate::calculator::FibError;
use crate::constants::{DEFAULT_MAX_N, DEFAULT_TOP_N};

/// Trial-division primality test for a single candidate.
///
/// Tests odd divisors of `candidate` up to its integer square root.
#[must_use]
pub fn is_prime_candidate(candidate: u64) -> bool {
    if candidate < 2 {
        return false;
    }
    if candidate < 4 {
        return true;
    }
    if candidate % 2 == 0 {
        return false;
    }
    let limit = candidate.sqrt();
    (3..=limit).step_by(2).all(|d| candidate % d != 0)
}

/// Ordered primes strictly below `top_n`, together with the sweep bound
/// `max_n` used by the primality checker.
///
/// Immutable once built. [`PrimeTable::shared`] hands out a process-wide
/// instance with the default bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeTable {
    primes: Vec<u64>,
    top_n: u64,
    max_n: u64,
}

static SHARED: OnceLock<PrimeTable> = OnceLock::new();

impl PrimeTable {
    /// Build the table of primes below `top_n`.
    ///
    /// Requires `top_n >= 3` and `max_n >= top_n`.
    pub fn build(top_n: u64, max_n: u64) -> Result<Self, FibError> {
        if top_n < 3 {
            return Err(FibError::Config(format!(
                "prime table bound must be at least 3, got {top_n}"
            )));
        }
        if max_n < top_n {
            return Err(FibError::Config(format!(
                "sweep bound {max_n} is below prime table bound {top_n}"
            )));
        }
        Ok(Self::collect(top_n, max_n))
    }

    /// The process-wide table built with [`DEFAULT_TOP_N`] and [`DEFAULT_MAX_N`].
    ///
    /// Built on first use, never mutated afterwards.
    pub fn shared() -> &'static PrimeTable {
        SHARED.get_or_init(|| Self::collect(DEFAULT_TOP_N, DEFAULT_MAX_N))
    }

    fn collect(top_n: u64, max_n: u64) -> Self {
        let primes: Vec<u64> = std::iter::once(2)
            .chain((3..top_n).step_by(2).filter(|&c| is_prime_candidate(c)))
            .collect();
        tracing::debug!(top_n, max_n, count = primes.len(), "built prime table");
        Self {
            primes,
            top_n,
            max_n,
        }
    }

    /// The primes below `top_n`, in increasing order.
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    /// Number of primes in the table.
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// Always false for a built table (it holds at least 2).
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Table bound: every prime strictly below it is in [`Self::primes`].
    pub fn top_n(&self) -> u64 {
        self.top_n
    }

    /// Sweep bound: no divisor at or above it is ever tried.
    pub fn max_n(&self) -> u64 {
        self.max_n
    }

    /// `top_n` when it is prime. It is neither in the table nor in the sweep,
    /// so it is never tried as a divisor.
    pub fn untested_bound(&self) -> Option<u64> {
        is_prime_candidate(self.top_n).then_some(self.top_n)
    }

    /// Primes `p` with `top_n < p < max_n`, found on the fly by trial division.
    pub fn sweep(&self) -> impl Iterator<Item = u64> {
        let start = (self.top_n + 1) | 1;
        (start..self.max_n)
            .step_by(2)
            .filter(|&c| is_prime_candidate(c))
    }
}
