//! Bounded trial-division primality check.
//!
//! The check divides by every prime in a [`PrimeTable`] and then by every
//! prime found on the fly below the table's sweep bound `max_n`. Divisors at
//! or above `max_n` are never tried, so a composite whose prime factors are
//! all `>= max_n` is reported as [`Primality::ProbablyPrime`]. This is an
//! incomplete test, not a primality proof. For `m < max_n^2` the answer is
//! exact, except when `top_n` is itself prime: it sits between the table and
//! the sweep, is never tried, and values whose only factors below `max_n` are
//! powers of `top_n` (e.g. `top_n^2`) are reported as probably prime.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::primes::PrimeTable;

/// Outcome of a bounded primality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primality {
    /// 0 or 1.
    Trivial,
    /// A divisor was found.
    Composite {
        /// Smallest divisor tried that divides the value.
        factor: u64,
    },
    /// No divisor below the sweep bound divides the value.
    ProbablyPrime,
}

impl Primality {
    /// True only for [`Primality::ProbablyPrime`].
    pub fn is_probably_prime(self) -> bool {
        self == Self::ProbablyPrime
    }

    /// Human-readable status used by the CLI.
    pub fn status(self) -> &'static str {
        match self {
            Self::ProbablyPrime => "is probably prime",
            Self::Trivial | Self::Composite { .. } => "is not prime!",
        }
    }

    /// Stable identifier used in serialized output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Trivial => "trivial",
            Self::Composite { .. } => "composite",
            Self::ProbablyPrime => "probably_prime",
        }
    }

    /// The witness divisor, if any.
    pub fn factor(self) -> Option<u64> {
        match self {
            Self::Composite { factor } => Some(factor),
            Self::Trivial | Self::ProbablyPrime => None,
        }
    }
}

impl fmt::Display for Primality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status())
    }
}

enum Step {
    Prime,
    Composite(u64),
    Continue,
}

/// Primality checker over an injected prime table.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use fibprime_core::{PrimalityChecker, PrimeTable};
///
/// let checker = PrimalityChecker::new(PrimeTable::shared());
/// assert!(checker.is_probably_prime(&BigUint::from(2u32)));
/// assert!(!checker.is_probably_prime(&BigUint::from(4u32)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PrimalityChecker<'a> {
    table: &'a PrimeTable,
    // Largest divisor for which every smaller prime has been tried.
    square_bound_limit: u64,
}

impl<'a> PrimalityChecker<'a> {
    /// Create a checker that divides by the primes of `table`.
    #[must_use]
    pub fn new(table: &'a PrimeTable) -> Self {
        let square_bound_limit = table.untested_bound().unwrap_or(u64::MAX);
        Self {
            table,
            square_bound_limit,
        }
    }

    /// True when `m` survives both trial-division sweeps.
    pub fn is_probably_prime(&self, m: &BigUint) -> bool {
        self.check(m).is_probably_prime()
    }

    /// Classify `m`, reporting the divisor that rules it out.
    pub fn check(&self, m: &BigUint) -> Primality {
        let small = m.to_u64();
        if matches!(small, Some(0 | 1)) {
            return Primality::Trivial;
        }

        let divisors = self
            .table
            .primes()
            .iter()
            .copied()
            .chain(self.table.sweep());

        for p in divisors {
            let square_bound = p <= self.square_bound_limit;
            match Self::step(m, small, p, square_bound) {
                Step::Prime => return Primality::ProbablyPrime,
                Step::Composite(factor) => return Primality::Composite { factor },
                Step::Continue => {}
            }
        }

        tracing::trace!(max_n = self.table.max_n(), "no divisor below sweep bound");
        Primality::ProbablyPrime
    }

    /// `square_bound` is set only while no prime below `p` has been skipped,
    /// so `p^2 > m` proves there is no smaller factor.
    fn step(m: &BigUint, small: Option<u64>, p: u64, square_bound: bool) -> Step {
        if let Some(v) = small {
            if v == p {
                return Step::Prime;
            }
            if square_bound && u128::from(p) * u128::from(p) > u128::from(v) {
                return Step::Prime;
            }
        }
        if (m % p).is_zero() {
            Step::Composite(p)
        } else {
            Step::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primes::is_prime_candidate;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn two_is_prime_four_is_not() {
        let checker = PrimalityChecker::new(PrimeTable::shared());
        assert!(checker.is_probably_prime(&big(2)));
        assert!(!checker.is_probably_prime(&big(4)));
        assert_eq!(checker.check(&big(4)), Primality::Composite { factor: 2 });
    }

    #[test]
    fn zero_and_one_are_not_prime() {
        let checker = PrimalityChecker::new(PrimeTable::shared());
        assert_eq!(checker.check(&big(0)), Primality::Trivial);
        assert_eq!(checker.check(&big(1)), Primality::Trivial);
        assert_eq!(Primality::Trivial.status(), "is not prime!");
    }

    #[test]
    fn table_primes_are_prime() {
        let table = PrimeTable::build(100, 1_000).unwrap();
        let checker = PrimalityChecker::new(&table);
        for &p in table.primes() {
            assert!(checker.is_probably_prime(&big(p)), "{p}");
        }
    }

    #[test]
    fn exact_below_square_of_sweep_bound() {
        let table = PrimeTable::build(10, 40).unwrap();
        let checker = PrimalityChecker::new(&table);
        for m in 0..1_600u64 {
            assert_eq!(
                checker.is_probably_prime(&big(m)),
                is_prime_candidate(m),
                "m={m}"
            );
        }
    }

    /// Trial division exactly as described by the two sweeps, with no
    /// square-root shortcut.
    fn two_sweeps(table: &PrimeTable, m: u64) -> bool {
        if m < 2 {
            return false;
        }
        for p in table.primes().iter().copied().chain(table.sweep()) {
            if m == p {
                return true;
            }
            if m % p == 0 {
                return false;
            }
        }
        true
    }

    #[test]
    fn prime_top_n_is_never_tried() {
        let table = PrimeTable::build(13, 40).unwrap();
        assert_eq!(table.primes(), [2, 3, 5, 7, 11]);
        assert_eq!(table.untested_bound(), Some(13));
        let checker = PrimalityChecker::new(&table);

        assert_eq!(checker.check(&big(13 * 17)), Primality::Composite { factor: 17 });
        assert_eq!(checker.check(&big(13 * 29)), Primality::Composite { factor: 29 });
        // Only divisible by the skipped bound
        assert_eq!(checker.check(&big(13 * 13)), Primality::ProbablyPrime);
        assert_eq!(checker.check(&big(13)), Primality::ProbablyPrime);
    }

    #[test]
    fn matches_two_sweeps_for_prime_top_n() {
        for (top_n, max_n) in [(13, 40), (3, 30), (7, 7), (11, 60), (97, 200)] {
            let table = PrimeTable::build(top_n, max_n).unwrap();
            let checker = PrimalityChecker::new(&table);
            for m in 0..max_n * max_n {
                assert_eq!(
                    checker.is_probably_prime(&big(m)),
                    two_sweeps(&table, m),
                    "top_n={top_n} max_n={max_n} m={m}"
                );
            }
        }
    }

    #[test]
    fn factor_found_in_sweep() {
        let table = PrimeTable::build(10, 40).unwrap();
        let checker = PrimalityChecker::new(&table);
        // 23 * 31 has no factor below the table bound
        assert_eq!(checker.check(&big(23 * 31)), Primality::Composite { factor: 23 });
    }

    #[test]
    fn large_factors_are_missed() {
        // Both factors lie above the sweep bound: a documented false positive.
        let table = PrimeTable::build(10, 20).unwrap();
        let checker = PrimalityChecker::new(&table);
        let m = big(23 * 29);
        assert_eq!(checker.check(&m), Primality::ProbablyPrime);
    }

    #[test]
    fn big_values_beyond_u64() {
        let checker = PrimalityChecker::new(PrimeTable::shared());
        // 2^64 + 2 is even
        let m = (BigUint::from(1u32) << 64u32) + 2u32;
        assert_eq!(checker.check(&m), Primality::Composite { factor: 2 });
        // F(300) is divisible by F(3) = 2
        let f300 = crate::fibonacci(300);
        assert_eq!(checker.check(&f300), Primality::Composite { factor: 2 });
    }

    #[test]
    fn fibonacci_primes() {
        let checker = PrimalityChecker::new(PrimeTable::shared());
        for n in [3u64, 4, 5, 7, 11, 13, 17, 23, 29, 43, 47] {
            assert!(checker.is_probably_prime(&crate::fibonacci(n)), "F({n})");
        }
        for n in [6u64, 8, 12, 19, 31, 37] {
            assert!(!checker.is_probably_prime(&crate::fibonacci(n)), "F({n})");
        }
    }

    #[test]
    fn status_and_labels() {
        assert_eq!(Primality::ProbablyPrime.to_string(), "is probably prime");
        assert_eq!(Primality::Composite { factor: 3 }.to_string(), "is not prime!");
        assert_eq!(Primality::Composite { factor: 3 }.factor(), Some(3));
        assert_eq!(Primality::ProbablyPrime.label(), "probably_prime");
        assert_eq!(Primality::ProbablyPrime.factor(), None);
    }
}
