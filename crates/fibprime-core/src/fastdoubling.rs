//! Fast Doubling algorithm for Fibonacci computation.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! Iterates over the bits of n from MSB to LSB, so the work is O(log n)
//! big-integer multiplications and there is no recursion depth to manage.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::calculator::{CoreCalculator, FibError};

/// The pair (F(k), F(k+1)) carried through the doubling scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibPair {
    /// Index k.
    pub k: u64,
    /// F(k).
    pub fk: BigUint,
    /// F(k+1).
    pub fk1: BigUint,
}

impl FibPair {
    /// The base pair (F(0), F(1)) = (0, 1).
    #[must_use]
    pub fn base() -> Self {
        Self {
            k: 0,
            fk: BigUint::zero(),
            fk1: BigUint::one(),
        }
    }

    /// Move from k to 2k.
    #[must_use]
    pub fn double(self) -> Self {
        // 2*F(k+1) >= F(k) for every k, so the subtraction cannot underflow.
        let t = (&self.fk1 << 1u32) - &self.fk;
        let f2k = &self.fk * &t;
        let f2k1 = &self.fk * &self.fk + &self.fk1 * &self.fk1;
        Self {
            k: self.k * 2,
            fk: f2k,
            fk1: f2k1,
        }
    }

    /// Move from k to k+1.
    #[must_use]
    pub fn advance(self) -> Self {
        let next = &self.fk + &self.fk1;
        Self {
            k: self.k + 1,
            fk: self.fk1,
            fk1: next,
        }
    }

    /// Consume the pair and return F(k).
    #[must_use]
    pub fn into_value(self) -> BigUint {
        self.fk
    }
}

/// Compute the pair (F(n), F(n+1)) with the iterative bit scan.
///
/// # Example
/// ```
/// use fibprime_core::fastdoubling::fib_pair;
/// let pair = fib_pair(10);
/// assert_eq!(pair.fk.to_string(), "55");
/// assert_eq!(pair.fk1.to_string(), "89");
/// ```
#[must_use]
pub fn fib_pair(n: u64) -> FibPair {
    let num_bits = 64 - n.leading_zeros();
    let mut pair = FibPair::base();
    for i in (0..num_bits).rev() {
        pair = pair.double();
        if (n >> i) & 1 == 1 {
            pair = pair.advance();
        }
    }
    debug_assert_eq!(pair.k, n);
    pair
}

/// Fast Doubling calculator.
///
/// # Example
/// ```
/// use fibprime_core::calculator::CoreCalculator;
/// use fibprime_core::fastdoubling::FastDoubling;
///
/// let calc = FastDoubling::new();
/// let result = calc.calculate_core(100).unwrap();
/// assert_eq!(result.to_string(), "354224848179261915075");
/// ```
pub struct FastDoubling;

impl FastDoubling {
    /// Create a new `FastDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute F(n).
    #[must_use]
    pub fn fib(n: u64) -> BigUint {
        fib_pair(n).into_value()
    }
}

impl Default for FastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for FastDoubling {
    fn calculate_core(&self, n: u64) -> Result<BigUint, FibError> {
        Ok(Self::fib(n))
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}
