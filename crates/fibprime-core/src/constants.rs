//! Constants for the Fibonacci fast path, prime table bounds and exit codes.

/// Default bound for the precomputed prime table (primes strictly below it).
pub const DEFAULT_TOP_N: u64 = 1_000;

/// Default upper bound for the on-the-fly trial-division sweep.
pub const DEFAULT_MAX_N: u64 = 100_000;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93 (fast path).
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// An index argument was negative or not an integer.
    pub const ERROR_INPUT: i32 = 1;
    /// Invalid configuration (prime table bounds).
    pub const ERROR_CONFIG: i32 = 4;
}
