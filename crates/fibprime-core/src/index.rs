//! Parsing of Fibonacci indices from text arguments.

use crate::calculator::FibError;

/// Parse a Fibonacci index.
///
/// Accepts a non-negative decimal integer, with surrounding whitespace and an
/// optional leading `+`. Negative values and anything that is not an integer
/// are rejected with [`FibError::InvalidInput`].
///
/// # Example
/// ```
/// use fibprime_core::parse_index;
/// assert_eq!(parse_index("42"), Ok(42));
/// assert!(parse_index("-3").is_err());
/// ```
pub fn parse_index(s: &str) -> Result<u64, FibError> {
    let s = s.trim();
    if let Some(rest) = s.strip_prefix('-') {
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FibError::InvalidInput(format!("negative index: {s}")));
        }
    }
    s.parse::<u64>()
        .map_err(|e| FibError::InvalidInput(format!("not a non-negative integer: {s:?} ({e})")))
}
