#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibprime_core::primality::PrimalityChecker;
use fibprime_core::primes::{is_prime_candidate, PrimeTable};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let table = PrimeTable::shared();
    // Below max_n^2 the bounded check must be exact
    let bound = table.max_n() * table.max_n();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[..8]);
    let m = u64::from_le_bytes(bytes) % bound;

    let checker = PrimalityChecker::new(table);
    assert_eq!(
        checker.is_probably_prime(&BigUint::from(m)),
        is_prime_candidate(m),
        "checker disagrees with trial division at m={m}"
    );
});
