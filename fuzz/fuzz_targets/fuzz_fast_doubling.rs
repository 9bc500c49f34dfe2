#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibprime_core::calculator::{Calculator, FibCalculator};
use fibprime_core::fastdoubling::fib_pair;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Use first 4 bytes as k, capped at 20000 for speed
    let k = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 20_000;

    let calc = FibCalculator::default();
    let fk = calc.calculate(k).unwrap();
    let fk1 = calc.calculate(k + 1).unwrap();

    let pair = fib_pair(2 * k);
    let two_fk1: BigUint = &fk1 * 2u32;
    assert_eq!(pair.fk, &fk * (two_fk1 - &fk), "F(2k) identity failed at k={k}");
    assert_eq!(pair.fk1, &fk * &fk + &fk1 * &fk1, "F(2k+1) identity failed at k={k}");
});
