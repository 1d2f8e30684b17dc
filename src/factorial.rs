// Copyright 2026 Martin Pool

//! The function under test: factorial over u64 with wrapping arithmetic.

/// Compute `n!` as the product of 1..=n, with `0! == 1` (the empty product).
///
/// The accumulator is a u64 and multiplication wraps: the largest exact
/// result is `20!`; from `n = 21` the returned value is `n!` modulo 2^64,
/// in debug and release builds alike. No range check is performed and no
/// error is possible; callers that need exact results must keep `n <= 20`.
pub fn factorial(n: u64) -> u64 {
    let mut product: u64 = 1;
    for i in 1..=n {
        product = product.wrapping_mul(i);
    }
    product
}
