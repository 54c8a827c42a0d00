//! Shared input generation for the aquant benchmarks.

use aquant_core::random::{random_int, seeded};

/// Seeded stream of `len` values in `-radius..=radius`.
#[must_use]
pub fn pseudo_random_i32(len: usize, seed: u64, radius: i32) -> Vec<i32> {
    let bound = radius.saturating_abs();
    let mut rng = seeded(seed);
    (0..len)
        .filter_map(|_| random_int(&mut rng, -bound, bound))
        .collect()
}

/// Input where no two elements sum to `1`: all multiples of three.
/// Forces the detectors through the whole slice.
#[must_use]
pub fn worst_case_sum_input(len: usize) -> Vec<i32> {
    (0..len)
        .map(|i| i32::try_from(i).unwrap_or(i32::MAX / 3).saturating_mul(3))
        .collect()
}
