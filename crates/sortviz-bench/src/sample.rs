//! Random input generation.
//!
//! Uses a seeded ChaCha8 RNG for reproducible sweeps and benchmarks:
//! identical seeds produce identical arrays on every platform.

use std::ops::RangeInclusive;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Value range of the comparison sweep's generated arrays.
pub const DEFAULT_INT_RANGE: RangeInclusive<i64> = 0..=10_000;

/// Float counterpart of [`DEFAULT_INT_RANGE`].
pub const DEFAULT_FLOAT_RANGE: RangeInclusive<f64> = 0.0..=10_000.0;

/// Value range of [`random_array`], the general-purpose sample helper.
pub const SAMPLE_RANGE: RangeInclusive<i64> = 0..=100_000;

/// Deterministic RNG for `seed`.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `len` integers drawn uniformly from `range` (both ends inclusive).
///
/// # Panics
///
/// Panics if `range` is empty (`start > end`).
pub fn random_ints<R: Rng + ?Sized>(
    len: usize,
    range: RangeInclusive<i64>,
    rng: &mut R,
) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(range.clone())).collect()
}

/// `len` floats drawn uniformly from `range` (both ends inclusive).
///
/// # Panics
///
/// Panics if `range` is empty, either bound is not finite, or
/// `end - start` overflows to infinity.
pub fn random_floats<R: Rng + ?Sized>(
    len: usize,
    range: RangeInclusive<f64>,
    rng: &mut R,
) -> Vec<f64> {
    (0..len).map(|_| rng.random_range(range.clone())).collect()
}

/// `len` integers from [`SAMPLE_RANGE`].
pub fn random_array<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<i64> {
    random_ints(len, SAMPLE_RANGE, rng)
}
