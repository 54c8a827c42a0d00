//! Bounded random numbers.
//!
//! Every helper takes the generator explicitly so callers choose between a
//! reproducible [`seeded`] stream and an OS-seeded one from [`from_os`].
//! Ranges are inclusive at both ends. An inverted or non-finite range yields
//! `None` instead of panicking.

use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic generator for tests and reproducible runs.
#[must_use]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the operating system.
#[must_use]
pub fn from_os() -> StdRng {
    StdRng::from_os_rng()
}

/// Uniform integer in `min..=max`.
pub fn random_int<R>(rng: &mut R, min: i32, max: i32) -> Option<i32>
where
    R: Rng + ?Sized,
{
    Uniform::new_inclusive(min, max).ok().map(|d| d.sample(rng))
}

/// Uniform `f32` in `min..=max`.
pub fn random_f32<R>(rng: &mut R, min: f32, max: f32) -> Option<f32>
where
    R: Rng + ?Sized,
{
    Uniform::new_inclusive(min, max).ok().map(|d| d.sample(rng))
}

/// Uniform `f64` in `min..=max`.
pub fn random_f64<R>(rng: &mut R, min: f64, max: f64) -> Option<f64>
where
    R: Rng + ?Sized,
{
    Uniform::new_inclusive(min, max).ok().map(|d| d.sample(rng))
}
