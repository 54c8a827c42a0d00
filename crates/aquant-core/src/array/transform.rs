//! Sorting, reversal, de-duplication, concatenation and display.

use std::fmt::Display;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::multiset::{Multiset, MultisetError};

/// Sort ascending in place.
pub fn sort(arr: &mut [i32]) {
    arr.sort_unstable();
}

/// Sort ascending in place using IEEE total order (NaNs last).
pub fn sort_f32(arr: &mut [f32]) {
    arr.sort_unstable_by(f32::total_cmp);
}

pub fn sort_f64(arr: &mut [f64]) {
    arr.sort_unstable_by(f64::total_cmp);
}

pub fn reverse<T>(arr: &mut [T]) {
    arr.reverse();
}

/// Uniform in-place permutation driven by `rng`.
pub fn shuffle<T, R>(arr: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    arr.shuffle(rng);
}

/// Distinct values in first-occurrence order.
pub fn unique(arr: &[i32]) -> Result<Vec<i32>, MultisetError> {
    let mut seen = Multiset::with_table_size(arr.len())?;
    let mut out = Vec::new();
    for &x in arr {
        if !seen.contains(x) {
            out.push(x);
        }
        seen.insert(x)?;
    }
    Ok(out)
}

/// New vector holding `a` followed by `b`.
#[must_use]
pub fn concat<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

/// Render as `[a, b, c]`.
#[must_use]
pub fn format_array<T: Display>(arr: &[T]) -> String {
    let items: Vec<String> = arr.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
