//! Quadratic reference detector.
//!
//! Checks every ordered pair of distinct positions. Slow, but trivially
//! correct, so tests use it as the oracle and benchmarks as the baseline.

use super::PairRelation;

/// Returns true if some `i != j` satisfies `relation.holds(arr[i], arr[j], target)`.
///
/// Preconditions match the fast detectors: an absent slice never matches,
/// and neither does a slice with fewer than two elements.
#[must_use]
pub fn has_pair_naive(relation: PairRelation, arr: Option<&[i32]>, target: i32) -> bool {
    let Some(arr) = arr else {
        return false;
    };
    if arr.len() < 2 {
        return false;
    }

    for (i, &a) in arr.iter().enumerate() {
        for (j, &b) in arr.iter().enumerate() {
            if i != j && relation.holds(a, b, target) {
                return true;
            }
        }
    }
    false
}
