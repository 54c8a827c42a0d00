//! Pair-sum detection: `a + b == target`.

use super::narrow;
use crate::multiset::{Multiset, MultisetError};

/// Returns true if two elements at different positions sum to `target`.
///
/// Absent slices and slices with fewer than two elements have no pair.
/// Allocation failure reports `false`.
#[must_use]
pub fn has_pair_sum(arr: Option<&[i32]>, target: i32) -> bool {
    try_has_pair_sum(arr, target).unwrap_or(false)
}

/// Fallible form of [`has_pair_sum`].
pub fn try_has_pair_sum(arr: Option<&[i32]>, target: i32) -> Result<bool, MultisetError> {
    let Some(arr) = arr else {
        return Ok(false);
    };
    if arr.len() < 2 {
        return Ok(false);
    }

    let mut seen = Multiset::with_table_size(arr.len())?;
    for &x in arr {
        // Only earlier positions are in `seen`, so a complement equal to `x`
        // can only match a genuine duplicate.
        if let Some(complement) = narrow(i64::from(target) - i64::from(x))
            && seen.contains(complement)
        {
            return Ok(true);
        }
        seen.insert(x)?;
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_edge_pair() {
        assert!(has_pair_sum(Some(&[1, 4, 5, 7, 9]), 10));
        assert!(has_pair_sum(Some(&[1, 4, 5, 7, 9]), 9));
        assert!(!has_pair_sum(Some(&[1, 4, 5, 7, 9]), 20));
    }

    #[test]
    fn duplicate_pairs_with_itself_only_when_repeated() {
        assert!(has_pair_sum(Some(&[5, 5]), 10));
        assert!(!has_pair_sum(Some(&[5]), 10));
        assert!(!has_pair_sum(Some(&[5, 1]), 10));
    }

    #[test]
    fn absent_and_short_inputs() {
        assert!(!has_pair_sum(None, 10));
        assert!(!has_pair_sum(Some(&[]), 0));
        assert!(!has_pair_sum(Some(&[42]), 84));
    }

    #[test]
    fn extremes_do_not_wrap() {
        // MAX + 1 would wrap to MIN.
        assert!(!has_pair_sum(Some(&[i32::MAX, 1]), i32::MIN));
        assert!(has_pair_sum(Some(&[i32::MAX, i32::MIN]), -1));
        assert!(!has_pair_sum(Some(&[i32::MIN, i32::MIN]), 0));
        assert!(has_pair_sum(Some(&[i32::MAX, -1, 0]), i32::MAX - 1));
    }

    #[test]
    fn try_form_reports_success() {
        assert!(try_has_pair_sum(Some(&[2, 8]), 10).unwrap());
        assert!(!try_has_pair_sum(None, 10).unwrap());
    }
}
