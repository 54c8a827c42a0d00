//! Pair-difference detection: `a - b == target` for some ordering of the pair.

use super::narrow;
use crate::multiset::{Multiset, MultisetError};

/// Returns true if two elements at different positions differ by `target`.
///
/// Both orders are checked against every earlier element, so the answer for
/// `target` and `-target` is the same. Only an absent slice is rejected up
/// front; shorter slices simply never find a pair. Allocation failure reports
/// `false`.
#[must_use]
pub fn has_pair_difference(arr: Option<&[i32]>, target: i32) -> bool {
    try_has_pair_difference(arr, target).unwrap_or(false)
}

/// Fallible form of [`has_pair_difference`].
pub fn try_has_pair_difference(arr: Option<&[i32]>, target: i32) -> Result<bool, MultisetError> {
    let Some(arr) = arr else {
        return Ok(false);
    };

    let mut seen = Multiset::with_table_size(arr.len())?;
    let wide_target = i64::from(target);
    for &x in arr {
        let wide_x = i64::from(x);

        // x - earlier == target. With a zero target this is a duplicate check.
        if let Some(below) = narrow(wide_x - wide_target)
            && seen.contains(below)
        {
            return Ok(true);
        }

        // earlier - x == target
        if target != 0
            && let Some(above) = narrow(wide_x + wide_target)
            && seen.contains(above)
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
    fn spaced_values() {
        let arr = [1, 5, 9, 10];
        assert!(has_pair_difference(Some(&arr), 4));
        assert!(has_pair_difference(Some(&arr), -4));
        assert!(has_pair_difference(Some(&arr), 1));
        assert!(!has_pair_difference(Some(&arr), 2));
    }

    #[test]
    fn zero_target_requires_duplicate() {
        assert!(!has_pair_difference(Some(&[3, 4, 5]), 0));
        assert!(has_pair_difference(Some(&[5, -2, 8, 0, 9, 1, 5]), 0));
    }

    #[test]
    fn short_inputs_are_allowed_but_never_match() {
        assert!(!has_pair_difference(None, 1));
        assert!(!has_pair_difference(Some(&[]), 0));
        assert!(!has_pair_difference(Some(&[7]), 0));
    }

    #[test]
    fn extremes_do_not_wrap() {
        // MIN - MAX wraps to 1 in 32 bits.
        assert!(!has_pair_difference(Some(&[i32::MIN, i32::MAX]), 1));
        assert!(has_pair_difference(Some(&[i32::MAX, 0]), i32::MAX));
        assert!(has_pair_difference(Some(&[0, i32::MIN]), i32::MIN));
        assert!(has_pair_difference(Some(&[-1, i32::MAX]), i32::MIN));
    }
}
