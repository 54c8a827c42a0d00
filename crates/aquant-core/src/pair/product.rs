//! Pair-product detection: `a * b == target`.
//!
//! Zeros are counted outside the multiset: `0 * k == 0` for any `k`, so a
//! zero target only needs a zero plus any other element. Non-zero targets are
//! searched by division, which never overflows once widened to `i64`.

use super::narrow;
use crate::multiset::{Multiset, MultisetError};

/// Returns true if two elements at different positions multiply to `target`.
///
/// Absent slices and slices with fewer than two elements have no pair.
/// Allocation failure reports `false`.
#[must_use]
pub fn has_pair_product(arr: Option<&[i32]>, target: i32) -> bool {
    try_has_pair_product(arr, target).unwrap_or(false)
}

/// Fallible form of [`has_pair_product`].
pub fn try_has_pair_product(arr: Option<&[i32]>, target: i32) -> Result<bool, MultisetError> {
    let Some(arr) = arr else {
        return Ok(false);
    };
    if arr.len() < 2 {
        return Ok(false);
    }

    let mut non_zero = Multiset::with_table_size(arr.len())?;
    let mut zeros = 0usize;
    for &x in arr {
        if x == 0 {
            zeros += 1;
        } else {
            non_zero.insert(x)?;
        }
    }

    if target == 0 {
        return Ok((zeros >= 1 && !non_zero.is_empty()) || zeros >= 2);
    }

    let wide_target = i64::from(target);
    for &x in arr {
        if x == 0 {
            continue;
        }
        let wide_x = i64::from(x);
        if wide_target % wide_x != 0 {
            continue;
        }
        let Some(needed) = narrow(wide_target / wide_x) else {
            continue;
        };
        match non_zero.search(needed) {
            // `x` itself is one of the counted occurrences.
            Some(count) if needed == x => {
                if count > 1 {
                    return Ok(true);
                }
            }
            Some(_) => return Ok(true),
            None => {}
        }
    }
    Ok(false)
}
