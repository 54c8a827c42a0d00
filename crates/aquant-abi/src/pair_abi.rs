//! ABI layer for the pair-relation detectors.
//!
//! `arr == NULL` means "no array" and answers `false`. Allocation failure
//! inside the detector also answers `false`.

use aquant_core::pair;
use libc::{c_int, size_t};

use crate::util::int_slice;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn array_has_pair_sum(arr: *const c_int, size: size_t, target: c_int) -> bool {
    // SAFETY: caller contract for non-null `arr`.
    let arr = unsafe { int_slice(arr, size) };
    pair::has_pair_sum(arr, target)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn array_has_pair_product(
    arr: *const c_int,
    size: size_t,
    target: c_int,
) -> bool {
    // SAFETY: caller contract for non-null `arr`.
    let arr = unsafe { int_slice(arr, size) };
    pair::has_pair_product(arr, target)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn array_has_pair_difference(
    arr: *const c_int,
    size: size_t,
    target: c_int,
) -> bool {
    // SAFETY: caller contract for non-null `arr`.
    let arr = unsafe { int_slice(arr, size) };
    pair::has_pair_difference(arr, target)
}
