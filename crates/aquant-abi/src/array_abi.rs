//! ABI layer for array reductions, sorting and printing.

use std::io::Write;

use aquant_core::array;
use libc::{c_int, c_longlong, size_t};

use crate::util::{int_slice, int_slice_mut};

/// Write `value` through `out` if both are available.
///
/// # Safety
///
/// A non-null `out` must be valid for one write.
unsafe fn store<T>(out: *mut T, value: Option<T>) -> bool {
    match value {
        Some(v) if !out.is_null() => {
            // SAFETY: non-null and caller-guaranteed writable.
            unsafe { out.write(v) };
            true
        }
        _ => false,
    }
}

/// Largest element into `*max_val`. False for NULL array, NULL out, or size 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn array_max(arr: *const c_int, size: size_t, max_val: *mut c_int) -> bool {
    if max_val.is_null() {
        return false;
    }
    // SAFETY: caller contract for non-null `arr`.
    let arr = unsafe { int_slice(arr, size) };
    // SAFETY: `max_val` checked non-null above.
    unsafe { store(max_val, arr.and_then(array::max)) }
}

/// Smallest element into `*min_val`. False for NULL array, NULL out, or size 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn array_min(arr: *const c_int, size: size_t, min_val: *mut c_int) -> bool {
    if min_val.is_null() {
        return false;
    }
    // SAFETY: caller contract for non-null `arr`.
    let arr = unsafe { int_slice(arr, size) };
    // SAFETY: `min_val` checked non-null above.
    unsafe { store(min_val, arr.and_then(array::min)) }
}

/// Sum into `*sum`. A NULL array is only accepted with `size == 0` (sum 0).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn array_sum(arr: *const c_int, size: size_t, sum: *mut c_longlong) -> bool {
    if sum.is_null() {
        return false;
    }
    // SAFETY: caller contract for non-null `arr`.
    let total = match unsafe { int_slice(arr, size) } {
        Some(arr) => Some(array::sum(arr)),
        None if size == 0 => Some(0),
        None => None,
    };
    // SAFETY: `sum` checked non-null above.
    unsafe { store(sum, total) }
}

/// Sort ascending in place. NULL or fewer than two elements is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sort_array(arr: *mut c_int, size: size_t) {
    // SAFETY: caller contract for non-null `arr`.
    if let Some(arr) = unsafe { int_slice_mut(arr, size) } {
        array::sort(arr);
    }
}

/// Print `[a, b, c]` and a newline to stdout. NULL prints `[]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn print_array(arr: *const c_int, size: size_t) {
    // SAFETY: caller contract for non-null `arr`.
    let arr = unsafe { int_slice(arr, size) }.unwrap_or_default();
    let mut out = std::io::stdout().lock();
    // Nothing useful to report to a void C caller on a closed stdout.
    let _ = writeln!(out, "{}", array::format_array(arr));
}
