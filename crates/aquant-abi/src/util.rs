//! Shared internal utilities for ABI adapters.

use std::borrow::Cow;
use std::ffi::CStr;

use libc::{c_char, c_int, size_t};

/// View a C `int` array as a slice, or `None` for a NULL pointer.
///
/// # Safety
///
/// A non-null `ptr` must be valid for `len` reads for the returned lifetime.
pub unsafe fn int_slice<'a>(ptr: *const c_int, len: size_t) -> Option<&'a [i32]> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null and caller-guaranteed valid for `len` elements.
    Some(unsafe { std::slice::from_raw_parts(ptr, len) })
}

/// Mutable variant of [`int_slice`].
///
/// # Safety
///
/// A non-null `ptr` must be valid for `len` reads and writes and not aliased.
pub unsafe fn int_slice_mut<'a>(ptr: *mut c_int, len: size_t) -> Option<&'a mut [i32]> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null, caller-guaranteed valid and exclusive for `len` elements.
    Some(unsafe { std::slice::from_raw_parts_mut(ptr, len) })
}

/// Decode a NUL-terminated C string, replacing invalid UTF-8.
///
/// # Safety
///
/// A non-null `ptr` must point to a NUL-terminated string.
pub unsafe fn c_str_lossy<'a>(ptr: *const c_char) -> Option<Cow<'a, str>> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null and caller-guaranteed NUL-terminated.
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy())
}

/// C-style search result: the index, or -1 when nothing was found or the
/// index does not fit a `c_int`.
pub fn index_or_minus_one(index: Option<usize>) -> c_int {
    index.and_then(|i| c_int::try_from(i).ok()).unwrap_or(-1)
}
