//! ABI layer for string-array search.

use std::borrow::Cow;

use aquant_core::string;
use libc::{c_char, c_int, size_t};

use crate::util::{c_str_lossy, index_or_minus_one};

/// Index of the first entry equal to `target_name`, or -1.
///
/// NULL entries match a NULL target. A NULL `names` array finds nothing.
/// A match at an index above `INT_MAX` cannot be represented and is also
/// reported as -1.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn find_string(
    names: *const *const c_char,
    size: size_t,
    target_name: *const c_char,
) -> c_int {
    if names.is_null() {
        return -1;
    }
    // SAFETY: non-null and caller-guaranteed valid for `size` pointers.
    let raw = unsafe { std::slice::from_raw_parts(names, size) };
    // SAFETY: each non-null entry and the target are NUL-terminated strings.
    let owned: Vec<Option<Cow<'_, str>>> =
        raw.iter().map(|&p| unsafe { c_str_lossy(p) }).collect();
    let target = unsafe { c_str_lossy(target_name) };

    let views: Vec<Option<&str>> = owned.iter().map(|s| s.as_deref()).collect();
    index_or_minus_one(string::find_string(&views, target.as_deref()))
}
