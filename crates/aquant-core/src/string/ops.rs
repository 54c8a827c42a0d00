//! Trimming, slicing, searching, case mapping and float conversion.

use crate::conversion::{is_space_byte, parse_double, parse_float};

/// Strip leading and trailing C-locale whitespace.
#[must_use]
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii() && is_space_byte(c as u8))
}

/// Concatenate two optional strings. An absent side counts as empty; both
/// absent yields `None`.
#[must_use]
pub fn concat(a: Option<&str>, b: Option<&str>) -> Option<String> {
    match (a, b) {
        (None, None) => None,
        (a, b) => Some(format!("{}{}", a.unwrap_or_default(), b.unwrap_or_default())),
    }
}

/// Up to `len` characters starting at character `start`.
///
/// A start past the end yields an empty string; `len` is clamped.
#[must_use]
pub fn substring(s: &str, start: usize, len: usize) -> String {
    s.chars().skip(start).take(len).collect()
}

/// Byte index of the first `c`.
#[must_use]
pub fn find_char(s: &str, c: char) -> Option<usize> {
    s.find(c)
}

/// Byte index of the first occurrence of `needle`; an empty needle is at 0.
#[must_use]
pub fn find_substring(s: &str, needle: &str) -> Option<usize> {
    s.find(needle)
}

#[must_use]
pub fn replace_char(s: &str, from: char, to: char) -> String {
    s.chars().map(|c| if c == from { to } else { c }).collect()
}

#[must_use]
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

#[must_use]
pub fn to_upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

#[must_use]
pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

#[must_use]
pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

/// Whole-string `f32` conversion; `None` if `s` is not a single number.
#[must_use]
pub fn to_float(s: &str) -> Option<f32> {
    parse_float(s).ok()
}

#[must_use]
pub fn to_double(s: &str) -> Option<f64> {
    parse_double(s).ok()
}
