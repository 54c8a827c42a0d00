//! String helpers.
//!
//! All classification and case mapping is ASCII-only, independent of locale.
//! Functions that accepted `NULL` in the C library take `Option<&str>`.

pub mod classify;
pub mod list;
pub mod ops;
pub mod split;

pub use classify::{is_alnum, is_alpha, is_digit, is_empty, is_int, is_space};
pub use list::{count_occurrence_string, find_string, max_string, min_string, sort_strings};
pub use ops::{
    concat, ends_with, find_char, find_substring, replace_char, starts_with, substring, to_double,
    to_float, to_lower, to_upper, trim,
};
pub use split::{join, split, tokenize};
