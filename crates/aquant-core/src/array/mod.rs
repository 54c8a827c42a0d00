//! Array helpers over slices.
//!
//! Reductions return `None` where the C functions reported failure for an
//! empty input; transforms work in place or return fresh `Vec`s.

pub mod reduce;
pub mod transform;

pub use reduce::{
    average, average_f32, average_f64, contains, count_occurrence, index_of, max, min, sum,
    sum_f32, sum_f64,
};
pub use transform::{
    concat, format_array, reverse, shuffle, sort, sort_f32, sort_f64, unique,
};
