//! # aquant-core
//!
//! Safe Rust implementations of the aquant teaching library.
//!
//! The centrepiece is [`pair`]: three linear-time detectors deciding whether
//! two positionally distinct elements of an `i32` slice satisfy a sum,
//! product or difference relation. They are built on the counting
//! [`multiset::Multiset`]. The remaining modules are the array, string,
//! number-parsing and console-input helpers the detectors ship with, plus
//! seeded random numbers and a stopwatch.
//! No `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod array;
pub mod conversion;
pub mod input;
pub mod multiset;
pub mod pair;
pub mod random;
pub mod string;
pub mod timer;

pub use multiset::{Multiset, MultisetError};
pub use timer::Timer;
pub use pair::{
    PairRelation, has_pair, has_pair_difference, has_pair_naive, has_pair_product, has_pair_sum,
    try_has_pair_difference, try_has_pair_product, try_has_pair_sum,
};
