//! Pair-relation detectors.
//!
//! Each detector answers "do two elements at different positions satisfy
//! the relation against `target`?" in a single pass backed by a
//! [`Multiset`](crate::multiset::Multiset). Intermediate values are computed
//! in `i64`; a complement that does not fit `i32` cannot be an element, so
//! that lookup is skipped rather than wrapped.
//!
//! The `bool` functions fail closed: if the multiset cannot allocate they
//! report "no pair". The `try_` forms surface the allocation error instead.

mod difference;
mod naive;
mod product;
mod sum;

pub use difference::{has_pair_difference, try_has_pair_difference};
pub use naive::has_pair_naive;
pub use product::{has_pair_product, try_has_pair_product};
pub use sum::{has_pair_sum, try_has_pair_sum};

use std::fmt;

use crate::multiset::MultisetError;

/// Relation tested between two elements `a` (earlier or later) and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairRelation {
    /// `a + b == target`
    Sum,
    /// `a * b == target`
    Product,
    /// `a - b == target`
    Difference,
}

impl PairRelation {
    pub const ALL: [Self; 3] = [Self::Sum, Self::Product, Self::Difference];

    /// Parse from string (case-insensitive). Accepts symbol aliases.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" | "add" | "+" => Some(Self::Sum),
            "product" | "mul" | "*" => Some(Self::Product),
            "difference" | "diff" | "sub" | "-" => Some(Self::Difference),
            _ => None,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Product => "product",
            Self::Difference => "difference",
        }
    }

    /// Evaluate the relation for one ordered pair using widened arithmetic.
    #[must_use]
    pub fn holds(self, a: i32, b: i32, target: i32) -> bool {
        let (a, b, target) = (i64::from(a), i64::from(b), i64::from(target));
        match self {
            Self::Sum => a + b == target,
            Self::Product => a * b == target,
            Self::Difference => a - b == target,
        }
    }
}

impl fmt::Display for PairRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dispatch to the detector for `relation`.
#[must_use]
pub fn has_pair(relation: PairRelation, arr: Option<&[i32]>, target: i32) -> bool {
    try_has_pair(relation, arr, target).unwrap_or(false)
}

/// Fallible dispatch to the detector for `relation`.
pub fn try_has_pair(
    relation: PairRelation,
    arr: Option<&[i32]>,
    target: i32,
) -> Result<bool, MultisetError> {
    match relation {
        PairRelation::Sum => try_has_pair_sum(arr, target),
        PairRelation::Product => try_has_pair_product(arr, target),
        PairRelation::Difference => try_has_pair_difference(arr, target),
    }
}

/// Narrow a widened intermediate back to the element domain.
#[inline]
fn narrow(value: i64) -> Option<i32> {
    i32::try_from(value).ok()
}
