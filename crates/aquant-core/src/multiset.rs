//! Counting multiset over `i32` keys.
//!
//! Maps each key to the number of times it was inserted. The pair detectors
//! build one of these per call, sized to the input slice, and consult it for
//! values seen at *earlier* positions.
//!
//! Storage is a `HashMap<i32, usize>` with the default hasher. Capacity is
//! requested with `try_reserve`, so running out of memory is reported as
//! [`MultisetError::AllocationFailed`] instead of aborting the process.

use std::collections::{HashMap, TryReserveError};

use thiserror::Error;

/// Failure while growing a [`Multiset`].
#[derive(Debug, Error)]
pub enum MultisetError {
    #[error("multiset allocation failed for {requested} key slot(s): {source}")]
    AllocationFailed {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Associative container from `i32` key to occurrence count.
///
/// Every stored count is at least 1; a key that was never inserted is absent.
#[derive(Debug, Clone, Default)]
pub struct Multiset {
    counts: HashMap<i32, usize>,
}

impl Multiset {
    /// Create a multiset with room for `table_size` distinct keys (minimum 1).
    pub fn with_table_size(table_size: usize) -> Result<Self, MultisetError> {
        let table_size = table_size.max(1);
        let mut counts = HashMap::new();
        counts
            .try_reserve(table_size)
            .map_err(|source| MultisetError::AllocationFailed {
                requested: table_size,
                source,
            })?;
        Ok(Self { counts })
    }

    /// Insert `key`, incrementing its count if already present.
    pub fn insert(&mut self, key: i32) -> Result<(), MultisetError> {
        if let Some(count) = self.counts.get_mut(&key) {
            *count += 1;
        } else {
            self.counts
                .try_reserve(1)
                .map_err(|source| MultisetError::AllocationFailed {
                    requested: 1,
                    source,
                })?;
            self.counts.insert(key, 1);
        }
        Ok(())
    }

    /// Occurrence count of `key`, or `None` if it was never inserted.
    #[must_use]
    pub fn search(&self, key: i32) -> Option<usize> {
        self.counts.get(&key).copied()
    }

    /// Returns true if `key` has been inserted at least once.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: i32) -> bool {
        self.counts.contains_key(&key)
    }

    /// Returns true if nothing has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }
}
