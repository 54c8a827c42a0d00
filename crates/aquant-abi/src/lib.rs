//! # aquant-abi
//!
//! `extern "C"` boundary for the aquant library.
//!
//! Exposes the C library signatures (`array_has_pair_sum`,
//! `array_max`, `sort_array`, ...) and forwards to the safe implementations
//! in `aquant-core`.
//!
//! ```text
//! C caller -> ABI entry (this crate) -> NULL/size adaptation -> core impl -> return
//! ```
//!
//! A `NULL` array pointer is a valid "no array" signal, never undefined
//! behaviour. A non-null pointer must be valid for `size` reads (or writes,
//! for in-place functions).

// The pointer contract above applies to every export.
#![allow(clippy::missing_safety_doc)]

pub mod array_abi;
pub mod pair_abi;
pub mod string_abi;
mod util;
