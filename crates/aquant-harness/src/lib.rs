//! # aquant-harness
//!
//! Fixture-driven verification of the aquant library.
//!
//! A fixture file lists function calls with their inputs and expected
//! outputs. The [`TestRunner`] executes each case against `aquant-core`,
//! compares outputs as strings, and the results roll up into a
//! [`ConformanceReport`]. Runs can emit structured JSONL logs.

pub mod config;
pub mod diff;
pub mod error;
pub mod execute;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
