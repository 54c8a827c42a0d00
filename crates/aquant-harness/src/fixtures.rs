//! Fixture loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;
use crate::report::sha256_hex;

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    pub name: String,
    /// Library function under test, e.g. `has_pair_sum`.
    pub function: String,
    /// Input parameters, shaped per function.
    pub inputs: serde_json::Value,
    /// Expected output, compared as a string.
    pub expected_output: String,
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    pub version: String,
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        Ok(Self::load(path)?.0)
    }

    /// Load a fixture file along with the SHA-256 hex digest of its bytes.
    pub fn load(path: &Path) -> Result<(Self, String), HarnessError> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok((set, sha256_hex(content.as_bytes())))
    }
}
