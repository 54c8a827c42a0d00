//! Error type shared by the harness library and CLI.

use aquant_core::MultisetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported function: {0}")]
    UnsupportedFunction(String),
    #[error("invalid input for {function}: {reason}")]
    InvalidInput { function: String, reason: String },
    #[error("unknown relation: {0}")]
    UnknownRelation(String),
    #[error(transparent)]
    Multiset(#[from] MultisetError),
}

impl HarnessError {
    pub(crate) fn invalid(function: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            function: function.to_string(),
            reason: reason.into(),
        }
    }
}
