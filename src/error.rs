//! Custom error types for the authenticator state crate
//!
//! Every failure a caller can observe is one variant of `AuthStateError`.
//! Errors are surfaced to the immediate caller; nothing in this crate retries.

use thiserror::Error;

/// The main error type for preference and scheduling operations
#[derive(Error, Debug)]
pub enum AuthStateError {
    /// A stored location reference could not be parsed as a URI
    #[error("Malformed reference in '{key}': {value:?} ({reason})")]
    MalformedReference {
        key: String,
        value: String,
        reason: String,
    },

    /// A stored value is not valid for the accessor reading it
    #[error("Corrupt setting '{key}': {reason}")]
    CorruptSetting { key: String, reason: String },

    /// The durable store refused or failed a write
    #[error("Failed to commit '{key}': {reason}")]
    CommitFailure { key: String, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors outside of a commit (loading, locking)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AuthStateError {
    /// Create a corrupt-setting error for `key`
    pub fn corrupt(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CorruptSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a commit-failure error for `key`
    pub fn commit_failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CommitFailure {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a commit failure
    pub fn is_commit_failure(&self) -> bool {
        matches!(self, Self::CommitFailure { .. })
    }

    /// Check if this error means stored data is unreadable
    pub fn is_corrupt(&self) -> bool {
        matches!(
            self,
            Self::CorruptSetting { .. } | Self::MalformedReference { .. }
        )
    }
}

impl From<std::io::Error> for AuthStateError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AuthStateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for authenticator state operations
pub type AuthStateResult<T> = Result<T, AuthStateError>;
