//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::PrimitiveValue;

/// What a commit did to its key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A value was written
    Set,
    /// The key was removed
    Clear,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Set => write!(f, "SET"),
            Operation::Clear => write!(f, "CLEAR"),
        }
    }
}

/// A single committed preference change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the commit completed (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Preference key that changed
    pub key: String,

    /// Stored primitive before the commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<PrimitiveValue>,

    /// Stored primitive after the commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<PrimitiveValue>,
}

impl AuditEntry {
    /// Build an entry for a commit that moved `key` from `before` to `after`
    pub fn commit(
        key: impl Into<String>,
        before: Option<PrimitiveValue>,
        after: Option<PrimitiveValue>,
    ) -> Self {
        let operation = if after.is_some() {
            Operation::Set
        } else {
            Operation::Clear
        };
        Self {
            timestamp: Utc::now(),
            operation,
            key: key.into(),
            before,
            after,
        }
    }

    /// One-line human-readable summary
    pub fn format_human_readable(&self) -> String {
        let show = |v: &Option<PrimitiveValue>| match v {
            Some(v) => v.to_string(),
            None => "-".to_string(),
        };
        format!(
            "{} {} {}: {} -> {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.key,
            show(&self.before),
            show(&self.after)
        )
    }
}
