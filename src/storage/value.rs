//! Primitive values understood by the durable store

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value as the underlying store holds it
///
/// Richer types (enums, tri-state booleans, URIs) are encoded onto these
/// three primitives by `TypedSettingsStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PrimitiveValue {
    Bool(bool),
    String(String),
    Long(i64),
}

impl PrimitiveValue {
    /// Name of the primitive kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::Long(_) => "int",
        }
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::String(s) => write!(f, "{:?}", s),
            Self::Long(n) => write!(f, "{}", n),
        }
    }
}

impl From<bool> for PrimitiveValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PrimitiveValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
