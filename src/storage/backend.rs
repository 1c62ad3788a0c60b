//! The durable key-value collaborator consumed by the typed store

use std::sync::Arc;

use crate::error::AuthStateResult;

use super::value::PrimitiveValue;

/// A durable mapping from string keys to primitive values
///
/// Implementations must make `commit` durable before returning, and a `get`
/// issued after a successful `commit` on the same backend must observe the
/// committed value. No cross-key atomicity is required; concurrent commits
/// to the same key are last-write-wins.
pub trait PreferenceBackend: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> AuthStateResult<Option<PrimitiveValue>>;

    /// Durably store `value` under `key`; `None` removes the key
    ///
    /// Fails with `AuthStateError::CommitFailure` when the write is refused.
    fn commit(&self, key: &str, value: Option<PrimitiveValue>) -> AuthStateResult<()>;

    /// All stored entries, ordered by key
    fn entries(&self) -> AuthStateResult<Vec<(String, PrimitiveValue)>>;

    /// Discard any cached state and re-read from durable storage
    fn reload(&self) -> AuthStateResult<()> {
        Ok(())
    }
}

impl<B: PreferenceBackend + ?Sized> PreferenceBackend for Arc<B> {
    fn get(&self, key: &str) -> AuthStateResult<Option<PrimitiveValue>> {
        (**self).get(key)
    }

    fn commit(&self, key: &str, value: Option<PrimitiveValue>) -> AuthStateResult<()> {
        (**self).commit(key, value)
    }

    fn entries(&self) -> AuthStateResult<Vec<(String, PrimitiveValue)>> {
        (**self).entries()
    }

    fn reload(&self) -> AuthStateResult<()> {
        (**self).reload()
    }
}
