//! In-process preference backend
//!
//! Used as a test double and for ephemeral stores. Read and commit failures
//! can be switched on to exercise callers' error paths.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::error::{AuthStateError, AuthStateResult};

use super::backend::PreferenceBackend;
use super::value::PrimitiveValue;

#[derive(Default)]
pub struct MemoryBackend {
    values: RwLock<BTreeMap<String, PrimitiveValue>>,
    fail_commits: AtomicBool,
    fail_reads: AtomicBool,
    commits: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with raw primitive values
    pub fn with_values<I, K>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, PrimitiveValue)>,
        K: Into<String>,
    {
        Self {
            values: RwLock::new(values.into_iter().map(|(k, v)| (k.into(), v)).collect()),
            ..Self::default()
        }
    }

    /// Make every subsequent commit fail (or succeed again)
    pub fn set_fail_commits(&self, fail: bool) {
        self.fail_commits.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `get` fail (or succeed again)
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Number of successful commits so far
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }
}

impl PreferenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> AuthStateResult<Option<PrimitiveValue>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AuthStateError::Storage(format!("read of '{}' refused", key)));
        }

        let values = self
            .values
            .read()
            .map_err(|e| AuthStateError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(values.get(key).cloned())
    }

    fn commit(&self, key: &str, value: Option<PrimitiveValue>) -> AuthStateResult<()> {
        if self.fail_commits.load(Ordering::SeqCst) {
            return Err(AuthStateError::commit_failed(key, "store refused the write"));
        }

        let mut values = self.values.write().map_err(|e| {
            AuthStateError::commit_failed(key, format!("Failed to acquire write lock: {}", e))
        })?;
        match value {
            Some(v) => {
                values.insert(key.to_string(), v);
            }
            None => {
                values.remove(key);
            }
        }
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn entries(&self) -> AuthStateResult<Vec<(String, PrimitiveValue)>> {
        let values = self
            .values
            .read()
            .map_err(|e| AuthStateError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
