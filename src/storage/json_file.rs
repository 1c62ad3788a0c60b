//! JSON-file preference backend
//!
//! Holds the whole key map in one JSON file. A commit takes an exclusive
//! lock on a sidecar `.lock` file, re-reads the file, applies only its own
//! key and rewrites the file atomically. Writers to different keys, in this
//! process or another, therefore never erase each other's values; writers to
//! the same key resolve last-write-wins. The in-memory cache is replaced only
//! after a successful write, so a failed commit leaves both the file and the
//! cache at their previous state.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{AuthStateError, AuthStateResult};

use super::backend::PreferenceBackend;
use super::file_io::{read_json, write_json_atomic};
use super::value::PrimitiveValue;

const FILE_SCHEMA_VERSION: u32 = 1;

/// On-disk layout of the preference file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    #[serde(default)]
    values: BTreeMap<String, PrimitiveValue>,
}

fn default_schema_version() -> u32 {
    FILE_SCHEMA_VERSION
}

impl Default for PreferenceFile {
    fn default() -> Self {
        Self {
            schema_version: FILE_SCHEMA_VERSION,
            values: BTreeMap::new(),
        }
    }
}

fn load_file(path: &Path) -> AuthStateResult<PreferenceFile> {
    let file: PreferenceFile = read_json(path)?;

    if file.schema_version > FILE_SCHEMA_VERSION {
        return Err(AuthStateError::Storage(format!(
            "{} has schema version {}, newest supported is {}",
            path.display(),
            file.schema_version,
            FILE_SCHEMA_VERSION
        )));
    }

    Ok(file)
}

/// Preference backend persisted to a single JSON file
pub struct JsonFileBackend {
    path: PathBuf,
    lock_path: PathBuf,
    cache: RwLock<BTreeMap<String, PrimitiveValue>>,
}

impl JsonFileBackend {
    /// Open the backend at `path`, loading any existing values
    pub fn open(path: impl Into<PathBuf>) -> AuthStateResult<Self> {
        let path = path.into();
        let file = load_file(&path)?;

        Ok(Self {
            lock_path: lock_path_for(&path),
            path,
            cache: RwLock::new(file.values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_lock_file(&self) -> Result<File, String> {
        if let Some(parent) = self.lock_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create {}: {}", parent.display(), e))?;
        }

        OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.lock_path)
            .map_err(|e| format!("failed to open {}: {}", self.lock_path.display(), e))
    }
}

fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}

impl PreferenceBackend for JsonFileBackend {
    fn get(&self, key: &str) -> AuthStateResult<Option<PrimitiveValue>> {
        let cache = self
            .cache
            .read()
            .map_err(|e| AuthStateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(cache.get(key).cloned())
    }

    fn commit(&self, key: &str, value: Option<PrimitiveValue>) -> AuthStateResult<()> {
        // The cache lock orders commits within this process; the file lock
        // orders them against other instances and processes.
        let mut cache = self.cache.write().map_err(|e| {
            AuthStateError::commit_failed(key, format!("Failed to acquire write lock: {}", e))
        })?;

        let mut file_lock = fd_lock::RwLock::new(
            self.open_lock_file()
                .map_err(|reason| AuthStateError::commit_failed(key, reason))?,
        );
        let _guard = file_lock.write().map_err(|e| {
            AuthStateError::commit_failed(
                key,
                format!("failed to lock {}: {}", self.lock_path.display(), e),
            )
        })?;
        trace!(key, lock = %self.lock_path.display(), "acquired preference file lock");

        let mut next = load_file(&self.path)
            .map_err(|e| AuthStateError::commit_failed(key, e.to_string()))?
            .values;
        match &value {
            Some(v) => {
                next.insert(key.to_string(), v.clone());
            }
            None => {
                next.remove(key);
            }
        }

        let file = PreferenceFile {
            schema_version: FILE_SCHEMA_VERSION,
            values: next,
        };
        write_json_atomic(&self.path, &file)
            .map_err(|reason| AuthStateError::commit_failed(key, reason))?;

        debug!(key, path = %self.path.display(), "committed preference");
        *cache = file.values;
        Ok(())
    }

    fn entries(&self) -> AuthStateResult<Vec<(String, PrimitiveValue)>> {
        let cache = self
            .cache
            .read()
            .map_err(|e| AuthStateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(cache
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    fn reload(&self) -> AuthStateResult<()> {
        let file = load_file(&self.path)?;
        let mut cache = self
            .cache
            .write()
            .map_err(|e| AuthStateError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *cache = file.values;
        Ok(())
    }
}
