//! File I/O utilities with atomic writes
//!
//! A write either fully replaces the target file or leaves it untouched.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::AuthStateError;

/// Read JSON from a file, returning a default value if the file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, AuthStateError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| {
        AuthStateError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        AuthStateError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write JSON to a file atomically (write to temp, fsync, then rename)
///
/// Errors are returned as plain I/O descriptions; callers decide which
/// error variant a failed write maps to.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), String>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create {}: {}", parent.display(), e))?;
    }

    let temp_path = temp_path_for(path);
    let file =
        File::create(&temp_path).map_err(|e| format!("failed to create temp file: {}", e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| format!("failed to serialize: {}", e))?;
    writer.flush().map_err(|e| format!("failed to flush: {}", e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| format!("failed to sync: {}", e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        format!("failed to rename temp file: {}", e)
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
