//! Path management for the authenticator state store
//!
//! ## Path Resolution Order
//!
//! 1. `AUTHSTATE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (e.g. `~/.config/authstate` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::AuthStateError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "AUTHSTATE_DATA_DIR";

/// Manages all paths used by the store
#[derive(Debug, Clone)]
pub struct AppPaths {
    base_dir: PathBuf,
}

impl AppPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform has no
    /// resolvable home directory.
    pub fn new() -> Result<Self, AuthStateError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "authstate")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    AuthStateError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create AppPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the preference key map
    pub fn preferences_file(&self) -> PathBuf {
        self.base_dir.join("preferences.json")
    }

    /// Path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), AuthStateError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AuthStateError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.preferences_file(),
            temp_dir.path().join("preferences.json")
        );
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = AppPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().join("nested").join("state"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
