//! Authenticator state - preferences and sync state for an authenticator app
//!
//! This library holds the small pieces of state an authenticator and its
//! wearable companion share: a typed, durable preference store, the
//! scheduling state that drives automatic backup and restore, and the
//! equivalence contract used when merging category lists between devices.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `storage`: The durable key-value backend (JSON file, in-memory)
//! - `preferences`: Typed accessors over the backend
//! - `backup`: Backup/restore scheduling state and trigger consumption
//! - `models`: Category records and their equivalence
//! - `services`: Category list diff and merge
//! - `audit`: Append-only log of preference commits
//! - `cli` / `display`: Command handlers and terminal formatting for `authstate`
//!
//! # Example
//!
//! ```rust,ignore
//! use authenticator::backup::BackupSchedulingState;
//! use authenticator::config::AppPaths;
//! use authenticator::preferences::TypedSettingsStore;
//! use authenticator::storage::JsonFileBackend;
//!
//! let paths = AppPaths::new()?;
//! let store = TypedSettingsStore::new(JsonFileBackend::open(paths.preferences_file())?);
//! let state = BackupSchedulingState::new(&store);
//! state.set_auto_backup_trigger(true)?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod preferences;
pub mod services;
pub mod storage;

pub use error::{AuthStateError, AuthStateResult};
