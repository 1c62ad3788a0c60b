//! CLI command handlers
//!
//! Bridges clap argument parsing with the preference store and services.

pub mod audit;
pub mod backup;
pub mod category;
pub mod prefs;

pub use audit::handle_audit_command;
pub use backup::{handle_backup_command, BackupCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use prefs::{handle_prefs_command, PrefsCommands};
