//! Configuration module
//!
//! Resolves where the preference file and audit log live.

pub mod paths;

pub use paths::AppPaths;
