//! Audit trail of preference commits
//!
//! Every successful commit made through `TypedSettingsStore` can be recorded
//! as one line in an append-only JSONL file: the key, whether it was set or
//! cleared, and the stored primitive before and after.
//!
//! ```rust,ignore
//! use authenticator::audit::AuditLogger;
//! use authenticator::preferences::TypedSettingsStore;
//!
//! let store = TypedSettingsStore::new(backend).with_audit(AuditLogger::new(paths.audit_log()));
//! store.set_boolean("pref_appLock", true)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
