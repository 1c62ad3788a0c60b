//! Backup scheduling state
//!
//! A thin typed view over the backup keys. Each getter and setter maps to
//! exactly one store operation; nothing here clears trigger flags or derives
//! one value from another.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AuthStateError, AuthStateResult};
use crate::preferences::keys;
use crate::preferences::{TypedSettingsStore, UriRef};
use crate::storage::PreferenceBackend;

/// Whether the current data demands a backup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackupRequirement {
    /// Nothing has changed since the last backup
    #[default]
    NotRequired,
    /// Changes exist; back up at the next convenient point
    WhenPossible,
    /// Changes exist that would be lost without a backup
    Required,
}

crate::setting_enum!(BackupRequirement {
    NotRequired = 0,
    WhenPossible = 1,
    Required = 2,
});

impl BackupRequirement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotRequired => "not-required",
            Self::WhenPossible => "when-possible",
            Self::Required => "required",
        }
    }
}

impl fmt::Display for BackupRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackupRequirement {
    type Err = AuthStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "not-required" | "none" => Ok(Self::NotRequired),
            "when-possible" => Ok(Self::WhenPossible),
            "required" | "urgent" => Ok(Self::Required),
            other => Err(AuthStateError::Config(format!(
                "Unknown backup requirement '{}' (expected not-required, when-possible or required)",
                other
            ))),
        }
    }
}

/// Typed view over the backup and restore scheduling keys
pub struct BackupSchedulingState<'a, B> {
    store: &'a TypedSettingsStore<B>,
}

impl<'a, B: PreferenceBackend> BackupSchedulingState<'a, B> {
    pub fn new(store: &'a TypedSettingsStore<B>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a TypedSettingsStore<B> {
        self.store
    }

    pub fn auto_backup_enabled(&self) -> AuthStateResult<bool> {
        self.store
            .get_boolean(keys::AUTO_BACKUP_ENABLED, keys::AUTO_BACKUP_ENABLED_DEFAULT)
    }

    pub fn set_auto_backup_enabled(&self, value: bool) -> AuthStateResult<()> {
        self.store.set_boolean(keys::AUTO_BACKUP_ENABLED, value)
    }

    pub fn auto_restore_enabled(&self) -> AuthStateResult<bool> {
        self.store
            .get_boolean(keys::AUTO_RESTORE_ENABLED, keys::AUTO_RESTORE_ENABLED_DEFAULT)
    }

    pub fn set_auto_restore_enabled(&self, value: bool) -> AuthStateResult<()> {
        self.store.set_boolean(keys::AUTO_RESTORE_ENABLED, value)
    }

    /// Where automatic backups are written, `None` if not configured
    pub fn auto_backup_uri(&self) -> AuthStateResult<Option<UriRef>> {
        self.store.get_uri(keys::AUTO_BACKUP_URI, None)
    }

    pub fn set_auto_backup_uri(&self, value: Option<&UriRef>) -> AuthStateResult<()> {
        self.store.set_uri(keys::AUTO_BACKUP_URI, value)
    }

    /// `None` means the protection state is not yet known
    pub fn auto_backup_password_protected(&self) -> AuthStateResult<Option<bool>> {
        self.store
            .get_nullable_boolean(keys::AUTO_BACKUP_PASSWORD_PROTECTED, None)
    }

    pub fn set_auto_backup_password_protected(&self, value: Option<bool>) -> AuthStateResult<()> {
        self.store
            .set_nullable_boolean(keys::AUTO_BACKUP_PASSWORD_PROTECTED, value)
    }

    /// Sticky once set; nothing in this crate resets it
    pub fn auto_restore_completed(&self) -> AuthStateResult<bool> {
        self.store.get_boolean(
            keys::AUTO_RESTORE_COMPLETED,
            keys::AUTO_RESTORE_COMPLETED_DEFAULT,
        )
    }

    pub fn set_auto_restore_completed(&self, value: bool) -> AuthStateResult<()> {
        self.store.set_boolean(keys::AUTO_RESTORE_COMPLETED, value)
    }

    pub fn backup_required(&self) -> AuthStateResult<BackupRequirement> {
        self.store
            .get_enum(keys::BACKUP_REQUIREMENT, BackupRequirement::NotRequired)
    }

    pub fn set_backup_required(&self, value: BackupRequirement) -> AuthStateResult<()> {
        self.store.set_enum(keys::BACKUP_REQUIREMENT, value)
    }

    /// One-shot request for a backup; the consumer must clear it
    pub fn auto_backup_trigger(&self) -> AuthStateResult<bool> {
        self.store
            .get_boolean(keys::AUTO_BACKUP_TRIGGER, keys::AUTO_BACKUP_TRIGGER_DEFAULT)
    }

    pub fn set_auto_backup_trigger(&self, value: bool) -> AuthStateResult<()> {
        self.store.set_boolean(keys::AUTO_BACKUP_TRIGGER, value)
    }

    /// One-shot request for a restore; the consumer must clear it
    pub fn auto_restore_trigger(&self) -> AuthStateResult<bool> {
        self.store
            .get_boolean(keys::AUTO_RESTORE_TRIGGER, keys::AUTO_RESTORE_TRIGGER_DEFAULT)
    }

    pub fn set_auto_restore_trigger(&self, value: bool) -> AuthStateResult<()> {
        self.store.set_boolean(keys::AUTO_RESTORE_TRIGGER, value)
    }

    /// Modification time of the newest backup, in epoch milliseconds
    pub fn most_recent_backup_modified_at(&self) -> AuthStateResult<i64> {
        self.store.get_integer(
            keys::MOST_RECENT_BACKUP_MODIFIED_AT,
            keys::MOST_RECENT_BACKUP_MODIFIED_AT_DEFAULT,
        )
    }

    pub fn set_most_recent_backup_modified_at(&self, value: i64) -> AuthStateResult<()> {
        self.store
            .set_integer(keys::MOST_RECENT_BACKUP_MODIFIED_AT, value)
    }
}
