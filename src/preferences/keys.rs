//! Persisted key names and their defaults
//!
//! Names match the ones already on disk in existing installs, including the
//! `pref_` prefix carried by keys that back a preference screen. Short names
//! such as `appLock` or `autoBackupUri` refer to these prefixed keys.

pub const FIRST_LAUNCH: &str = "firstLaunch";
pub const FIRST_LAUNCH_DEFAULT: bool = true;

pub const SHOW_BACKUP_REMINDERS: &str = "pref_showBackupReminders";
pub const SHOW_BACKUP_REMINDERS_DEFAULT: bool = true;

pub const APP_LOCK: &str = "pref_appLock";
pub const APP_LOCK_DEFAULT: bool = false;

pub const USE_ENCRYPTED_DATABASE: &str = "pref_useEncryptedDatabase";
pub const USE_ENCRYPTED_DATABASE_DEFAULT: bool = false;

pub const THEME: &str = "pref_theme";
pub const THEME_DEFAULT: &str = "system";

pub const VIEW_MODE: &str = "pref_viewMode";
pub const VIEW_MODE_DEFAULT: &str = "default";

pub const AUTO_BACKUP_ENABLED: &str = "pref_autoBackupEnabled";
pub const AUTO_BACKUP_ENABLED_DEFAULT: bool = false;

pub const AUTO_RESTORE_ENABLED: &str = "pref_autoRestoreEnabled";
pub const AUTO_RESTORE_ENABLED_DEFAULT: bool = false;

/// Defaults to no target
pub const AUTO_BACKUP_URI: &str = "pref_autoBackupUri";

/// Defaults to unknown (`None`)
pub const AUTO_BACKUP_PASSWORD_PROTECTED: &str = "pref_autoBackupPasswordProtected";

pub const AUTO_RESTORE_COMPLETED: &str = "autoRestoreCompleted";
pub const AUTO_RESTORE_COMPLETED_DEFAULT: bool = false;

/// Defaults to `BackupRequirement::NotRequired`
pub const BACKUP_REQUIREMENT: &str = "backupRequirement";

pub const AUTO_BACKUP_TRIGGER: &str = "autoBackupTrigger";
pub const AUTO_BACKUP_TRIGGER_DEFAULT: bool = false;

pub const AUTO_RESTORE_TRIGGER: &str = "autoRestoreTrigger";
pub const AUTO_RESTORE_TRIGGER_DEFAULT: bool = false;

pub const MOST_RECENT_BACKUP_MODIFIED_AT: &str = "mostRecentBackupModifiedAt";
pub const MOST_RECENT_BACKUP_MODIFIED_AT_DEFAULT: i64 = 0;

/// Every key this crate reads or writes
pub const ALL: &[&str] = &[
    FIRST_LAUNCH,
    SHOW_BACKUP_REMINDERS,
    APP_LOCK,
    USE_ENCRYPTED_DATABASE,
    THEME,
    VIEW_MODE,
    AUTO_BACKUP_ENABLED,
    AUTO_RESTORE_ENABLED,
    AUTO_BACKUP_URI,
    AUTO_BACKUP_PASSWORD_PROTECTED,
    AUTO_RESTORE_COMPLETED,
    BACKUP_REQUIREMENT,
    AUTO_BACKUP_TRIGGER,
    AUTO_RESTORE_TRIGGER,
    MOST_RECENT_BACKUP_MODIFIED_AT,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_unique() {
        let unique: HashSet<_> = ALL.iter().collect();
        assert_eq!(unique.len(), ALL.len());
    }
}
