//! General application preferences
//!
//! A typed view over the keys that do not belong to backup scheduling.

use crate::error::AuthStateResult;
use crate::storage::PreferenceBackend;

use super::keys;
use super::store::TypedSettingsStore;

/// Typed view over general application preferences
pub struct AppPreferences<'a, B> {
    store: &'a TypedSettingsStore<B>,
}

impl<'a, B: PreferenceBackend> AppPreferences<'a, B> {
    pub fn new(store: &'a TypedSettingsStore<B>) -> Self {
        Self { store }
    }

    /// True until the intro has been completed once
    pub fn first_launch(&self) -> AuthStateResult<bool> {
        self.store
            .get_boolean(keys::FIRST_LAUNCH, keys::FIRST_LAUNCH_DEFAULT)
    }

    pub fn set_first_launch(&self, value: bool) -> AuthStateResult<()> {
        self.store.set_boolean(keys::FIRST_LAUNCH, value)
    }

    pub fn show_backup_reminders(&self) -> AuthStateResult<bool> {
        self.store.get_boolean(
            keys::SHOW_BACKUP_REMINDERS,
            keys::SHOW_BACKUP_REMINDERS_DEFAULT,
        )
    }

    pub fn set_show_backup_reminders(&self, value: bool) -> AuthStateResult<()> {
        self.store.set_boolean(keys::SHOW_BACKUP_REMINDERS, value)
    }

    pub fn app_lock(&self) -> AuthStateResult<bool> {
        self.store.get_boolean(keys::APP_LOCK, keys::APP_LOCK_DEFAULT)
    }

    pub fn set_app_lock(&self, value: bool) -> AuthStateResult<()> {
        self.store.set_boolean(keys::APP_LOCK, value)
    }

    pub fn use_encrypted_database(&self) -> AuthStateResult<bool> {
        self.store.get_boolean(
            keys::USE_ENCRYPTED_DATABASE,
            keys::USE_ENCRYPTED_DATABASE_DEFAULT,
        )
    }

    pub fn set_use_encrypted_database(&self, value: bool) -> AuthStateResult<()> {
        self.store.set_boolean(keys::USE_ENCRYPTED_DATABASE, value)
    }

    /// Theme name, `"system"` unless chosen
    pub fn theme(&self) -> AuthStateResult<String> {
        self.store.get_string(keys::THEME, keys::THEME_DEFAULT)
    }

    pub fn set_theme(&self, value: &str) -> AuthStateResult<()> {
        self.store.set_string(keys::THEME, value)
    }

    pub fn view_mode(&self) -> AuthStateResult<String> {
        self.store.get_string(keys::VIEW_MODE, keys::VIEW_MODE_DEFAULT)
    }

    pub fn set_view_mode(&self, value: &str) -> AuthStateResult<()> {
        self.store.set_string(keys::VIEW_MODE, value)
    }
}
