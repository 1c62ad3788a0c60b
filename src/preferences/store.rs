//! Typed access over a primitive preference backend
//!
//! `TypedSettingsStore` is constructed explicitly and handed to whatever
//! needs it; there is no process-global instance. Every setter commits
//! synchronously through the backend before returning, so a `get` that
//! follows a `set` on the same key observes the written value.

use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{AuthStateError, AuthStateResult};
use crate::storage::{PreferenceBackend, PrimitiveValue};

use super::encoding::{decode_tri_state, encode_tri_state, SettingEnum};
use super::uri::UriRef;

/// Strongly-typed reads and writes over a [`PreferenceBackend`]
pub struct TypedSettingsStore<B> {
    backend: B,
    audit: Option<AuditLogger>,
}

impl<B: PreferenceBackend> TypedSettingsStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            audit: None,
        }
    }

    /// Record every successful commit to `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // Primitive accessors

    pub fn get_boolean(&self, key: &str, default: bool) -> AuthStateResult<bool> {
        match self.backend.get(key)? {
            None => Ok(default),
            Some(PrimitiveValue::Bool(b)) => Ok(b),
            Some(other) => Err(type_mismatch(key, "bool", &other)),
        }
    }

    pub fn set_boolean(&self, key: &str, value: bool) -> AuthStateResult<()> {
        self.write(key, Some(PrimitiveValue::Bool(value)))
    }

    pub fn get_string(&self, key: &str, default: &str) -> AuthStateResult<String> {
        match self.backend.get(key)? {
            None => Ok(default.to_string()),
            Some(PrimitiveValue::String(s)) => Ok(s),
            Some(other) => Err(type_mismatch(key, "string", &other)),
        }
    }

    pub fn set_string(&self, key: &str, value: &str) -> AuthStateResult<()> {
        self.write(key, Some(PrimitiveValue::from(value)))
    }

    pub fn get_integer(&self, key: &str, default: i64) -> AuthStateResult<i64> {
        match self.backend.get(key)? {
            None => Ok(default),
            Some(PrimitiveValue::Long(n)) => Ok(n),
            Some(other) => Err(type_mismatch(key, "int", &other)),
        }
    }

    pub fn set_integer(&self, key: &str, value: i64) -> AuthStateResult<()> {
        self.write(key, Some(PrimitiveValue::Long(value)))
    }

    // Encoded accessors

    /// Read an enum stored by ordinal
    ///
    /// An ordinal with no matching variant fails with `CorruptSetting`.
    pub fn get_enum<T: SettingEnum>(&self, key: &str, default: T) -> AuthStateResult<T> {
        let ordinal = self.get_integer(key, default.ordinal())?;
        T::from_ordinal(ordinal).ok_or_else(|| {
            warn!(key, ordinal, kind = T::NAME, "stored enum ordinal out of range");
            AuthStateError::corrupt(
                key,
                format!("ordinal {} is not a valid {}", ordinal, T::NAME),
            )
        })
    }

    pub fn set_enum<T: SettingEnum>(&self, key: &str, value: T) -> AuthStateResult<()> {
        self.set_integer(key, value.ordinal())
    }

    /// Read a tri-state boolean
    ///
    /// Absent returns `default`, `"false"` returns `Some(false)`, and any
    /// other stored string returns `Some(true)`.
    pub fn get_nullable_boolean(
        &self,
        key: &str,
        default: Option<bool>,
    ) -> AuthStateResult<Option<bool>> {
        match self.backend.get(key)? {
            None => Ok(default),
            Some(PrimitiveValue::String(s)) => Ok(Some(decode_tri_state(&s))),
            Some(other) => Err(type_mismatch(key, "string", &other)),
        }
    }

    /// Write a tri-state boolean; `None` removes the key
    pub fn set_nullable_boolean(&self, key: &str, value: Option<bool>) -> AuthStateResult<()> {
        self.write(key, encode_tri_state(value).map(PrimitiveValue::from))
    }

    /// Read a stored location reference
    ///
    /// Absent returns `default`; a stored string that is not a URI
    /// reference fails with `MalformedReference`.
    pub fn get_uri(&self, key: &str, default: Option<UriRef>) -> AuthStateResult<Option<UriRef>> {
        let stored = match self.backend.get(key)? {
            None => return Ok(default),
            Some(PrimitiveValue::String(s)) => s,
            Some(other) => return Err(type_mismatch(key, "string", &other)),
        };

        UriRef::parse(&stored).map(Some).map_err(|reason| {
            warn!(key, value = %stored, error = %reason, "stored reference is not a valid URI");
            AuthStateError::MalformedReference {
                key: key.to_string(),
                value: stored,
                reason,
            }
        })
    }

    /// Write a location reference in canonical form; `None` removes the key
    pub fn set_uri(&self, key: &str, value: Option<&UriRef>) -> AuthStateResult<()> {
        self.write(key, value.map(|u| PrimitiveValue::from(u.as_str())))
    }

    // Raw access

    pub fn contains(&self, key: &str) -> AuthStateResult<bool> {
        Ok(self.backend.get(key)?.is_some())
    }

    /// The raw primitive under `key`
    pub fn get_raw(&self, key: &str) -> AuthStateResult<Option<PrimitiveValue>> {
        self.backend.get(key)
    }

    /// Remove `key`, so reads fall back to their defaults
    pub fn remove(&self, key: &str) -> AuthStateResult<()> {
        self.write(key, None)
    }

    /// Write a raw primitive
    pub fn put_raw(&self, key: &str, value: PrimitiveValue) -> AuthStateResult<()> {
        self.write(key, Some(value))
    }

    pub fn entries(&self) -> AuthStateResult<Vec<(String, PrimitiveValue)>> {
        self.backend.entries()
    }

    /// Re-read the backend from durable storage
    pub fn reload(&self) -> AuthStateResult<()> {
        self.backend.reload()
    }

    fn write(&self, key: &str, value: Option<PrimitiveValue>) -> AuthStateResult<()> {
        // The previous value is only for the audit trail; failing to read it
        // must not block the write.
        let before = match &self.audit {
            Some(_) => self.backend.get(key).ok().flatten(),
            None => None,
        };

        self.backend.commit(key, value.clone())?;
        debug!(key, cleared = value.is_none(), "preference written");

        if let Some(logger) = &self.audit {
            // The commit already happened; an audit failure must not report it as failed.
            if let Err(e) = logger.log(&AuditEntry::commit(key, before, value)) {
                warn!(key, error = %e, "failed to record audit entry");
            }
        }

        Ok(())
    }
}

fn type_mismatch(key: &str, expected: &str, found: &PrimitiveValue) -> AuthStateError {
    warn!(key, expected, found = found.kind(), "stored value has the wrong type");
    AuthStateError::corrupt(
        key,
        format!("expected {} value, found {}", expected, found.kind()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::storage::{JsonFileBackend, MemoryBackend};
    use tempfile::TempDir;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Density {
        Compact,
        Comfortable,
        Spacious,
    }

    crate::setting_enum!(Density {
        Compact = 0,
        Comfortable = 1,
        Spacious = 2,
    });

    fn store() -> TypedSettingsStore<MemoryBackend> {
        TypedSettingsStore::new(MemoryBackend::new())
    }

    #[test]
    fn test_first_launch_scenario() {
        let store = store();
        assert!(store.get_boolean("firstLaunch", true).unwrap());

        store.set_boolean("firstLaunch", false).unwrap();
        assert!(!store.get_boolean("firstLaunch", true).unwrap());
    }

    #[test]
    fn test_primitive_round_trips() {
        let store = store();

        store.set_boolean("flag", true).unwrap();
        store.set_string("theme", "dark").unwrap();
        store.set_string("empty", "").unwrap();
        store.set_integer("max", i64::MAX).unwrap();
        store.set_integer("min", i64::MIN).unwrap();

        assert!(store.get_boolean("flag", false).unwrap());
        assert_eq!(store.get_string("theme", "system").unwrap(), "dark");
        assert_eq!(store.get_string("empty", "fallback").unwrap(), "");
        assert_eq!(store.get_integer("max", 0).unwrap(), i64::MAX);
        assert_eq!(store.get_integer("min", 0).unwrap(), i64::MIN);
    }

    #[test]
    fn test_defaults_when_absent() {
        let store = store();
        assert_eq!(store.get_string("viewMode", "default").unwrap(), "default");
        assert_eq!(store.get_integer("mostRecentBackupModifiedAt", 0).unwrap(), 0);
        assert_eq!(store.get_enum("density", Density::Spacious).unwrap(), Density::Spacious);
        assert!(!store.contains("viewMode").unwrap());
    }

    #[test]
    fn test_every_setter_commits() {
        let store = store();
        let url = UriRef::parse("content://docs/tree/backups").unwrap();

        store.set_boolean("a", true).unwrap();
        store.set_string("b", "x").unwrap();
        store.set_integer("c", 1).unwrap();
        store.set_enum("d", Density::Compact).unwrap();
        store.set_nullable_boolean("e", Some(false)).unwrap();
        store.set_uri("f", Some(&url)).unwrap();

        assert_eq!(store.backend().commit_count(), 6);
    }

    #[test]
    fn test_enum_round_trip_every_variant() {
        let store = store();
        for &variant in Density::ALL {
            store.set_enum("density", variant).unwrap();
            assert_eq!(store.get_enum("density", Density::Compact).unwrap(), variant);
        }
    }

    #[test]
    fn test_out_of_range_enum_is_corrupt() {
        let store = TypedSettingsStore::new(MemoryBackend::with_values([(
            "density",
            PrimitiveValue::Long(7),
        )]));

        let err = store.get_enum("density", Density::Compact).unwrap_err();
        assert!(matches!(err, AuthStateError::CorruptSetting { .. }));
        assert!(err.to_string().contains("ordinal 7 is not a valid Density"));
    }

    #[test]
    fn test_negative_enum_ordinal_is_corrupt() {
        let store = store();
        store.set_integer("density", -1).unwrap();
        assert!(store.get_enum("density", Density::Compact).unwrap_err().is_corrupt());
    }

    #[test]
    fn test_nullable_boolean_round_trip() {
        let store = store();

        store.set_nullable_boolean("x", Some(false)).unwrap();
        assert_eq!(store.get_nullable_boolean("x", None).unwrap(), Some(false));
        assert_eq!(store.get_nullable_boolean("x", Some(true)).unwrap(), Some(false));

        store.set_nullable_boolean("x", Some(true)).unwrap();
        assert_eq!(store.get_nullable_boolean("x", None).unwrap(), Some(true));
        assert_eq!(store.get_nullable_boolean("x", Some(false)).unwrap(), Some(true));
    }

    #[test]
    fn test_nullable_boolean_null_reads_supplied_default() {
        let store = store();
        store.set_nullable_boolean("x", Some(true)).unwrap();
        store.set_nullable_boolean("x", None).unwrap();

        assert!(!store.contains("x").unwrap());
        assert_eq!(store.get_nullable_boolean("x", Some(true)).unwrap(), Some(true));
        assert_eq!(store.get_nullable_boolean("x", Some(false)).unwrap(), Some(false));
        assert_eq!(store.get_nullable_boolean("x", None).unwrap(), None);
    }

    #[test]
    fn test_nullable_boolean_stored_sentinels() {
        let store = store();
        store.set_nullable_boolean("x", Some(false)).unwrap();
        assert_eq!(store.get_raw("x").unwrap(), Some(PrimitiveValue::from("false")));

        store.set_nullable_boolean("x", Some(true)).unwrap();
        assert_eq!(store.get_raw("x").unwrap(), Some(PrimitiveValue::from("true")));
    }

    #[test]
    fn test_nullable_boolean_unknown_string_reads_true() {
        let store = TypedSettingsStore::new(MemoryBackend::with_values([
            ("upper", PrimitiveValue::from("FALSE")),
            ("junk", PrimitiveValue::from("maybe")),
        ]));

        assert_eq!(store.get_nullable_boolean("upper", None).unwrap(), Some(true));
        assert_eq!(store.get_nullable_boolean("junk", Some(false)).unwrap(), Some(true));
    }

    #[test]
    fn test_uri_round_trip() {
        let store = store();
        let url =
            UriRef::parse("content://com.android.externalstorage.documents/tree/primary%3ABackups")
                .unwrap();

        store.set_uri("target", Some(&url)).unwrap();
        let loaded = store.get_uri("target", None).unwrap().unwrap();
        assert_eq!(loaded.as_str(), url.as_str());
    }

    #[test]
    fn test_uri_null_reads_default() {
        let store = store();
        let url = UriRef::parse("file:///sdcard/backup.authpro").unwrap();
        let fallback = UriRef::parse("file:///sdcard/fallback").unwrap();

        store.set_uri("target", Some(&url)).unwrap();
        store.set_uri("target", None).unwrap();

        assert_eq!(store.get_uri("target", None).unwrap(), None);
        assert_eq!(
            store.get_uri("target", Some(fallback.clone())).unwrap(),
            Some(fallback)
        );
    }

    #[test]
    fn test_relative_uri_reference_round_trip() {
        let store = TypedSettingsStore::new(MemoryBackend::with_values([(
            "target",
            PrimitiveValue::from("/storage/emulated/0/backup.authpro"),
        )]));

        let loaded = store.get_uri("target", None).unwrap().unwrap();
        assert!(loaded.is_relative());
        assert_eq!(loaded.as_str(), "/storage/emulated/0/backup.authpro");

        store.set_uri("target", Some(&loaded)).unwrap();
        assert_eq!(
            store.get_raw("target").unwrap(),
            Some(PrimitiveValue::from("/storage/emulated/0/backup.authpro"))
        );
        assert_eq!(store.get_uri("target", None).unwrap(), Some(loaded));
    }

    #[test]
    fn test_malformed_uri_propagates() {
        let store = TypedSettingsStore::new(MemoryBackend::with_values([(
            "target",
            PrimitiveValue::from("not a uri"),
        )]));

        let err = store.get_uri("target", None).unwrap_err();
        match err {
            AuthStateError::MalformedReference { key, value, .. } => {
                assert_eq!(key, "target");
                assert_eq!(value, "not a uri");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_primitive_type_is_corrupt() {
        let store = TypedSettingsStore::new(MemoryBackend::with_values([
            ("flag", PrimitiveValue::from("yes")),
            ("count", PrimitiveValue::Bool(true)),
        ]));

        assert!(store.get_boolean("flag", false).unwrap_err().is_corrupt());
        assert!(store.get_integer("count", 0).unwrap_err().is_corrupt());
        assert!(store.get_nullable_boolean("count", None).unwrap_err().is_corrupt());
        assert!(store.get_uri("count", None).unwrap_err().is_corrupt());
    }

    #[test]
    fn test_commit_failure_surfaces_and_leaves_value() {
        let store = store();
        store.set_boolean("autoBackupTrigger", true).unwrap();

        store.backend().set_fail_commits(true);
        let err = store.set_boolean("autoBackupTrigger", false).unwrap_err();
        assert!(err.is_commit_failure());
        assert!(store.get_boolean("autoBackupTrigger", false).unwrap());
    }

    #[test]
    fn test_file_backed_store_reads_own_writes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");
        let store = TypedSettingsStore::new(JsonFileBackend::open(&path).unwrap());

        store.set_enum("density", Density::Comfortable).unwrap();
        store.set_nullable_boolean("protected", Some(false)).unwrap();
        assert_eq!(store.get_enum("density", Density::Compact).unwrap(), Density::Comfortable);

        let reopened = TypedSettingsStore::new(JsonFileBackend::open(&path).unwrap());
        assert_eq!(
            reopened.get_enum("density", Density::Compact).unwrap(),
            Density::Comfortable
        );
        assert_eq!(reopened.get_nullable_boolean("protected", None).unwrap(), Some(false));
    }

    #[test]
    fn test_audit_records_commits() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let store = TypedSettingsStore::new(MemoryBackend::new()).with_audit(logger.clone());

        store.set_boolean("pref_appLock", true).unwrap();
        store.remove("pref_appLock").unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Set);
        assert_eq!(entries[0].before, None);
        assert_eq!(entries[1].operation, Operation::Clear);
        assert_eq!(entries[1].before, Some(PrimitiveValue::Bool(true)));
    }

    #[test]
    fn test_failed_commit_is_not_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let store = TypedSettingsStore::new(MemoryBackend::new()).with_audit(logger.clone());

        store.backend().set_fail_commits(true);
        assert!(store.set_integer("n", 1).is_err());
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_audit_read_failure_does_not_block_write() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let store = TypedSettingsStore::new(MemoryBackend::new()).with_audit(logger.clone());

        store.backend().set_fail_reads(true);
        store.set_boolean("pref_appLock", true).unwrap();
        store.backend().set_fail_reads(false);

        assert!(store.get_boolean("pref_appLock", false).unwrap());
        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].before, None);
    }
}
