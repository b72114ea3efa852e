//! One-time migration of deprecated option namespaces

use snapenv_core::Result;
use snapenv_snapctl::SettingsStore;

/// One legacy option and its current home.
#[derive(Debug, Clone, Copy)]
pub struct MigrationRule {
    pub from: &'static str,
    pub to: &'static str,
}

/// Deprecated `env.` options that move into the `apps.` namespace, in the
/// order they are attempted.
pub const LEGACY_MIGRATIONS: &[MigrationRule] = &[
    MigrationRule {
        from: "env.security-secret-store.add-secretstore-tokens",
        to: "apps.security-secretstore-setup.config.add-secretstore-tokens",
    },
    MigrationRule {
        from: "env.security-secret-store.add-known-secrets",
        to: "apps.security-secretstore-setup.config.add-known-secrets",
    },
    MigrationRule {
        from: "env.security-bootstrapper.add-registry-acl-roles",
        to: "apps.security-bootstrapper.config.add-registry-acl-roles",
    },
];

/// Move every set legacy option to its current key.
///
/// Rules are attempted in order; an unset legacy key is skipped and the
/// first store failure aborts the remaining rules. Partial migration is
/// surfaced to the caller, never rolled back or retried.
pub fn migrate_legacy_options<S: SettingsStore>(store: &S) -> Result<()> {
    for rule in LEGACY_MIGRATIONS {
        let value = store.get(rule.from)?;
        if value.is_empty() {
            continue;
        }
        store.unset(rule.from)?;
        store.set(rule.to, &value)?;
        tracing::debug!(from = rule.from, to = rule.to, "migrated legacy option");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use snapenv_core::{Error, Result};
    use snapenv_snapctl::MemoryStore;

    #[test]
    fn set_legacy_options_move_to_their_new_keys() {
        let store = MemoryStore::from_value(json!({
            "env": {"security-secret-store": {"add-secretstore-tokens": "tok-a,tok-b"}},
        }));

        migrate_legacy_options(&store).unwrap();

        assert_eq!(
            store
                .get("env.security-secret-store.add-secretstore-tokens")
                .unwrap(),
            ""
        );
        assert_eq!(
            store
                .get("apps.security-secretstore-setup.config.add-secretstore-tokens")
                .unwrap(),
            "tok-a,tok-b"
        );
    }

    #[test]
    fn unset_legacy_options_are_skipped() {
        let store = MemoryStore::new();
        migrate_legacy_options(&store).unwrap();
        assert_eq!(store.snapshot(), json!({}));
    }

    /// Store that fails every write, to observe the early exit.
    struct ReadOnlyStore(MemoryStore);

    impl SettingsStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<String> {
            self.0.get(key)
        }
        fn get_document(&self, key: &str) -> Result<String> {
            self.0.get_document(key)
        }
        fn set(&self, key: &str, _value: &str) -> Result<()> {
            Err(Error::store_write(key, "store is read-only"))
        }
        fn unset(&self, key: &str) -> Result<()> {
            Err(Error::store_write(key, "store is read-only"))
        }
    }

    #[test]
    fn first_store_failure_aborts_the_remaining_rules() {
        let store = ReadOnlyStore(MemoryStore::from_value(json!({
            "env": {"security-secret-store": {
                "add-secretstore-tokens": "tok-a",
                "add-known-secrets": "sec-a",
            }},
        })));

        let err = migrate_legacy_options(&store).unwrap_err();
        assert!(matches!(err, Error::StoreWrite { ref key, .. }
            if key == "env.security-secret-store.add-secretstore-tokens"));
        // nothing moved
        assert_eq!(
            store
                .get("apps.security-secretstore-setup.config.add-secretstore-tokens")
                .unwrap(),
            ""
        );
    }
}
