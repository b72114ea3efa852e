//! Handlers for app-specific non-config options
//!
//! A service may expose top-level options beside `config`; each such
//! option is owned by a named handler. Services without a handler reject
//! every custom option.

use snapenv_config::{flatten, ConfigTree};
use snapenv_core::{Error, Result, SERVICE_SECRETS_CONFIG};
use std::collections::HashMap;
use std::path::Path;

use crate::overrides::OverrideFile;

type Handler = fn(&mut OverrideFile, &str, &ConfigTree) -> Result<()>;

/// Registry of custom-option handlers keyed by owning service.
pub struct CustomOptions {
    handlers: HashMap<&'static str, Handler>,
}

impl CustomOptions {
    pub fn builtin() -> Self {
        let mut handlers: HashMap<&'static str, Handler> = HashMap::new();
        handlers.insert(SERVICE_SECRETS_CONFIG, secrets_config_options);
        Self { handlers }
    }

    /// Dispatch one custom option to its service's handler and persist
    /// the resulting assignments on top of the service's current
    /// overrides.
    pub fn dispatch(
        &self,
        res_dir: &Path,
        service: &str,
        option: &str,
        tree: &ConfigTree,
    ) -> Result<()> {
        let handler = self
            .handlers
            .get(service)
            .ok_or_else(|| Error::unknown_custom_option(service, option))?;
        tracing::debug!(service = %service, option = %option, "dispatching custom option");

        let mut overrides = OverrideFile::new(res_dir, service);
        handler(&mut overrides, option, tree)?;
        overrides.write(true)
    }
}

/// Secrets-config options become env assignments in the service's own
/// override file, e.g. `proxy.admin.user-name` → `PROXY_ADMIN_USERNAME`.
fn secrets_config_options(
    overrides: &mut OverrideFile,
    option: &str,
    tree: &ConfigTree,
) -> Result<()> {
    let mut root = ConfigTree::new();
    root.insert(option.to_string(), serde_json::Value::Object(tree.clone()));
    for entry in flatten(&root)? {
        overrides.set_variable(env_var_name(&entry.path), entry.value);
    }
    Ok(())
}

/// Env name for a dotted option path: uppercase, dots to underscores,
/// dashes dropped.
fn env_var_name(path: &str) -> String {
    path.to_uppercase().replace('.', "_").replace('-', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::tempdir;

    fn tree_of(value: Value) -> ConfigTree {
        match value {
            Value::Object(map) => map,
            _ => panic!("test tree must be an object"),
        }
    }

    #[test]
    fn env_names_follow_the_override_convention() {
        assert_eq!(env_var_name("proxy.admin.user-name"), "PROXY_ADMIN_USERNAME");
        assert_eq!(env_var_name("proxy"), "PROXY");
    }

    #[test]
    fn secrets_config_options_land_in_its_override_file() {
        let dir = tempdir().unwrap();
        let custom = CustomOptions::builtin();
        let tree = tree_of(json!({"admin": {"user-name": "admin", "enabled": true}}));

        custom
            .dispatch(dir.path(), "secrets-config", "proxy", &tree)
            .unwrap();

        let contents = fs::read_to_string(dir.path().join("secrets-config.env")).unwrap();
        assert!(contents.contains("PROXY_ADMIN_USERNAME=admin"));
        assert!(contents.contains("PROXY_ADMIN_ENABLED=true"));
    }

    #[test]
    fn services_without_a_handler_reject_custom_options() {
        let dir = tempdir().unwrap();
        let custom = CustomOptions::builtin();
        let err = custom
            .dispatch(dir.path(), "core-data", "autostart", &ConfigTree::new())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownCustomOption { ref service, ref option }
            if service == "core-data" && option == "autostart"));
        assert!(!dir.path().join("core-data.env").exists());
    }
}
