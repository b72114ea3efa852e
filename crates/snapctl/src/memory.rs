//! In-memory store fake with snapctl-compatible rendering

use crate::store::SettingsStore;
use serde_json::{Map, Value};
use snapenv_core::Result;
use std::cell::RefCell;

/// In-memory [`SettingsStore`] holding a nested JSON tree, navigated by
/// dotted key paths. Used by the pipeline tests; never fails.
#[derive(Debug, Default)]
pub struct MemoryStore {
    root: RefCell<Map<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated from a JSON object. Non-object roots
    /// are meaningless as an option store and become the empty store.
    pub fn from_value(root: Value) -> Self {
        let root = match root {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            root: RefCell::new(root),
        }
    }

    /// Snapshot of the current option tree, for test assertions.
    pub fn snapshot(&self) -> Value {
        Value::Object(self.root.borrow().clone())
    }

    fn lookup(&self, key: &str) -> Option<Value> {
        let root = self.root.borrow();
        let mut current = root.get(key.split('.').next()?)?;
        for part in key.split('.').skip(1) {
            current = current.as_object()?.get(part)?;
        }
        Some(current.clone())
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        // bool/number scalars and whole containers print in JSON form
        other => other.to_string(),
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<String> {
        Ok(self.lookup(key).map(|v| render(&v)).unwrap_or_default())
    }

    fn get_document(&self, key: &str) -> Result<String> {
        let mut document = Map::new();
        if let Some(value) = self.lookup(key) {
            document.insert(key.to_string(), value);
        }
        Ok(Value::Object(document).to_string())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut root = self.root.borrow_mut();
        let mut current = &mut *root;
        let mut parts = key.split('.').peekable();
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                current.insert(part.to_string(), Value::String(value.to_string()));
            } else {
                let slot = current
                    .entry(part.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                // setting below a scalar replaces it with a namespace
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                let Value::Object(next) = slot else { break };
                current = next;
            }
        }
        Ok(())
    }

    fn unset(&self, key: &str) -> Result<()> {
        let mut root = self.root.borrow_mut();
        let mut current = &mut *root;
        let mut parts = key.split('.').peekable();
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                current.remove(part);
                break;
            }
            match current.get_mut(part).and_then(Value::as_object_mut) {
                Some(next) => current = next,
                None => break,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_keys_read_as_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.get("config-enabled").unwrap(), "");
        assert_eq!(store.get_document("config").unwrap(), "{}");
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        store.set("config-enabled", "true").unwrap();
        assert_eq!(store.get("config-enabled").unwrap(), "true");
    }

    #[test]
    fn dotted_set_creates_namespaces() {
        let store = MemoryStore::new();
        store
            .set("apps.core-data.config.add-secretstore-tokens", "tok-a")
            .unwrap();
        assert_eq!(
            store.snapshot(),
            json!({"apps": {"core-data": {"config": {"add-secretstore-tokens": "tok-a"}}}})
        );
    }

    #[test]
    fn get_renders_scalars_like_snapctl() {
        let store = MemoryStore::from_value(json!({
            "a": true,
            "b": 8080,
            "c": "text",
            "d": {"nested": 1},
        }));
        assert_eq!(store.get("a").unwrap(), "true");
        assert_eq!(store.get("b").unwrap(), "8080");
        assert_eq!(store.get("c").unwrap(), "text");
        assert_eq!(store.get("d").unwrap(), "{\"nested\":1}");
        assert_eq!(store.get("d.nested").unwrap(), "1");
    }

    #[test]
    fn get_document_wraps_the_key() {
        let store = MemoryStore::from_value(json!({"config": {"service": {"port": "8080"}}}));
        assert_eq!(
            store.get_document("config").unwrap(),
            "{\"config\":{\"service\":{\"port\":\"8080\"}}}"
        );
    }

    #[test]
    fn unset_removes_whole_namespace() {
        let store = MemoryStore::from_value(json!({
            "env": {"security-secret-store": {"add-known-secrets": "s"}},
            "config": {"debug": "true"},
        }));
        store.unset("env").unwrap();
        assert_eq!(store.get("env.security-secret-store.add-known-secrets").unwrap(), "");
        assert_eq!(store.snapshot(), json!({"config": {"debug": "true"}}));
    }

    #[test]
    fn unset_missing_key_is_a_no_op() {
        let store = MemoryStore::new();
        store.unset("nothing.here").unwrap();
        assert_eq!(store.snapshot(), json!({}));
    }
}
