//! Typed view of the option store's JSON documents

use serde::Deserialize;
use snapenv_core::{Error, Result};
use std::collections::BTreeMap;

/// An untyped nested configuration tree: string-keyed maps with scalar
/// leaves. Arrays are rejected later, by the flattener.
pub type ConfigTree = serde_json::Map<String, serde_json::Value>;

/// Per-app options: the `config` override tree plus any custom options,
/// keyed by option name. Every option value is itself a tree.
pub type AppOptions = BTreeMap<String, ConfigTree>;

/// The shape of the `config` and `apps` option documents as returned by
/// the store in document form (`{"config": …}` / `{"apps": …}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapOptions {
    /// Per-service option trees keyed by service name
    #[serde(default)]
    pub apps: BTreeMap<String, AppOptions>,

    /// The global override tree applied to every service; `None` when the
    /// option is not set at all
    #[serde(default)]
    pub config: Option<ConfigTree>,
}

impl SnapOptions {
    /// Parse a store document, naming it in the error on malformed input.
    pub fn from_document(name: &str, json: &str) -> Result<Self> {
        tracing::debug!(document = name, "parsing options document");
        serde_json::from_str(json).map_err(|e| Error::malformed_document(name, e))
    }

    /// Options set for one service, if any.
    pub fn app(&self, service: &str) -> Option<&AppOptions> {
        self.apps.get(service)
    }
}
