//! Flattening of nested configuration trees into dotted key paths

use serde_json::Value;
use snapenv_core::{Error, Result};

use crate::options::ConfigTree;

/// One flattened setting: a dotted key path and its rendered string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedEntry {
    pub path: String,
    pub value: String,
}

/// Flatten a configuration tree into dotted-path entries.
///
/// Maps recurse with the key appended to the accumulated path; scalar
/// leaves terminate, rendered in canonical string form (`true`, `8080`).
/// Null leaves render as the empty string, matching the store's unset
/// representation. Arrays fail with `UnsupportedValue` naming the path.
///
/// An empty tree flattens to an empty sequence; that is the "nothing
/// configured" signal, not an error. Entry order is stable within a call
/// but not contractual.
pub fn flatten(tree: &ConfigTree) -> Result<Vec<FlattenedEntry>> {
    let mut entries = Vec::new();
    for (key, value) in tree {
        flatten_value(key, value, &mut entries)?;
    }
    Ok(entries)
}

fn flatten_value(path: &str, value: &Value, entries: &mut Vec<FlattenedEntry>) -> Result<()> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_value(&format!("{path}.{key}"), child, entries)?;
            }
            Ok(())
        }
        Value::Array(_) => Err(Error::unsupported_value(path)),
        Value::String(s) => {
            push(path, s.clone(), entries);
            Ok(())
        }
        Value::Bool(b) => {
            push(path, b.to_string(), entries);
            Ok(())
        }
        Value::Number(n) => {
            push(path, n.to_string(), entries);
            Ok(())
        }
        Value::Null => {
            push(path, String::new(), entries);
            Ok(())
        }
    }
}

fn push(path: &str, value: String, entries: &mut Vec<FlattenedEntry>) {
    entries.push(FlattenedEntry {
        path: path.to_string(),
        value,
    });
}
