//! The narrow interface over the snap option store

use snapenv_core::Result;

/// Read and write access to the snap's option store, keyed by dotted paths.
///
/// Implementations must mirror snapctl's observable conventions: an unset
/// key reads as the empty string, an unset document reads as `{}`.
pub trait SettingsStore {
    /// Read a single option value.
    fn get(&self, key: &str) -> Result<String>;

    /// Read an option subtree as a JSON document of the form
    /// `{"<key>": <subtree>}`.
    fn get_document(&self, key: &str) -> Result<String>;

    /// Set a single option value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Unset an option key or a whole namespace.
    fn unset(&self, key: &str) -> Result<()>;
}
