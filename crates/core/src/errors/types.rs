//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for snapenv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for snapenv operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The top-level entry point was called without any services
    EmptyServiceList,

    /// New-style `config.` or `apps.` options are present while the
    /// config-enabled gate is off
    ConfigNotEnabled,

    /// Reading a key or document from the snap option store failed
    StoreRead { key: String, message: String },

    /// Writing or unsetting a key in the snap option store failed
    StoreWrite { key: String, message: String },

    /// The `config` or `apps` option value is not a valid JSON document
    MalformedDocument {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    /// A flattened configuration key has no entry in the routing table
    UnroutableKey { key: String },

    /// A configuration tree leaf holds a value kind that cannot be
    /// rendered as an environment variable (arrays)
    UnsupportedValue { key: String },

    /// An app-specific non-config option has no registered handler
    UnknownCustomOption { service: String, option: String },

    /// Override-file I/O failed
    FileIo {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },
}
