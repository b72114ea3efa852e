//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

// Helper methods for creating errors with context
impl Error {
    /// Create a store read error with key context
    #[must_use]
    pub fn store_read(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::StoreRead {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a store write error with key context
    #[must_use]
    pub fn store_write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::StoreWrite {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a malformed document error naming the offending document
    #[must_use]
    pub fn malformed_document(document: impl Into<String>, source: serde_json::Error) -> Self {
        Error::MalformedDocument {
            document: document.into(),
            source,
        }
    }

    /// Create an unroutable key error
    #[must_use]
    pub fn unroutable_key(key: impl Into<String>) -> Self {
        Error::UnroutableKey { key: key.into() }
    }

    /// Create an unsupported value error
    #[must_use]
    pub fn unsupported_value(key: impl Into<String>) -> Self {
        Error::UnsupportedValue { key: key.into() }
    }

    /// Create an unknown custom option error
    #[must_use]
    pub fn unknown_custom_option(
        service: impl Into<String>,
        option: impl Into<String>,
    ) -> Self {
        Error::UnknownCustomOption {
            service: service.into(),
            option: option.into(),
        }
    }

    /// Create an override-file I/O error with path context
    #[must_use]
    pub fn file_io(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileIo {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_carry_key_context() {
        let err = Error::store_read("config-enabled", "snapctl exited with status 1");
        assert!(err.to_string().contains("config-enabled"));

        let err = Error::store_write("apps.core-data.config", "read-only store");
        assert!(err.to_string().contains("apps.core-data.config"));
    }

    #[test]
    fn unroutable_key_names_the_key() {
        let err = Error::unroutable_key("bogus.setting");
        assert_eq!(
            err.to_string(),
            "unsupported configuration key 'bogus.setting'"
        );
    }

    #[test]
    fn unknown_custom_option_names_option_and_service() {
        let err = Error::unknown_custom_option("core-data", "autostart");
        let text = err.to_string();
        assert!(text.contains("autostart"));
        assert!(text.contains("core-data"));
    }

    #[test]
    fn config_not_enabled_explains_remediation() {
        let text = Error::ConfigNotEnabled.to_string();
        assert!(text.contains("config-enabled is true"));
        assert!(text.contains("env.security-secret-store.add-secretstore-tokens"));
    }
}
