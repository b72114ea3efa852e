//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyServiceList => {
                write!(f, "empty service list")
            }
            Error::ConfigNotEnabled => {
                write!(
                    f,
                    "'config.' and 'apps.' options are allowed only when config-enabled is true.\n\n\
                     WARNING: setting config-enabled=true will unset existing 'env.' options \
                     and ignore future sets!\n\n\
                     Exception: the following legacy 'env.' options are automatically converted:\n\
                     \t- env.security-secret-store.add-secretstore-tokens\n\
                     \t- env.security-secret-store.add-known-secrets\n\
                     \t- env.security-bootstrapper.add-registry-acl-roles"
                )
            }
            Error::StoreRead { key, message } => {
                write!(f, "failed to read option '{key}': {message}")
            }
            Error::StoreWrite { key, message } => {
                write!(f, "failed to write option '{key}': {message}")
            }
            Error::MalformedDocument { document, source } => {
                write!(f, "malformed '{document}' options document: {source}")
            }
            Error::UnroutableKey { key } => {
                write!(f, "unsupported configuration key '{key}'")
            }
            Error::UnsupportedValue { key } => {
                write!(
                    f,
                    "configuration key '{key}' holds an array; array values are not supported"
                )
            }
            Error::UnknownCustomOption { service, option } => {
                write!(f, "unknown custom option '{option}' for service '{service}'")
            }
            Error::FileIo {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "override file {} failed for '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
        }
    }
}
