/// Constants used throughout the snapenv codebase
// Option-store keys
pub const CONFIG_ENABLED_KEY: &str = "config-enabled";
pub const GLOBAL_OPTIONS_KEY: &str = "config";
pub const APP_OPTIONS_KEY: &str = "apps";
pub const LEGACY_OPTIONS_KEY: &str = "env";

/// The app-level option key holding configuration overrides; every other
/// app-level key is a custom option dispatched to a named handler.
pub const APP_CONFIG_OPTION: &str = "config";

// Environment variable names
pub const SNAP_DATA_VAR: &str = "SNAP_DATA";
pub const SNAPENV_LOG_VAR: &str = "SNAPENV_LOG";

// Override-file layout: one `<service>.env` file per service under the
// snap's writable res directory.
pub const RES_DIR: &str = "config/res";
pub const ENV_FILE_EXTENSION: &str = "env";

// Service keys
pub const SERVICE_DATA: &str = "core-data";
pub const SERVICE_METADATA: &str = "core-metadata";
pub const SERVICE_COMMAND: &str = "core-command";
pub const SERVICE_NOTIFICATIONS: &str = "support-notifications";
pub const SERVICE_SCHEDULER: &str = "support-scheduler";
pub const SERVICE_DEVICE_VIRTUAL: &str = "device-virtual";
pub const SERVICE_SECRET_STORE: &str = "security-secret-store";
pub const SERVICE_SECRETSTORE_SETUP: &str = "security-secretstore-setup";
pub const SERVICE_BOOTSTRAPPER: &str = "security-bootstrapper";
pub const SERVICE_PROXY: &str = "security-proxy";
pub const SERVICE_SECRETS_CONFIG: &str = "secrets-config";

/// Every service key this snap can write an override file for.
pub const KNOWN_SERVICES: &[&str] = &[
    // core services
    SERVICE_DATA,
    SERVICE_METADATA,
    SERVICE_COMMAND,
    // support services
    SERVICE_NOTIFICATIONS,
    SERVICE_SCHEDULER,
    // device services
    SERVICE_DEVICE_VIRTUAL,
    // security services
    SERVICE_SECRET_STORE,
    SERVICE_SECRETSTORE_SETUP,
    SERVICE_BOOTSTRAPPER,
    SERVICE_PROXY,
    SERVICE_SECRETS_CONFIG,
];
