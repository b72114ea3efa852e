//! Override-file management and the option resolution pipeline
//!
//! This crate owns the writable side of snapenv: the per-service
//! `<service>.env` override files, the legacy-option migrator, the custom
//! option handlers, and the [`Processor`] that orchestrates one full run.

pub mod custom;
pub mod migrate;
pub mod overrides;
pub mod pipeline;

pub use custom::CustomOptions;
pub use migrate::{migrate_legacy_options, MigrationRule, LEGACY_MIGRATIONS};
pub use overrides::OverrideFile;
pub use pipeline::Processor;
