//! Option-document parsing and key routing for snapenv
//!
//! This crate turns the option store's JSON documents into flattened
//! dotted-key entries and resolves each entry through the static routing
//! table into scoped environment-variable assignments.

pub mod flatten;
pub mod options;
pub mod routes;

pub use flatten::{flatten, FlattenedEntry};
pub use options::{AppOptions, ConfigTree, SnapOptions};
pub use routes::{RouteTable, RouteTarget, Scope};
