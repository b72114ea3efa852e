//! Core domain types, errors, and constants for `snapenv`.
//!
//! This crate establishes the foundational building blocks used throughout
//! the codebase:
//!
//! - **`errors`**: the primary `Error` enum and `Result` type alias,
//!   centralizing all failure modes of the option-processing pipeline.
//! - **`constants`**: shared static constants such as option-store keys,
//!   service keys, and the override-file layout.

pub mod constants;
pub mod errors;

pub use self::{
    constants::*,
    errors::{Error, Result},
};
