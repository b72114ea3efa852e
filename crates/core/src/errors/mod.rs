//! Error types for snapenv operations

mod builders;
mod display;
mod types;

pub use types::{Error, Result};
