//! Bridge to the snap option store
//!
//! The option-processing pipeline never talks to `snapctl` directly; it goes
//! through the narrow [`SettingsStore`] interface so it can be exercised
//! against the in-memory [`MemoryStore`] without spawning any process.

pub mod ctl;
pub mod memory;
pub mod store;

pub use ctl::Snapctl;
pub use memory::MemoryStore;
pub use store::SettingsStore;
