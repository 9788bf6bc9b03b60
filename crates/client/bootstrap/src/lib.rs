//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, logging setup, and runtime assembly that
//! can be reused by the console front-end or any other front-end crate.
pub mod builder;
pub mod config;
pub mod logging;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::{HistoryConfig, StorageBackend};
pub use logging::setup_logging;
