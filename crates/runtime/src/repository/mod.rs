//! Repository layer for device-local persistence.
//!
//! The client persists everything through a single string key-value store,
//! the same shape as the platform "local storage" API. Backends:
//! - [`InMemoryKeyValueStore`] for tests and throwaway sessions
//! - [`FileKeyValueStore`] for on-disk storage, one file per key

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
pub use traits::KeyValueStore;
