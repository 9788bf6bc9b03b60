//! Storage contract for the device-local key-value store.

use async_trait::async_trait;

use super::error::Result;

/// String-keyed, string-valued persistent store.
///
/// Mirrors the platform "local storage" API the client runs on: every call
/// either resolves with a value or fails as a whole. There are no partial
/// writes and no transactions across calls.
///
/// # Implementations
///
/// - [`InMemoryKeyValueStore`](super::InMemoryKeyValueStore): tests and
///   ephemeral sessions
/// - [`FileKeyValueStore`](super::FileKeyValueStore): one file per key on disk
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing has been stored under the key.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing a missing key is a no-op.
    async fn remove_item(&self, key: &str) -> Result<()>;
}
