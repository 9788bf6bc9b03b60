//! Error types raised by key-value store implementations.

use thiserror::Error;

/// Errors surfaced by [`KeyValueStore`](super::KeyValueStore) backends.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("key-value store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
