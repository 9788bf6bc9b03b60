//! Unified error types surfaced by the runtime API.
//!
//! History operations report [`HistoryError`]; assembling and shutting down
//! the runtime reports [`RuntimeError`].
use thiserror::Error;

pub use crate::history::HistoryError;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires a key-value store to be configured before building")]
    MissingStore,

    #[error("history worker command channel closed")]
    CommandChannelClosed,

    #[error("history worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
