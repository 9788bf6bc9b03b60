//! Error taxonomy of the game-history store.

use thiserror::Error;

use game_core::ValidationError;

/// Failures returned by history operations.
///
/// Every variant is terminal for the operation that produced it; nothing is
/// retried internally. Malformed stored data is not an error: it is
/// normalized to an empty or filtered history instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The game had no determined outcome. No storage access was attempted.
    #[error("invalid game")]
    InvalidGame,

    /// Reading the stored history failed at the storage layer.
    #[error("failed to fetch history")]
    FetchFailed,

    /// Writing the updated history failed; the new record was not persisted.
    #[error("failed to save in local storage")]
    SaveFailed,

    /// The history worker has shut down or dropped the request.
    #[error("history worker unavailable")]
    WorkerUnavailable,
}

impl HistoryError {
    /// Returns true if the failure came from local validation.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidGame)
    }
}

impl From<ValidationError> for HistoryError {
    fn from(_: ValidationError) -> Self {
        Self::InvalidGame
    }
}

pub type Result<T> = std::result::Result<T, HistoryError>;
