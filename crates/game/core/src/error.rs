//! Validation errors raised before a finished game is handed to storage.

use thiserror::Error;

use crate::outcome::GameResult;

/// Reasons a [`GameCandidate`](crate::GameCandidate) is rejected.
///
/// Validation happens locally and never touches storage, so every variant is
/// recoverable by the caller correcting its input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The rule engine reported no winner and no draw.
    #[error("invalid game")]
    InvalidGame { result: GameResult },
}
