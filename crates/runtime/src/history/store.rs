//! Persistent store for finished games.

use std::sync::Arc;

use tracing::{debug, error, warn};

use game_core::{GameCandidate, GameConfig, GameRecord};

use super::error::{HistoryError, Result};
use super::providers::{Clock, IdGenerator, SystemClock, UuidGenerator};
use super::schema::{DocumentShape, decode_history, encode_history};
use crate::repository::KeyValueStore;

/// Storage key holding the whole history document.
pub const GAME_HISTORY_KEY: &str = "GAME_HISTORY";

/// Newest-first history of finished games, kept under [`GAME_HISTORY_KEY`].
///
/// # Retention
///
/// At most [`GameConfig::MAX_HISTORY_ENTRIES`] records are kept. A new record
/// is always prepended, so eviction drops the oldest entries from the tail.
///
/// # Consistency
///
/// `save_game` is a read-modify-write cycle without isolation. Two concurrent
/// saves against the same backend can lose one record, which is why the
/// runtime only reaches the store through its single history worker.
pub struct GameHistoryStore {
    storage: Arc<dyn KeyValueStore>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl GameHistoryStore {
    /// Create a store over `storage` using UUID v4 ids and the system clock.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            ids: Arc::new(UuidGenerator),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Load the stored history, newest first.
    ///
    /// Only a failing storage read is an error. A missing, unparsable or
    /// non-array document yields an empty history, and elements that are not
    /// shaped like a record are skipped.
    pub async fn get_games(&self) -> Result<Vec<GameRecord>> {
        self.read_history().await
    }

    /// Validate `candidate`, prepend it to the stored history and persist the
    /// result truncated to the retention window.
    ///
    /// Returns the full persisted collection, newest first.
    ///
    /// # Errors
    ///
    /// - [`HistoryError::InvalidGame`] if the game has no outcome (no I/O)
    /// - [`HistoryError::FetchFailed`] if reading the current history fails
    /// - [`HistoryError::SaveFailed`] if writing the new history fails
    pub async fn save_game(&self, candidate: GameCandidate) -> Result<Vec<GameRecord>> {
        if let Err(e) = candidate.validate() {
            debug!("Rejected game with result {:?}", candidate.result);
            return Err(e.into());
        }

        let record = candidate.into_record(self.ids.next_id(), self.clock.now())?;
        let record_id = record.id.clone();

        let mut history = self.read_history().await?;
        history.insert(0, record);
        history.truncate(GameConfig::MAX_HISTORY_ENTRIES);

        let document = encode_history(&history).map_err(|e| {
            error!("Failed to encode game history: {}", e);
            HistoryError::SaveFailed
        })?;

        self.storage
            .set_item(GAME_HISTORY_KEY, &document)
            .await
            .map_err(|e| {
                error!("Failed to write game history: {}", e);
                HistoryError::SaveFailed
            })?;

        debug!(
            "Saved game {} ({} records in history)",
            record_id,
            history.len()
        );

        Ok(history)
    }

    async fn read_history(&self) -> Result<Vec<GameRecord>> {
        let raw = self
            .storage
            .get_item(GAME_HISTORY_KEY)
            .await
            .map_err(|e| {
                error!("Failed to read game history: {}", e);
                HistoryError::FetchFailed
            })?;

        let decoded = decode_history(raw.as_deref());

        match decoded.shape {
            DocumentShape::Malformed | DocumentShape::NotAnArray => {
                warn!(
                    "Stored game history is not a JSON array ({:?}); treating as empty",
                    decoded.shape
                );
            }
            DocumentShape::Missing | DocumentShape::Array => {}
        }

        for (index, reason) in decoded.discarded() {
            warn!("Discarding stored game at index {}: {}", index, reason);
        }

        Ok(decoded.into_records())
    }
}
