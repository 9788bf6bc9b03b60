//! Cloneable façade for issuing commands to the history worker.
//!
//! [`HistoryHandle`] hides channel plumbing and offers async helpers that
//! resolve to the same results as calling the store directly.
use tokio::sync::{mpsc, oneshot};

use game_core::{GameCandidate, GameRecord};

use crate::history::{HistoryError, Result};
use crate::workers::Command;

/// Client-facing handle to the game-history store
#[derive(Clone)]
pub struct HistoryHandle {
    command_tx: mpsc::Sender<Command>,
}

impl HistoryHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>) -> Self {
        Self { command_tx }
    }

    /// Load the stored history, newest first.
    pub async fn get_games(&self) -> Result<Vec<GameRecord>> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::FetchGames { reply: reply_tx })
            .await
            .map_err(|_| HistoryError::WorkerUnavailable)?;

        reply_rx
            .await
            .map_err(|_| HistoryError::WorkerUnavailable)?
    }

    /// Validate and persist a finished game; returns the new history.
    pub async fn save_game(&self, candidate: GameCandidate) -> Result<Vec<GameRecord>> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::SaveGame {
                candidate,
                reply: reply_tx,
            })
            .await
            .map_err(|_| HistoryError::WorkerUnavailable)?;

        reply_rx
            .await
            .map_err(|_| HistoryError::WorkerUnavailable)?
    }
}
