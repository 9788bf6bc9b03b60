//! History worker that owns the [`GameHistoryStore`].
//!
//! Receives commands from [`HistoryHandle`](crate::HistoryHandle) and runs
//! them one at a time, in arrival order. Because every store operation goes
//! through this single queue, the read-modify-write cycle of one save can
//! never interleave with another operation from this process.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use game_core::{GameCandidate, GameRecord};

use crate::history::{GameHistoryStore, Result};

/// Commands that can be sent to the history worker
pub enum Command {
    /// Load the stored history.
    FetchGames {
        reply: oneshot::Sender<Result<Vec<GameRecord>>>,
    },
    /// Validate and persist a finished game.
    SaveGame {
        candidate: GameCandidate,
        reply: oneshot::Sender<Result<Vec<GameRecord>>>,
    },
    /// Stop after every previously queued command has been handled.
    Shutdown,
}

/// Background task that serializes access to the history store.
pub struct HistoryWorker {
    store: GameHistoryStore,
    command_rx: mpsc::Receiver<Command>,
}

impl HistoryWorker {
    /// Creates a new history worker.
    pub fn new(store: GameHistoryStore, command_rx: mpsc::Receiver<Command>) -> Self {
        Self { store, command_rx }
    }

    /// Main worker loop.
    ///
    /// Runs until a [`Command::Shutdown`] arrives or every sender is dropped.
    pub async fn run(mut self) {
        info!("HistoryWorker started");

        while let Some(cmd) = self.command_rx.recv().await {
            if !self.handle_command(cmd).await {
                break;
            }
        }

        info!("HistoryWorker stopped");
    }

    /// Returns false when the worker should stop.
    async fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::FetchGames { reply } => {
                // The store call always runs to completion, even if the
                // caller has already gone away.
                let result = self.store.get_games().await;
                if reply.send(result).is_err() {
                    debug!("FetchGames reply channel closed (caller dropped)");
                }
                true
            }
            Command::SaveGame { candidate, reply } => {
                let result = self.store.save_game(candidate).await;
                if reply.send(result).is_err() {
                    debug!("SaveGame reply channel closed (caller dropped)");
                }
                true
            }
            Command::Shutdown => false,
        }
    }
}
