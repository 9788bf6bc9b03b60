//! Coordinator-owned view of the game history.

use game_core::GameRecord;

use crate::history::HistoryError;

/// Values exposed to UI consumers of a mounted coordinator.
///
/// `failed` is sticky: a later successful operation replaces `games` but does
/// not clear it. Only a fresh mount starts from a clean snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistorySnapshot {
    /// Newest-first records from the last successful fetch or save.
    pub games: Vec<GameRecord>,
    pub loading: bool,
    pub failed: bool,
    /// Error of the most recently resolved operation; `None` once a later
    /// operation succeeds.
    pub last_error: Option<HistoryError>,
}

impl HistorySnapshot {
    /// Coarse state for rendering.
    pub fn phase(&self) -> HistoryPhase {
        if self.loading {
            HistoryPhase::Loading
        } else if self.failed {
            HistoryPhase::Failed
        } else if self.games.is_empty() {
            HistoryPhase::Idle
        } else {
            HistoryPhase::Ready
        }
    }
}

/// `IDLE → LOADING → {READY, FAILED}`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}
