//! View-model snapshots derived from [`runtime::HistorySnapshot`].
use game_core::{GameRecord, WinningLine, WinningParty};
use runtime::HistorySnapshot;

const PLAYED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Presentation-ready state of one mounted history view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryViewModel {
    pub status: HistoryStatus,
    pub rows: Vec<HistoryRow>,
}

impl HistoryViewModel {
    pub fn from_snapshot(snapshot: &HistorySnapshot) -> Self {
        // `failed` stays set for the whole mount; the status follows the
        // latest operation so a successful retry clears it.
        let status = if snapshot.loading {
            HistoryStatus::Loading
        } else if let Some(error) = &snapshot.last_error {
            HistoryStatus::Failed {
                retryable: !error.is_validation(),
                reason: error.to_string(),
            }
        } else if snapshot.games.is_empty() {
            HistoryStatus::Empty
        } else {
            HistoryStatus::Ready
        };

        let rows = snapshot
            .games
            .iter()
            .enumerate()
            .map(|(index, record)| HistoryRow::from_record(index + 1, record))
            .collect();

        Self { status, rows }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryStatus {
    Loading,
    /// Rows still show the last good history.
    Failed { retryable: bool, reason: String },
    Empty,
    Ready,
}

/// One line of the history table. `index` is 1-based, newest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    pub index: usize,
    pub winner: String,
    pub line: String,
    pub moves: usize,
    pub played_at: String,
}

impl HistoryRow {
    fn from_record(index: usize, record: &GameRecord) -> Self {
        Self {
            index,
            winner: winner_label(record.result.party()).to_owned(),
            line: record
                .result
                .line()
                .map(line_label)
                .unwrap_or("-")
                .to_owned(),
            moves: record.move_count(),
            played_at: record.created_at.format(PLAYED_AT_FORMAT).to_string(),
        }
    }
}

fn winner_label(party: WinningParty) -> &'static str {
    match party {
        WinningParty::PlayerA => "Player A (X)",
        WinningParty::PlayerB => "Player B (O)",
        WinningParty::Draw => "Draw",
        WinningParty::None => "Undecided",
    }
}

fn line_label(line: WinningLine) -> &'static str {
    match line {
        WinningLine::TopRow => "top row",
        WinningLine::MiddleRow => "middle row",
        WinningLine::BottomRow => "bottom row",
        WinningLine::LeftColumn => "left column",
        WinningLine::CenterColumn => "center column",
        WinningLine::RightColumn => "right column",
        WinningLine::Diagonal => "diagonal",
        WinningLine::AntiDiagonal => "anti-diagonal",
        WinningLine::Surrender => "surrender",
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use game_core::{GameResult, RecordId};
    use runtime::HistoryError;

    use super::*;

    fn record(id: &str, result: GameResult, moves: Vec<u32>) -> GameRecord {
        GameRecord {
            id: RecordId::new(id),
            created_at: Utc.with_ymd_and_hms(2026, 10, 18, 9, 5, 44).unwrap(),
            move_history: moves,
            result,
        }
    }

    #[test]
    fn empty_snapshot_is_empty() {
        let model = HistoryViewModel::from_snapshot(&HistorySnapshot::default());
        assert_eq!(model.status, HistoryStatus::Empty);
        assert!(model.rows.is_empty());
    }

    #[test]
    fn rows_follow_snapshot_order() {
        let snapshot = HistorySnapshot {
            games: vec![
                record(
                    "b",
                    GameResult::new(WinningParty::PlayerB, Some(WinningLine::AntiDiagonal)),
                    vec![2, 4, 6],
                ),
                record("a", GameResult::new(WinningParty::Draw, None), vec![]),
            ],
            ..HistorySnapshot::default()
        };

        let model = HistoryViewModel::from_snapshot(&snapshot);
        assert_eq!(model.status, HistoryStatus::Ready);
        assert_eq!(
            model.rows[0],
            HistoryRow {
                index: 1,
                winner: "Player B (O)".into(),
                line: "anti-diagonal".into(),
                moves: 3,
                played_at: "2026-10-18 09:05".into(),
            }
        );
        assert_eq!(model.rows[1].winner, "Draw");
        assert_eq!(model.rows[1].line, "-");
    }

    #[test]
    fn loading_wins_over_failure() {
        let snapshot = HistorySnapshot {
            loading: true,
            failed: true,
            last_error: Some(HistoryError::FetchFailed),
            ..HistorySnapshot::default()
        };
        assert_eq!(
            HistoryViewModel::from_snapshot(&snapshot).status,
            HistoryStatus::Loading
        );
    }

    #[test]
    fn failure_keeps_rows_and_reason() {
        let snapshot = HistorySnapshot {
            games: vec![record(
                "a",
                GameResult::surrender(WinningParty::PlayerA),
                vec![0],
            )],
            failed: true,
            last_error: Some(HistoryError::SaveFailed),
            ..HistorySnapshot::default()
        };

        let model = HistoryViewModel::from_snapshot(&snapshot);
        assert_eq!(
            model.status,
            HistoryStatus::Failed {
                retryable: true,
                reason: "failed to save in local storage".into(),
            }
        );
        assert_eq!(model.rows.len(), 1);
        assert_eq!(model.rows[0].line, "surrender");
    }

    #[test]
    fn recovered_failure_shows_history() {
        let snapshot = HistorySnapshot {
            games: vec![record(
                "a",
                GameResult::surrender(WinningParty::PlayerB),
                vec![4, 5],
            )],
            failed: true,
            last_error: None,
            ..HistorySnapshot::default()
        };

        assert_eq!(
            HistoryViewModel::from_snapshot(&snapshot).status,
            HistoryStatus::Ready
        );
    }

    #[test]
    fn invalid_game_is_not_retryable() {
        let snapshot = HistorySnapshot {
            failed: true,
            last_error: Some(HistoryError::InvalidGame),
            ..HistorySnapshot::default()
        };

        assert!(matches!(
            HistoryViewModel::from_snapshot(&snapshot).status,
            HistoryStatus::Failed {
                retryable: false,
                ..
            }
        ));
    }
}
