//! Plain-text rendering of the history view model.
use std::fmt::Write;

use client_frontend_core::{HistoryStatus, HistoryViewModel, MessageLevel, MessageLog};

/// Render the history table followed by the most recent messages.
pub fn render(model: &HistoryViewModel, messages: &MessageLog, message_lines: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "== Game history ==");
    let _ = writeln!(out, "{}", status_line(model));

    if !model.rows.is_empty() {
        let _ = writeln!(
            out,
            "{:>3}  {:<13} {:<14} {:>5}  {}",
            "#", "winner", "line", "moves", "played"
        );
        for row in &model.rows {
            let _ = writeln!(
                out,
                "{:>3}  {:<13} {:<14} {:>5}  {}",
                row.index, row.winner, row.line, row.moves, row.played_at
            );
        }
    }

    // Oldest of the visible messages first.
    let mut recent: Vec<_> = messages.recent(message_lines).collect();
    recent.reverse();
    for entry in recent {
        let marker = match entry.level {
            MessageLevel::Info => " ",
            MessageLevel::Error => "!",
        };
        let _ = writeln!(out, "{marker} {}", entry.text);
    }

    out
}

fn status_line(model: &HistoryViewModel) -> String {
    match &model.status {
        HistoryStatus::Loading => "status: loading...".to_owned(),
        HistoryStatus::Failed { retryable, reason } => {
            if *retryable {
                format!("status: failed ({reason}), type `retry`")
            } else {
                format!("status: failed ({reason})")
            }
        }
        HistoryStatus::Empty => "status: no games played yet".to_owned(),
        HistoryStatus::Ready => format!("status: {} game(s)", model.rows.len()),
    }
}

#[cfg(test)]
mod tests {
    use client_frontend_core::HistoryRow;

    use super::*;

    fn row(index: usize) -> HistoryRow {
        HistoryRow {
            index,
            winner: "Player A (X)".into(),
            line: "surrender".into(),
            moves: 2,
            played_at: "2026-10-18 12:00".into(),
        }
    }

    #[test]
    fn empty_history_has_no_table() {
        let model = HistoryViewModel {
            status: HistoryStatus::Empty,
            rows: vec![],
        };
        let text = render(&model, &MessageLog::new(4), 4);
        assert_eq!(text, "== Game history ==\nstatus: no games played yet\n");
    }

    #[test]
    fn rows_and_messages_are_listed() {
        let model = HistoryViewModel {
            status: HistoryStatus::Ready,
            rows: vec![row(1), row(2)],
        };
        let mut messages = MessageLog::new(4);
        messages.push_text("older");
        messages.push_text("newer");
        messages.push_error("boom");

        let text = render(&model, &messages, 2);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[1], "status: 2 game(s)");
        assert!(lines[3].starts_with("  1  Player A (X)  surrender"));
        assert!(lines[3].ends_with("2026-10-18 12:00"));
        assert_eq!(&lines[5..], ["  newer", "! boom"]);
    }

    #[test]
    fn retryable_failure_suggests_retry() {
        let model = HistoryViewModel {
            status: HistoryStatus::Failed {
                retryable: true,
                reason: "failed to fetch history".into(),
            },
            rows: vec![],
        };
        let text = render(&model, &MessageLog::new(1), 0);
        assert!(text.contains("failed (failed to fetch history), type `retry`"));
    }
}
