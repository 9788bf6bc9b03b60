//! Utilities for reacting to history events inside UI layers.
use runtime::HistoryEvent;

use crate::message::MessageLog;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &HistoryEvent) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
}

/// Turns history events into player-facing messages.
#[derive(Clone, Debug)]
pub struct HistoryMessages {
    messages: MessageLog,
}

impl HistoryMessages {
    pub fn new(messages: MessageLog) -> Self {
        Self { messages }
    }
}

impl EventConsumer for HistoryMessages {
    fn on_event(&mut self, event: &HistoryEvent) -> EventImpact {
        match event {
            // Loading is shown by the status line; no message needed.
            HistoryEvent::LoadingStarted => EventImpact::redraw(),
            HistoryEvent::GamesUpdated { count } => {
                self.messages
                    .push_text(format!("History now holds {count} game(s)."));
                EventImpact::redraw()
            }
            HistoryEvent::Failed { error } => {
                let hint = if error.is_validation() {
                    ""
                } else {
                    " Type `retry` to try again."
                };
                self.messages
                    .push_error(format!("History error: {error}.{hint}"));
                EventImpact::redraw()
            }
            HistoryEvent::LoadingFinished => EventImpact::redraw(),
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.messages
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.messages
    }
}

#[cfg(test)]
mod tests {
    use runtime::HistoryError;

    use super::*;
    use crate::message::MessageLevel;

    #[test]
    fn failures_become_error_messages() {
        let mut consumer = HistoryMessages::new(MessageLog::new(8));

        let impact = consumer.on_event(&HistoryEvent::Failed {
            error: HistoryError::FetchFailed,
        });
        assert!(impact.requires_redraw);

        let entry = consumer.message_log().recent(1).next().unwrap();
        assert_eq!(entry.level, MessageLevel::Error);
        assert!(entry.text.contains("failed to fetch history"));
        assert!(entry.text.contains("retry"));
    }

    #[test]
    fn invalid_game_has_no_retry_hint() {
        let mut consumer = HistoryMessages::new(MessageLog::new(8));
        consumer.on_event(&HistoryEvent::Failed {
            error: HistoryError::InvalidGame,
        });

        let entry = consumer.message_log().recent(1).next().unwrap();
        assert_eq!(entry.text, "History error: invalid game.");
    }

    #[test]
    fn loading_events_only_redraw() {
        let mut consumer = HistoryMessages::new(MessageLog::new(8));
        let impact = consumer
            .on_event(&HistoryEvent::LoadingStarted)
            .combine(consumer.on_event(&HistoryEvent::LoadingFinished));

        assert_eq!(impact, EventImpact::redraw());
        assert!(consumer.message_log().is_empty());
    }
}
