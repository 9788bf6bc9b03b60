//! Broadcast bus for history state changes.

use tokio::sync::broadcast;

use crate::history::HistoryError;

/// State change applied by a [`HistoryCoordinator`](crate::HistoryCoordinator).
///
/// Events describe what changed; consumers read the new values from the
/// coordinator snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    /// A fetch or save started; `loading` is now true.
    LoadingStarted,
    /// `games` was replaced with a collection of `count` records.
    GamesUpdated { count: usize },
    /// The operation failed; `failed` is now true.
    Failed { error: HistoryError },
    /// The operation resolved; `loading` is now false.
    LoadingFinished,
}

/// Best-effort broadcast of [`HistoryEvent`]s.
///
/// Publishing never blocks and never fails; with no subscribers the event is
/// simply dropped. Slow subscribers may observe `RecvError::Lagged`.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<HistoryEvent>,
}

impl EventBus {
    /// Creates a new event bus with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event to every current subscriber
    pub fn publish(&self, event: HistoryEvent) {
        if self.sender.send(event).is_err() {
            // No subscribers - this is normal, not an error
            tracing::trace!("No subscribers for history event");
        }
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<HistoryEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
