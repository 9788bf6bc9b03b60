//! Shared, per-mount cache of the game history.
//!
//! A [`HistoryCoordinator`] sits between any number of UI consumers and the
//! history worker. It keeps the last fetched/saved collection together with
//! `loading` and `failed` flags, and drops results that resolve after the
//! coordinator has been unmounted.
//!
//! # Concurrency
//!
//! Operations are not cancelled or queued against each other here. Each one
//! applies its own outcome when it resolves, so the last one to resolve
//! decides the visible `games`. The worker behind [`HistoryHandle`] runs
//! store calls in submission order, which makes resolution order match
//! submission order.

mod mount;
mod snapshot;

pub use mount::MountToken;
pub use snapshot::{HistoryPhase, HistorySnapshot};

use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use game_core::{GameCandidate, GameRecord};

use crate::api::HistoryHandle;
use crate::events::{EventBus, HistoryEvent};
use crate::history::Result;
use mount::MountState;

/// Cloneable coordinator bound to one mount of the history UI subtree.
///
/// Create one with [`HistoryRuntime::mount`](crate::HistoryRuntime::mount)
/// and tear it down with [`unmount`](Self::unmount). All clones share the
/// same snapshot and the same mount.
#[derive(Clone)]
pub struct HistoryCoordinator {
    inner: Arc<Inner>,
}

struct Inner {
    handle: HistoryHandle,
    snapshot: RwLock<HistorySnapshot>,
    mount: MountState,
    events: EventBus,
}

impl HistoryCoordinator {
    /// Mount a coordinator with an empty snapshot.
    pub fn new(handle: HistoryHandle, events: EventBus) -> Self {
        Self {
            inner: Arc::new(Inner {
                handle,
                snapshot: RwLock::new(HistorySnapshot::default()),
                mount: MountState::new(),
                events,
            }),
        }
    }

    /// Refresh `games` from storage.
    ///
    /// On success `games` is replaced, `last_error` is cleared and `failed` is
    /// left as it was; on failure both `failed` and `last_error` are set.
    /// `loading` is true while the call is in flight. Nothing is applied if
    /// the coordinator was unmounted in the meantime.
    pub async fn fetch_games_from_history(&self) {
        let token = self.mount_token();
        self.begin(&token);

        let outcome = self.inner.handle.get_games().await;
        self.finish(&token, outcome);
    }

    /// Persist a finished game and show the resulting history.
    ///
    /// Same state transitions as [`fetch_games_from_history`]; on success
    /// `games` becomes the stored newest-first collection including the new
    /// record.
    ///
    /// [`fetch_games_from_history`]: Self::fetch_games_from_history
    pub async fn add_game_to_history(&self, candidate: GameCandidate) {
        let token = self.mount_token();
        self.begin(&token);

        let outcome = self.inner.handle.save_game(candidate).await;
        self.finish(&token, outcome);
    }

    /// Tear down this mount. Results of in-flight operations are discarded.
    pub fn unmount(&self) {
        // Taking the write lock orders teardown after any update in progress.
        let _guard = self
            .inner
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if self.inner.mount.invalidate() {
            info!("History coordinator unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mount.is_live()
    }

    /// Token observing this mount; used to guard deferred state updates.
    pub fn mount_token(&self) -> MountToken {
        self.inner.mount.token()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> HistorySnapshot {
        self.read(|snapshot| snapshot.clone())
    }

    pub fn games(&self) -> Vec<GameRecord> {
        self.read(|snapshot| snapshot.games.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.read(|snapshot| snapshot.loading)
    }

    pub fn has_failed(&self) -> bool {
        self.read(|snapshot| snapshot.failed)
    }

    /// Subscribe to state changes applied from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<HistoryEvent> {
        self.inner.events.subscribe()
    }

    fn begin(&self, token: &MountToken) {
        let applied = self.apply(token, |snapshot| {
            snapshot.loading = true;
            vec![HistoryEvent::LoadingStarted]
        });

        if !applied {
            warn!("History operation started on an unmounted coordinator");
        }
    }

    fn finish(&self, token: &MountToken, outcome: Result<Vec<GameRecord>>) {
        let applied = self.apply(token, |snapshot| {
            let mut events = Vec::with_capacity(2);

            match outcome {
                Ok(games) => {
                    events.push(HistoryEvent::GamesUpdated { count: games.len() });
                    snapshot.games = games;
                    snapshot.last_error = None;
                }
                Err(error) => {
                    debug!("History operation failed: {}", error);
                    snapshot.failed = true;
                    snapshot.last_error = Some(error.clone());
                    events.push(HistoryEvent::Failed { error });
                }
            }

            snapshot.loading = false;
            events.push(HistoryEvent::LoadingFinished);
            events
        });

        if !applied {
            debug!("Discarding history result for unmounted coordinator");
        }
    }

    /// Run `update` under the write lock if `token` is still live and
    /// publish the events it returns. Returns whether the update ran.
    fn apply<F>(&self, token: &MountToken, update: F) -> bool
    where
        F: FnOnce(&mut HistorySnapshot) -> Vec<HistoryEvent>,
    {
        let mut snapshot = self
            .inner
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if !token.is_live() {
            return false;
        }

        // Publishing under the lock keeps events from trailing an unmount.
        for event in update(&mut snapshot) {
            self.inner.events.publish(event);
        }
        true
    }

    fn read<T>(&self, f: impl FnOnce(&HistorySnapshot) -> T) -> T {
        let snapshot = self
            .inner
            .snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&snapshot)
    }
}
