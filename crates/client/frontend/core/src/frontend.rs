//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::HistoryCoordinator;

/// Frontend abstraction for UI layers.
///
/// Frontends talk to the history through a mounted [`HistoryCoordinator`]:
/// - Subscribe to its events to know when to redraw
/// - Trigger fetches and saves
/// - Read the current snapshot
///
/// Frontends do NOT own the runtime or the mount. The caller unmounts the
/// coordinator once `run` returns.
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use runtime::HistoryCoordinator;
/// use anyhow::Result;
///
/// struct MyFrontend;
///
/// #[async_trait]
/// impl Frontend for MyFrontend {
///     async fn run(&mut self, coordinator: HistoryCoordinator) -> Result<()> {
///         let mut events = coordinator.subscribe();
///         coordinator.fetch_games_from_history().await;
///
///         while let Ok(_event) = events.recv().await {
///             let _games = coordinator.games();
///         }
///
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error. History
    /// failures are part of the snapshot and are not returned here.
    async fn run(&mut self, coordinator: HistoryCoordinator) -> Result<()>;
}
