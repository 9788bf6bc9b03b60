//! Top-level client orchestrating the history runtime and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ HistoryRuntime (history worker, storage)
//!   └─→ Frontend (UI layer, talks to one mounted HistoryCoordinator)
//! ```

mod builder;

pub use builder::ClientBuilder;

pub use client_frontend_core::Frontend;

use anyhow::Result;
use runtime::HistoryRuntime;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects the independently built layers
/// 2. `Client::run()` mounts a coordinator and hands it to the frontend
/// 3. When the frontend returns, the coordinator is unmounted and the
///    runtime shut down, letting queued saves finish first
pub struct Client {
    runtime: HistoryRuntime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user quits, then tear everything down.
    ///
    /// A frontend error is reported after the runtime has been shut down.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        let coordinator = runtime.mount();
        let frontend_result = frontend.run(coordinator.clone()).await;

        coordinator.unmount();

        if let Err(e) = runtime.shutdown().await {
            tracing::error!("Runtime shutdown error: {}", e);
        }

        frontend_result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use game_core::{GameCandidate, GameResult, WinningParty};
    use runtime::{HistoryCoordinator, InMemoryKeyValueStore, KeyValueStore};

    use super::*;

    struct ScriptedFrontend {
        games: usize,
    }

    #[async_trait]
    impl Frontend for ScriptedFrontend {
        async fn run(&mut self, coordinator: HistoryCoordinator) -> Result<()> {
            for i in 0..self.games as u32 {
                let candidate =
                    GameCandidate::new(vec![i], GameResult::surrender(WinningParty::PlayerB));
                coordinator.add_game_to_history(candidate).await;
            }
            anyhow::ensure!(!coordinator.has_failed(), "history failed");
            Ok(())
        }
    }

    struct FailingFrontend;

    #[async_trait]
    impl Frontend for FailingFrontend {
        async fn run(&mut self, _coordinator: HistoryCoordinator) -> Result<()> {
            anyhow::bail!("terminal went away")
        }
    }

    async fn runtime_over(store: Arc<InMemoryKeyValueStore>) -> HistoryRuntime {
        HistoryRuntime::builder().store(store).build().await.unwrap()
    }

    #[tokio::test]
    async fn games_are_persisted_before_run_returns() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let client = Client::builder()
            .runtime(runtime_over(store.clone()).await)
            .frontend(ScriptedFrontend { games: 3 })
            .build()
            .unwrap();

        client.run().await.unwrap();

        let raw = store.get_item("GAME_HISTORY").await.unwrap().unwrap();
        assert_eq!(runtime::decode_history(Some(raw.as_str())).valid_count(), 3);
    }

    #[tokio::test]
    async fn frontend_error_is_returned() {
        let client = Client::builder()
            .runtime(runtime_over(Arc::new(InMemoryKeyValueStore::new())).await)
            .frontend(FailingFrontend)
            .build()
            .unwrap();

        let err = client.run().await.unwrap_err();
        assert_eq!(err.to_string(), "terminal went away");
    }

    #[test]
    fn runtime_is_required() {
        let err = Client::builder().build().err().unwrap();
        assert!(err.to_string().contains("Runtime is required"));
    }
}
