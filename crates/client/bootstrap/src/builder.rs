//! Builds the history runtime and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use runtime::{FileKeyValueStore, HistoryRuntime, InMemoryKeyValueStore, KeyValueStore};

use crate::config::{HistoryConfig, StorageBackend};

/// Builder that assembles the storage backend, runtime, and configuration for clients.
pub struct RuntimeBuilder {
    config: HistoryConfig,
    store: Option<Arc<dyn KeyValueStore>>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: HistoryConfig::default(),
            store: None,
        }
    }

    pub fn config(mut self, config: HistoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide a custom key-value store, bypassing the configured backend.
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let store = match self.store {
            Some(store) => store,
            None => open_store(&self.config)?,
        };

        let runtime = HistoryRuntime::builder()
            .config(self.config.runtime_config())
            .store(store)
            .build()
            .await
            .context("failed to start history runtime")?;

        Ok(RuntimeSetup {
            config: self.config,
            runtime,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn open_store(config: &HistoryConfig) -> Result<Arc<dyn KeyValueStore>> {
    match config.backend {
        StorageBackend::File => {
            let store = FileKeyValueStore::new(&config.save_data_dir).with_context(|| {
                format!(
                    "failed to open save directory {}",
                    config.save_data_dir.display()
                )
            })?;
            tracing::info!(
                "Game history stored under {}",
                config.save_data_dir.display()
            );
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            tracing::info!("Game history kept in memory only");
            Ok(Arc::new(InMemoryKeyValueStore::new()))
        }
    }
}

pub struct RuntimeSetup {
    pub config: HistoryConfig,
    pub runtime: HistoryRuntime,
}
