//! High-level runtime orchestrator.
//!
//! The runtime owns the history worker, wires up its command channel, and
//! mounts coordinators for the UI layer.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{HistoryHandle, Result, RuntimeError};
use crate::coordinator::HistoryCoordinator;
use crate::events::EventBus;
use crate::history::{Clock, GameHistoryStore, IdGenerator};
use crate::repository::KeyValueStore;
use crate::workers::{Command, HistoryWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Capacity of the history worker command queue.
    pub command_buffer_size: usize,
    /// Capacity of each coordinator's event channel.
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_buffer_size: 32,
            event_buffer_size: 64,
        }
    }
}

/// Main runtime that owns the game-history worker
///
/// Design: Runtime owns the worker; [`HistoryHandle`] provides a cloneable
/// façade for clients and [`HistoryCoordinator`] the per-mount UI state.
pub struct HistoryRuntime {
    config: RuntimeConfig,
    handle: HistoryHandle,
    command_tx: mpsc::Sender<Command>,
    worker_handle: JoinHandle<()>,
}

impl HistoryRuntime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to the history worker
    pub fn handle(&self) -> HistoryHandle {
        self.handle.clone()
    }

    /// Mount a fresh coordinator with an empty snapshot.
    ///
    /// Every mount is independent; unmounting one does not affect others.
    pub fn mount(&self) -> HistoryCoordinator {
        tracing::info!("Mounting history coordinator");
        HistoryCoordinator::new(
            self.handle(),
            EventBus::with_capacity(self.config.event_buffer_size),
        )
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Shutdown the runtime gracefully
    ///
    /// Commands queued before this call are still handled. Handles used
    /// afterwards report [`HistoryError::WorkerUnavailable`].
    ///
    /// [`HistoryError::WorkerUnavailable`]: crate::HistoryError::WorkerUnavailable
    pub async fn shutdown(self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        self.worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        tracing::info!("History runtime shut down");
        Ok(())
    }
}

/// Builder for [`HistoryRuntime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    store: Option<Arc<dyn KeyValueStore>>,
    ids: Option<Arc<dyn IdGenerator>>,
    clock: Option<Arc<dyn Clock>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            store: None,
            ids: None,
            clock: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the key-value store backing the history (required)
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the UUID v4 record id generator
    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Replace the system clock used for `createdAt`
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the runtime and spawn the history worker.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn build(self) -> Result<HistoryRuntime> {
        let store = self.store.ok_or(RuntimeError::MissingStore)?;

        let mut history = GameHistoryStore::new(store);
        if let Some(ids) = self.ids {
            history = history.with_id_generator(ids);
        }
        if let Some(clock) = self.clock {
            history = history.with_clock(clock);
        }

        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size.max(1));
        let worker = HistoryWorker::new(history, command_rx);
        let worker_handle = tokio::spawn(worker.run());

        tracing::info!(
            "History runtime started (command buffer: {})",
            self.config.command_buffer_size
        );

        Ok(HistoryRuntime {
            config: self.config,
            handle: HistoryHandle::new(command_tx.clone()),
            command_tx,
            worker_handle,
        })
    }
}
