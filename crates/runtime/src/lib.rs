//! Runtime for the local game history of the Ultimate Tic-Tac-Toe client.
//!
//! This crate wires together the key-value storage port, the game-history
//! store, a single history worker, and per-mount coordinators into a cohesive
//! API. Consumers build a [`HistoryRuntime`], mount a [`HistoryCoordinator`]
//! for each UI subtree that shows history, and read its snapshot.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the handle and error types downstream clients use
//! - [`coordinator`] keeps the shared UI-facing state of one mount
//! - [`history`] owns the stored document: decoding, validation, retention
//! - [`events`] broadcasts coordinator state changes
//! - [`repository`] provides the key-value storage backends
//! - `workers` keeps the history worker internal to the crate
pub mod api;
pub mod coordinator;
pub mod events;
pub mod history;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{HistoryError, HistoryHandle, Result, RuntimeError};
pub use coordinator::{HistoryCoordinator, HistoryPhase, HistorySnapshot, MountToken};
pub use events::{EventBus, HistoryEvent};
pub use history::{
    Clock, DecodedHistory, DocumentShape, GAME_HISTORY_KEY, GameHistoryStore, HistoryEntry,
    IdGenerator, SystemClock, UuidGenerator, decode_history, encode_history,
};
pub use repository::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, RepositoryError};
pub use runtime::{HistoryRuntime, RuntimeBuilder, RuntimeConfig};
