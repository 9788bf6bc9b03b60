//! Worker tasks that back the runtime orchestration.
//!
//! The history worker is the single writer of the game-history key.

mod history;

pub use history::{Command, HistoryWorker};
