//! Line-oriented console frontend for the game history.
//!
//! This crate implements the `client_frontend_core::Frontend` trait on top of
//! plain stdin/stdout.
//!
//! # Architecture
//!
//! ConsoleFrontend is a pure UI layer that:
//! - Receives a mounted HistoryCoordinator
//! - Does NOT own the runtime or the mount
//! - Re-renders the history table whenever the coordinator publishes events

mod app;
mod input;
pub mod presentation;

pub use app::ConsoleFrontend;
pub use input::{InputAction, InputError, parse_line};
