//! Data types describing finished Ultimate Tic-Tac-Toe games.
//!
//! `game-core` does not implement the game rules. The rule engine is an
//! external collaborator that reports a [`GameResult`] and the move sequence
//! once a game concludes; this crate gives those values a type, validates
//! that a game was actually decided, and (with the `serde` feature) defines
//! the JSON form the history store persists.
pub mod config;
pub mod error;
pub mod outcome;
pub mod record;

pub use config::GameConfig;
pub use error::ValidationError;
pub use outcome::{GameResult, WinningLine, WinningParty};
pub use record::{GameCandidate, GameRecord, RecordId};
