//! Local history of finished games.
//!
//! [`GameHistoryStore`] owns the JSON document stored under
//! [`GAME_HISTORY_KEY`]: decoding and filtering on read, validation,
//! stamping and retention on write.

mod error;
mod providers;
mod schema;
mod store;

pub use error::{HistoryError, Result};
pub use providers::{Clock, IdGenerator, SystemClock, UuidGenerator};
pub use schema::{DecodedHistory, DocumentShape, HistoryEntry, decode_history, encode_history};
pub use store::{GAME_HISTORY_KEY, GameHistoryStore};
