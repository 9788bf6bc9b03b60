//! Cross-frontend primitives for presenting the game history.
//!
//! Houses message logging, event handling, and view-model types that both the
//! console client and future graphical clients can reuse.
pub mod config;
pub mod event;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact, HistoryMessages};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{HistoryRow, HistoryStatus, HistoryViewModel};
