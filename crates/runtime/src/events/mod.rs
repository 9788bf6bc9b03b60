//! Event bus for history state changes.
//!
//! Coordinators publish a [`HistoryEvent`] for every state change they apply,
//! so frontends can re-render without polling.

mod bus;

pub use bus::{EventBus, HistoryEvent};
