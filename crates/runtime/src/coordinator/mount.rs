//! Liveness tokens tying async results to a mounted coordinator.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared liveness flag of one coordinator mount.
#[derive(Debug)]
pub(crate) struct MountState {
    live: Arc<AtomicBool>,
}

impl MountState {
    pub(crate) fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Hand out a token that observes this mount.
    pub(crate) fn token(&self) -> MountToken {
        MountToken {
            live: Arc::clone(&self.live),
        }
    }

    /// Invalidate every token handed out so far. Returns false if the mount
    /// was already torn down.
    pub(crate) fn invalidate(&self) -> bool {
        self.live.swap(false, Ordering::AcqRel)
    }

    pub(crate) fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

/// Captured by each fetch/save before it awaits the store.
///
/// Results are applied only while the token is still live.
#[derive(Clone, Debug)]
pub struct MountToken {
    live: Arc<AtomicBool>,
}

impl MountToken {
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}
