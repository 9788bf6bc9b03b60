//! Identifier and clock collaborators used when stamping new records.

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use game_core::RecordId;

/// Source of unique record identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> RecordId;
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Generates random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> RecordId {
        RecordId::new(Uuid::new_v4().to_string())
    }
}

/// Wall clock in UTC, truncated to the millisecond precision records are
/// stored with.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}
