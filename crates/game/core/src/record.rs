//! Finished-game records as kept in local history.

use std::fmt;

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use chrono::SecondsFormat;

use crate::error::ValidationError;
use crate::outcome::GameResult;

/// Opaque identifier assigned to a record when it is saved.
///
/// Freshly generated ids are UUID v4 text, but stored ids are accepted as-is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A concluded game as reported by the rule engine, before it is saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameCandidate {
    /// Cell indices in play order.
    pub move_history: Vec<u32>,
    pub result: GameResult,
}

impl GameCandidate {
    pub fn new(move_history: Vec<u32>, result: GameResult) -> Self {
        Self {
            move_history,
            result,
        }
    }

    /// Checks that the game has a determined outcome.
    ///
    /// Move legality is the rule engine's business and is not checked here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.result.is_decided() {
            Ok(())
        } else {
            Err(ValidationError::InvalidGame {
                result: self.result,
            })
        }
    }

    /// Validates the candidate and stamps it with an id and creation time.
    pub fn into_record(
        self,
        id: RecordId,
        created_at: DateTime<Utc>,
    ) -> Result<GameRecord, ValidationError> {
        self.validate()?;
        Ok(GameRecord {
            id,
            created_at,
            move_history: self.move_history,
            result: self.result,
        })
    }
}

/// One completed or surrendered game.
///
/// Records are immutable once created; they leave history only by falling out
/// of the retention window.
///
/// # Wire Format
///
/// ```json
/// {
///   "id": "7b0c…",
///   "createdAt": "2026-10-18T09:12:44.120Z",
///   "moveHistory": [40, 36, 4],
///   "result": ["playerA", "diagonal"]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameRecord {
    pub id: RecordId,
    /// Written with millisecond precision and a `Z` suffix.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_created_at"))]
    pub created_at: DateTime<Utc>,
    pub move_history: Vec<u32>,
    pub result: GameResult,
}

impl GameRecord {
    /// Number of moves played before the game ended.
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    /// Returns true if this record carries the same game as `candidate`.
    pub fn matches(&self, candidate: &GameCandidate) -> bool {
        self.move_history == candidate.move_history && self.result == candidate.result
    }
}

#[cfg(feature = "serde")]
fn serialize_created_at<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{WinningLine, WinningParty};
    use chrono::TimeZone;

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    #[test]
    fn undecided_candidate_is_rejected() {
        let candidate = GameCandidate::new(vec![0, 9], GameResult::undecided());
        let err = candidate
            .into_record(RecordId::new("a"), created_at())
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid game");
    }

    #[test]
    fn decided_candidate_keeps_moves_and_result() {
        let result = GameResult::new(WinningParty::PlayerB, Some(WinningLine::LeftColumn));
        let candidate = GameCandidate::new(vec![4, 36, 0], result);
        let record = candidate
            .clone()
            .into_record(RecordId::new("b"), created_at())
            .unwrap();

        assert!(record.matches(&candidate));
        assert_eq!(record.id.as_str(), "b");
        assert_eq!(record.move_count(), 3);
    }

    #[test]
    fn draws_are_valid() {
        let candidate = GameCandidate::new(vec![], GameResult::new(WinningParty::Draw, None));
        assert!(candidate.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn record_uses_camel_case_keys() {
        let record = GameRecord {
            id: RecordId::new("c"),
            created_at: created_at(),
            move_history: vec![0],
            result: GameResult::surrender(WinningParty::PlayerA),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], "c");
        assert_eq!(value["createdAt"], "2026-10-18T09:30:00.000Z");
        assert_eq!(value["moveHistory"], serde_json::json!([0]));
        assert_eq!(value["result"], serde_json::json!(["playerA", "surrender"]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn stored_timestamp_text_is_preserved() {
        let raw = serde_json::json!({
            "id": "d",
            "createdAt": "2026-10-18T09:30:00.120Z",
            "moveHistory": [],
            "result": ["draw", null],
        });

        let record: GameRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }
}
