//! Decoding of the stored history document.
//!
//! The whole history lives in one JSON array under a single storage key.
//! Decoding never fails: a missing or unreadable document counts as empty
//! history, and array elements that are not shaped like a record are
//! discarded individually. [`decode_history`] reports what was kept and what
//! was dropped so the filtering can be inspected on its own.

use serde_json::Value;

use game_core::GameRecord;

/// What the raw stored value turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentShape {
    /// Nothing stored under the key yet.
    Missing,
    /// The value is not valid JSON.
    Malformed,
    /// Valid JSON, but not an array.
    NotAnArray,
    /// A JSON array; see the decoded entries.
    Array,
}

/// One element of the stored array after validation.
#[derive(Clone, Debug, PartialEq)]
pub enum HistoryEntry {
    Valid(GameRecord),
    Discarded { index: usize, reason: String },
}

/// Result of decoding a stored history document.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedHistory {
    pub shape: DocumentShape,
    pub entries: Vec<HistoryEntry>,
}

impl DecodedHistory {
    fn empty(shape: DocumentShape) -> Self {
        Self {
            shape,
            entries: Vec::new(),
        }
    }

    /// Iterate over discarded elements as `(index, reason)`.
    pub fn discarded(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries.iter().filter_map(|entry| match entry {
            HistoryEntry::Discarded { index, reason } => Some((*index, reason.as_str())),
            HistoryEntry::Valid(_) => None,
        })
    }

    pub fn valid_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, HistoryEntry::Valid(_)))
            .count()
    }

    /// Keep the valid records in stored order.
    pub fn into_records(self) -> Vec<GameRecord> {
        self.entries
            .into_iter()
            .filter_map(|entry| match entry {
                HistoryEntry::Valid(record) => Some(record),
                HistoryEntry::Discarded { .. } => None,
            })
            .collect()
    }
}

/// Decode the raw value read from storage.
pub fn decode_history(raw: Option<&str>) -> DecodedHistory {
    let Some(raw) = raw else {
        return DecodedHistory::empty(DocumentShape::Missing);
    };

    let document: Value = match serde_json::from_str(raw) {
        Ok(document) => document,
        Err(_) => return DecodedHistory::empty(DocumentShape::Malformed),
    };

    let Value::Array(elements) = document else {
        return DecodedHistory::empty(DocumentShape::NotAnArray);
    };

    let entries = elements
        .into_iter()
        .enumerate()
        .map(
            |(index, element)| match serde_json::from_value::<GameRecord>(element) {
                Ok(record) => HistoryEntry::Valid(record),
                Err(e) => HistoryEntry::Discarded {
                    index,
                    reason: e.to_string(),
                },
            },
        )
        .collect();

    DecodedHistory {
        shape: DocumentShape::Array,
        entries,
    }
}

/// Encode records into the stored document form.
pub fn encode_history(records: &[GameRecord]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}
