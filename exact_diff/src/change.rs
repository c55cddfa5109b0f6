#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One reported edit operation with absolute old-document offsets and the
/// affected text.
///
/// `start_pos` and `end_pos` are byte offsets into the **old** document; for
/// an `Insert` they are equal and mark the insertion point in the old
/// document's coordinate space. `old_text` is always the exact slice
/// `old[start_pos..end_pos]`, and `new_text` is the exact slice of the new
/// document being brought in. A replaced run is reported as a single
/// `Replace`, never as a delete plus an insert.
///
/// `line_number` is the 1-based line of `start_pos` in the old document.
/// `word_index` is the old-token index of the first affected word and is only
/// present for word-granularity diffs.
///
/// With the `serde` feature enabled, a `Change` serializes as a mapping
/// tagged by `"type"` (`"insert"`, `"delete"` or `"replace"`), with an absent
/// `word_index` omitted rather than null.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Insert {
        start_pos: usize,
        end_pos: usize,
        new_text: String,
        line_number: usize,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        word_index: Option<usize>,
    },

    Delete {
        start_pos: usize,
        end_pos: usize,
        old_text: String,
        line_number: usize,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        word_index: Option<usize>,
    },

    Replace {
        start_pos: usize,
        end_pos: usize,
        old_text: String,
        new_text: String,
        line_number: usize,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        word_index: Option<usize>,
    },
}

impl Change {
    #[must_use]
    pub const fn start_pos(&self) -> usize {
        match self {
            Self::Insert { start_pos, .. }
            | Self::Delete { start_pos, .. }
            | Self::Replace { start_pos, .. } => *start_pos,
        }
    }

    #[must_use]
    pub const fn end_pos(&self) -> usize {
        match self {
            Self::Insert { end_pos, .. }
            | Self::Delete { end_pos, .. }
            | Self::Replace { end_pos, .. } => *end_pos,
        }
    }

    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Insert { line_number, .. }
            | Self::Delete { line_number, .. }
            | Self::Replace { line_number, .. } => *line_number,
        }
    }

    #[must_use]
    pub const fn word_index(&self) -> Option<usize> {
        match self {
            Self::Insert { word_index, .. }
            | Self::Delete { word_index, .. }
            | Self::Replace { word_index, .. } => *word_index,
        }
    }

    /// The removed slice of the old document, present for deletes and
    /// replaces.
    #[must_use]
    pub fn old_text(&self) -> Option<&str> {
        match self {
            Self::Insert { .. } => None,
            Self::Delete { old_text, .. } | Self::Replace { old_text, .. } => Some(old_text),
        }
    }

    /// The inserted slice of the new document, present for inserts and
    /// replaces.
    #[must_use]
    pub fn new_text(&self) -> Option<&str> {
        match self {
            Self::Delete { .. } => None,
            Self::Insert { new_text, .. } | Self::Replace { new_text, .. } => Some(new_text),
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_insert_serializes_with_only_present_fields() {
        let change = Change::Insert {
            start_pos: 3,
            end_pos: 3,
            new_text: "new".to_owned(),
            line_number: 1,
            word_index: None,
        };

        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            serde_json::json!({
                "type": "insert",
                "start_pos": 3,
                "end_pos": 3,
                "new_text": "new",
                "line_number": 1,
            })
        );
    }

    #[test]
    fn test_replace_serializes_both_texts_and_word_index() {
        let change = Change::Replace {
            start_pos: 4,
            end_pos: 7,
            old_text: "cat".to_owned(),
            new_text: "dog".to_owned(),
            line_number: 1,
            word_index: Some(1),
        };

        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            serde_json::json!({
                "type": "replace",
                "start_pos": 4,
                "end_pos": 7,
                "old_text": "cat",
                "new_text": "dog",
                "line_number": 1,
                "word_index": 1,
            })
        );
    }

    #[test]
    fn test_round_trips_through_json() {
        let change = Change::Delete {
            start_pos: 0,
            end_pos: 5,
            old_text: "hello".to_owned(),
            line_number: 1,
            word_index: Some(0),
        };

        let serialized = serde_json::to_string(&change).unwrap();
        assert_eq!(serde_json::from_str::<Change>(&serialized).unwrap(), change);
    }
}
