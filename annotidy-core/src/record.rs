//! Record and span types for annotation collections.

use serde::{Deserialize, Serialize};

/// Record identifier as produced by the upstream labeling tool.
///
/// Export formats disagree on whether `id` is a number or a string; both
/// forms are accepted and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric identifier.
    Int(i64),
    /// String identifier.
    Str(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Int(n)
    }
}

impl From<i32> for RecordId {
    fn from(n: i32) -> Self {
        RecordId::Int(i64::from(n))
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Str(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Str(s)
    }
}

/// A labeled half-open character interval `[start_offset, end_offset)` over
/// a record's text.
///
/// Offsets count characters, not bytes: the upstream annotator indexes text
/// the way humans (and most labeling tools) count positions. Raw offsets may
/// be negative, beyond the text, or inverted; they are repaired by the
/// trimmer, never rejected. The fields are `i64` so such spans survive
/// deserialization intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start position (character offset, inclusive).
    pub start_offset: i64,
    /// End position (character offset, exclusive).
    pub end_offset: i64,
    /// Category tag from the annotator's vocabulary (e.g. "Skill", "Age").
    /// Opaque to this crate; only equality matters.
    pub label: String,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub fn new(start_offset: i64, end_offset: i64, label: impl Into<String>) -> Self {
        Self {
            start_offset,
            end_offset,
            label: label.into(),
        }
    }

    /// Check if this span overlaps with another.
    ///
    /// Half-open interval intersection: spans that merely touch at a
    /// boundary (`a.end_offset == b.start_offset`) do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Span) -> bool {
        !(self.end_offset <= other.start_offset || other.end_offset <= self.start_offset)
    }

    /// Check if this span covers no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end_offset <= self.start_offset
    }

    /// Offsets clamped into `[0, char_len]`, with an inverted interval
    /// collapsed to the empty interval at its clamped start.
    #[must_use]
    pub fn clamped_range(&self, char_len: usize) -> (usize, usize) {
        let len = char_len as i64;
        let start = self.start_offset.clamp(0, len);
        let end = self.end_offset.clamp(0, len).max(start);
        (start as usize, end as usize)
    }

    /// Extract the text this span covers, clamping out-of-range offsets.
    #[must_use]
    pub fn excerpt(&self, text: &str) -> String {
        let (start, end) = self.clamped_range(text.chars().count());
        text.chars().skip(start).take(end - start).collect()
    }
}

/// One document (text plus its labeled spans) from a JSONL collection.
///
/// `entities` carries insertion order from the upstream annotator and is not
/// guaranteed sorted or non-overlapping. Fields this crate does not
/// interpret (labeling-tool metadata) are preserved through a rewrite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Opaque identifier, used only for diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Source document content. Never mutated by this crate.
    pub text: String,
    /// Labeled spans over `text`.
    pub entities: Vec<Span>,
    /// Uninterpreted fields from the labeling tool, written back as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// Create a record with no extra metadata.
    #[must_use]
    pub fn new(id: impl Into<RecordId>, text: impl Into<String>, entities: Vec<Span>) -> Self {
        Self {
            id: Some(id.into()),
            text: text.into(),
            entities,
            extra: serde_json::Map::new(),
        }
    }

    /// Identifier for diagnostics, `?` when the record carries none.
    #[must_use]
    pub fn id_display(&self) -> String {
        match &self.id {
            Some(id) => id.to_string(),
            None => "?".to_string(),
        }
    }

    /// Text length in characters (the unit all offsets count in).
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
