//! TextSpan — the (start, end, label) triple a scan produces

use serde::{Deserialize, Serialize};

/// A matched region of a scanned sentence.
///
/// `start` is inclusive and `end` exclusive; both are byte offsets into
/// the *scrubbed* form of the sentence, not the original (scrubbing is
/// length-preserving, but the two only coincide when the sentence
/// contains none of the scrubbed punctuation). Invariant:
/// `0 <= start < end <= scrubbed.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
    /// The canonical label the matched token resolves to.
    pub label: String,
}

impl TextSpan {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Byte length of the matched token.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

impl std::fmt::Display for TextSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{} {}", self.start, self.end, self.label)
    }
}
