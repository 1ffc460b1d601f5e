//! SpanTagger — single-token gazetteer matching over free text
//!
//! Scanning is a pure, single-pass function: scrub punctuation,
//! tokenize on whitespace, look each token up in the gazetteer, and
//! report a span per hit. No cross-call state exists besides the
//! immutable gazetteer, so concurrent scans need no locking.

use super::gazetteer::Gazetteer;
use super::span::TextSpan;

/// Punctuation replaced by a space before tokenization. Periods are
/// deliberately absent — they are part of common abbreviations ("Ill.").
const SCRUB_CHARS: &[char] = &['"', '\'', '!', ',', ';', '?'];

/// Replace scrub punctuation with single spaces, 1-for-1.
///
/// The substitution never changes the string's length (every scrubbed
/// character is ASCII, replaced by an ASCII space), so offsets computed
/// against the scrubbed text are stable. They are NOT necessarily valid
/// against the original sentence once any character was replaced.
pub fn scrub(sentence: &str) -> String {
    sentence
        .chars()
        .map(|c| if SCRUB_CHARS.contains(&c) { ' ' } else { c })
        .collect()
}

/// Anything that can scan a sentence for labeled spans.
pub trait Tagger: Send + Sync {
    /// What kind of entity this tagger resolves (e.g., "location").
    fn category(&self) -> &str;

    /// Scan a sentence, returning matches in left-to-right token order.
    /// Total over all inputs — an empty result is not an error.
    fn scan(&self, sentence: &str) -> Vec<TextSpan>;
}

/// Gazetteer-backed single-token tagger.
#[derive(Debug, Clone)]
pub struct SpanTagger {
    gazetteer: Gazetteer,
}

impl SpanTagger {
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }
}

impl Tagger for SpanTagger {
    fn category(&self) -> &str {
        self.gazetteer.category()
    }

    /// Known limitation, kept for source compatibility: the span's start
    /// is the FIRST occurrence of the token text anywhere in the
    /// scrubbed sentence, so a recurring token reports the same span for
    /// every match.
    fn scan(&self, sentence: &str) -> Vec<TextSpan> {
        let scrubbed = scrub(sentence);
        let mut spans = Vec::new();

        for token in scrubbed.split_whitespace() {
            let label = match self.gazetteer.resolve(token) {
                Some(label) => label,
                None => continue,
            };
            let start = match scrubbed.find(token) {
                Some(start) => start,
                // Unreachable: every token is a slice of `scrubbed`.
                None => continue,
            };
            spans.push(TextSpan::new(start, start + token.len(), label));
        }

        spans
    }
}
