//! Gazetteer construction — alias table parsing and normalized lookup
//!
//! The alias table is a single string of comma-separated `key=value`
//! pairs (e.g., `"Ill.=Illinois, VA=Virginia"`). Parsing validates every
//! pair up front; construction then normalizes keys (trim + lowercase)
//! into the lookup mapping. The gazetteer is read-only for its entire
//! lifetime — rebuilding means constructing a new instance.

use indexmap::IndexMap;
use std::collections::HashMap;
use thiserror::Error;

/// Errors from alias table parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GazetteerError {
    /// A comma-delimited segment did not have a `key=value` shape with a
    /// non-empty key and value. Carries the offending segment verbatim.
    #[error("malformed alias entry {segment:?}: expected key=value")]
    MalformedEntry { segment: String },
}

/// Parse a comma/equals-delimited alias table into a key→value mapping.
///
/// Segments are split on the FIRST `=`, so a value may itself contain
/// `=`. Keys and values are trimmed. Whitespace-only segments (e.g.,
/// from a trailing comma) are skipped. Any segment without a well-formed
/// `key=value` shape aborts the whole parse — no partial mapping is
/// returned.
///
/// The returned mapping preserves input order so that downstream key
/// normalization resolves duplicates deterministically (later wins).
pub fn parse_location_data(raw: &str) -> Result<IndexMap<String, String>, GazetteerError> {
    let mut entries = IndexMap::new();

    for segment in raw.split(',') {
        if segment.trim().is_empty() {
            continue;
        }

        let (key, value) = match segment.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => {
                return Err(GazetteerError::MalformedEntry {
                    segment: segment.to_string(),
                })
            }
        };
        if key.is_empty() || value.is_empty() {
            return Err(GazetteerError::MalformedEntry {
                segment: segment.to_string(),
            });
        }

        entries.insert(key.to_string(), value.to_string());
    }

    Ok(entries)
}

/// An immutable alias→canonical-label lookup table with a category name.
///
/// Keys are normalized (trim + lowercase) at construction; canonical
/// labels are stored as supplied. No entry is ever added or removed
/// after construction, so lookups are safe from concurrent threads.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    /// What kind of entity this gazetteer resolves (e.g., "location").
    /// Stored verbatim, no normalization.
    category: String,
    /// Normalized alias → canonical label.
    entries: HashMap<String, String>,
}

impl Gazetteer {
    /// Build a gazetteer from a category label and parsed alias entries.
    ///
    /// Entries are inserted in iteration order; when two keys collide
    /// after normalization, the later one silently overwrites the
    /// earlier. That is the documented collision policy, not an error.
    pub fn new(
        category: impl Into<String>,
        entries: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.trim().to_lowercase(), value))
            .collect();
        Self {
            category: category.into(),
            entries,
        }
    }

    /// Parse an alias table and build a gazetteer in one step.
    pub fn from_raw(category: impl Into<String>, raw: &str) -> Result<Self, GazetteerError> {
        Ok(Self::new(category, parse_location_data(raw)?))
    }

    /// The category label supplied at construction.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Look up a token, normalizing it the same way keys were normalized.
    ///
    /// Returns the canonical label when the trimmed, lowercased token is
    /// a known alias.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.entries
            .get(&token.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Number of distinct normalized aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Scenario: Well-formed alias tables parse into ordered mappings ---

    #[test]
    fn parses_basic_alias_table() {
        let entries = parse_location_data("Ill.=Illinois, VA=Virginia").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.get("Ill."), Some(&"Illinois".to_string()));
        assert_eq!(entries.get("VA"), Some(&"Virginia".to_string()));
    }

    #[test]
    fn trims_keys_and_values() {
        let entries = parse_location_data("  Ill.  =  Illinois  ").unwrap();
        assert_eq!(entries.get("Ill."), Some(&"Illinois".to_string()));
    }

    #[test]
    fn skips_whitespace_only_segments() {
        // Trailing comma and a blank segment in the middle
        let entries = parse_location_data("A=Alpha, , B=Beta,").unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_mapping() {
        assert!(parse_location_data("").unwrap().is_empty());
        assert!(parse_location_data("  ,  , ").unwrap().is_empty());
    }

    #[test]
    fn value_may_contain_equals() {
        // Split on the first '=' only
        let entries = parse_location_data("key=a=b").unwrap();
        assert_eq!(entries.get("key"), Some(&"a=b".to_string()));
    }

    // --- Scenario: Malformed segments abort parsing with no partial mapping ---

    #[test]
    fn segment_without_equals_is_rejected() {
        let err = parse_location_data("Ill.=Illinois, BadEntryNoEquals").unwrap_err();
        assert_eq!(
            err,
            GazetteerError::MalformedEntry {
                segment: " BadEntryNoEquals".to_string()
            }
        );
    }

    #[test]
    fn empty_key_or_value_is_rejected() {
        assert!(parse_location_data("=Illinois").is_err());
        assert!(parse_location_data("VA=").is_err());
        assert!(parse_location_data(" = ").is_err());
    }

    #[test]
    fn error_carries_the_offending_segment() {
        let err = parse_location_data("A=Alpha, broken chunk, B=Beta").unwrap_err();
        match err {
            GazetteerError::MalformedEntry { segment } => {
                assert!(segment.contains("broken chunk"));
            }
        }
    }

    // --- Scenario: Construction normalizes keys, later duplicates win ---

    #[test]
    fn lookup_is_case_insensitive_after_construction() {
        let gazetteer = Gazetteer::from_raw("location", "Ill.=Illinois, VA=Virginia").unwrap();
        assert_eq!(gazetteer.resolve("ill."), Some("Illinois"));
        assert_eq!(gazetteer.resolve("ILL."), Some("Illinois"));
        assert_eq!(gazetteer.resolve(" va "), Some("Virginia"));
        assert_eq!(gazetteer.resolve("tx"), None);
    }

    #[test]
    fn later_colliding_key_overwrites_earlier() {
        let gazetteer = Gazetteer::from_raw("location", "VA=Virginia1, va=Virginia2").unwrap();
        assert_eq!(gazetteer.len(), 1);
        assert_eq!(gazetteer.resolve("VA"), Some("Virginia2"));
    }

    #[test]
    fn canonical_labels_are_not_normalized() {
        let gazetteer = Gazetteer::from_raw("location", "nyc=New York City").unwrap();
        assert_eq!(gazetteer.resolve("NYC"), Some("New York City"));
    }

    #[test]
    fn category_is_stored_verbatim() {
        let gazetteer = Gazetteer::new("US States ", Vec::new());
        assert_eq!(gazetteer.category(), "US States ");
        assert!(gazetteer.is_empty());
    }

    #[test]
    fn malformed_table_fails_construction_outright() {
        assert!(Gazetteer::from_raw("location", "Ill.=Illinois, nope").is_err());
    }
}
