//! Core span tagging layer
//!
//! A `Gazetteer` is an immutable alias→canonical-label lookup table built
//! once from a comma/equals-delimited alias table. A `SpanTagger` owns a
//! gazetteer and scans free text for single-token matches, reporting
//! character spans into the scrubbed sentence.

mod gazetteer;
mod span;
mod span_tagger;

pub use gazetteer::{parse_location_data, Gazetteer, GazetteerError};
pub use span::TextSpan;
pub use span_tagger::{scrub, SpanTagger, Tagger};
