//! Spantag: gazetteer-based span tagging for dataflow pipelines
//!
//! The core is a single-token gazetteer tagger: an immutable alias→label
//! lookup table plus a scan operation that reports which tokens of a
//! sentence match an alias and where. Around it sits a thin pipeline
//! port layer — adapters that marshal sentences in and tagged spans out.
//!
//! # Example
//!
//! ```
//! use spantag::{Gazetteer, SpanTagger, Tagger};
//!
//! let gazetteer = Gazetteer::from_raw("location", "Ill.=Illinois, VA=Virginia").unwrap();
//! let tagger = SpanTagger::new(gazetteer);
//! let spans = tagger.scan("He moved to Ill. last year");
//! assert_eq!(spans[0].label, "Illinois");
//! ```

pub mod adapter;
pub mod tagger;

pub use adapter::{
    Adapter, AdapterError, AdapterInput, AdapterSink, CollectingSink, EmitResult, Emission,
    InputRouter, RouteResult, SentenceInput, SpanTaggerAdapter, TaggedSentence,
};
pub use tagger::{parse_location_data, scrub, Gazetteer, GazetteerError, SpanTagger, Tagger, TextSpan};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
