//! Port contract — input envelope, adapter trait, sink trait
//!
//! An adapter declares what input kind it consumes and processes input
//! through a sink. `emit()` is async so the adapter awaits delivery
//! feedback from the downstream port.

use crate::tagger::{GazetteerError, TextSpan};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::any::Any;
use thiserror::Error;

/// The input envelope the pipeline hands to an adapter.
#[derive(Debug)]
pub struct AdapterInput {
    /// The kind of input (matched by the router)
    pub kind: String,
    /// Opaque data payload — the adapter downcasts internally
    pub data: Box<dyn Any + Send + Sync>,
    /// Which flow this input belongs to
    pub flow_id: String,
}

impl AdapterInput {
    pub fn new(
        kind: impl Into<String>,
        data: impl Any + Send + Sync + 'static,
        flow_id: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            data: Box::new(data),
            flow_id: flow_id.into(),
        }
    }

    /// Attempt to downcast the data payload to a specific type.
    pub fn downcast_data<T: 'static>(&self) -> Option<&T> {
        self.data.downcast_ref::<T>()
    }
}

/// Typed payload for the `sentence` input kind.
#[derive(Debug, Clone)]
pub struct SentenceInput {
    pub text: String,
}

impl SentenceInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One scanned sentence with its matches.
///
/// `sentence` is the scrubbed form — the span offsets index into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSentence {
    pub sentence: String,
    pub category: String,
    pub spans: Vec<TextSpan>,
}

/// A bundle of tagged sentences pushed through a sink in one call.
#[derive(Debug, Clone, Default)]
pub struct Emission {
    pub sentences: Vec<TaggedSentence>,
}

impl Emission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sentence(mut self, tagged: TaggedSentence) -> Self {
        self.sentences.push(tagged);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// The result of an `emit()` call.
#[derive(Debug, Clone)]
pub struct EmitResult {
    /// Number of tagged sentences accepted by the sink
    pub sentences_committed: usize,
    /// Total spans across the accepted sentences
    pub spans_committed: usize,
}

impl EmitResult {
    pub fn empty() -> Self {
        Self {
            sentences_committed: 0,
            spans_committed: 0,
        }
    }

    /// True if the emission carried nothing.
    pub fn is_noop(&self) -> bool {
        self.sentences_committed == 0
    }
}

/// Errors from adapter processing.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("invalid input: expected different data type")]
    InvalidInput,
    #[error("bad tagger configuration: {0}")]
    Config(#[from] GazetteerError),
    #[error("adapter error: {0}")]
    Internal(String),
}

/// The contract adapters implement.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Unique identifier for this adapter
    fn id(&self) -> &str;

    /// What kind of input this adapter consumes (matched by the router)
    fn input_kind(&self) -> &str;

    /// Process input, emitting results through the sink.
    ///
    /// The adapter downcasts `input.data` internally. If the downcast
    /// fails, return `Err(AdapterError::InvalidInput)`.
    async fn process(
        &self,
        input: &AdapterInput,
        sink: &dyn AdapterSink,
    ) -> Result<(), AdapterError>;
}

/// The interface through which adapters push results downstream.
#[async_trait]
pub trait AdapterSink: Send + Sync {
    async fn emit(&self, emission: Emission) -> Result<EmitResult, AdapterError>;
}
