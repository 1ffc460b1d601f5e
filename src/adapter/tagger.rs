//! Span tagger adapter — marshals a sentence through the core tagger
//!
//! Consumes the `sentence` input kind. Always emits exactly one
//! `TaggedSentence` per input, even when no token matched — a port is a
//! 1-in/1-out marshaler, and downstream components observe "no match"
//! explicitly rather than by absence.

use super::port::{
    Adapter, AdapterError, AdapterInput, AdapterSink, Emission, SentenceInput, TaggedSentence,
};
use crate::tagger::{scrub, Gazetteer, SpanTagger, Tagger};
use async_trait::async_trait;
use std::sync::Arc;

/// Port component wrapping a span tagger.
pub struct SpanTaggerAdapter {
    adapter_id: String,
    tagger: Arc<dyn Tagger>,
}

impl std::fmt::Debug for SpanTaggerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanTaggerAdapter")
            .field("adapter_id", &self.adapter_id)
            .finish_non_exhaustive()
    }
}

impl SpanTaggerAdapter {
    pub fn new(adapter_id: impl Into<String>, tagger: Arc<dyn Tagger>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            tagger,
        }
    }

    /// Build the gazetteer and tagger inline from a raw alias table.
    ///
    /// A malformed alias entry fails construction outright — no adapter
    /// with a partial gazetteer is ever returned.
    pub fn from_alias_table(
        adapter_id: impl Into<String>,
        category: impl Into<String>,
        raw: &str,
    ) -> Result<Self, AdapterError> {
        let gazetteer = Gazetteer::from_raw(category, raw)?;
        Ok(Self::new(adapter_id, Arc::new(SpanTagger::new(gazetteer))))
    }
}

#[async_trait]
impl Adapter for SpanTaggerAdapter {
    fn id(&self) -> &str {
        &self.adapter_id
    }

    fn input_kind(&self) -> &str {
        "sentence"
    }

    async fn process(
        &self,
        input: &AdapterInput,
        sink: &dyn AdapterSink,
    ) -> Result<(), AdapterError> {
        let sentence = input
            .downcast_data::<SentenceInput>()
            .ok_or(AdapterError::InvalidInput)?;

        let spans = self.tagger.scan(&sentence.text);
        tracing::debug!(
            adapter = %self.adapter_id,
            matches = spans.len(),
            "scanned sentence"
        );

        let tagged = TaggedSentence {
            sentence: scrub(&sentence.text),
            category: self.tagger.category().to_string(),
            spans,
        };
        sink.emit(Emission::new().with_sentence(tagged)).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::collect::CollectingSink;

    fn state_adapter() -> SpanTaggerAdapter {
        SpanTaggerAdapter::from_alias_table("state-tagger", "location", "Ill.=Illinois, VA=Virginia")
            .unwrap()
    }

    // --- Scenario: A matching sentence flows through to the sink ---

    #[tokio::test]
    async fn emits_tagged_sentence_with_spans() {
        let adapter = state_adapter();
        let sink = CollectingSink::new();

        let input = AdapterInput::new(
            "sentence",
            SentenceInput::new("He moved to Ill. last year"),
            "flow-1",
        );
        adapter.process(&input, &sink).await.unwrap();

        let collected = sink.collected();
        assert_eq!(collected.len(), 1);
        let tagged = &collected[0];
        assert_eq!(tagged.category, "location");
        assert_eq!(tagged.spans.len(), 1);
        assert_eq!(tagged.spans[0].label, "Illinois");
        // Offsets index into the emitted (scrubbed) sentence
        let span = &tagged.spans[0];
        assert_eq!(&tagged.sentence[span.start..span.end], "Ill.");
    }

    // --- Scenario: No match still produces one output value ---

    #[tokio::test]
    async fn emits_even_when_nothing_matches() {
        let adapter = state_adapter();
        let sink = CollectingSink::new();

        let input = AdapterInput::new(
            "sentence",
            SentenceInput::new("The weather is nice today"),
            "flow-1",
        );
        adapter.process(&input, &sink).await.unwrap();

        let collected = sink.collected();
        assert_eq!(collected.len(), 1);
        assert!(collected[0].spans.is_empty());
    }

    // --- Scenario: Wrong payload type is an explicit error ---

    #[tokio::test]
    async fn wrong_payload_type_is_invalid_input() {
        let adapter = state_adapter();
        let sink = CollectingSink::new();

        let input = AdapterInput::new("sentence", 42u64, "flow-1");
        let err = adapter.process(&input, &sink).await.unwrap_err();
        assert!(matches!(err, AdapterError::InvalidInput));
        assert!(sink.collected().is_empty());
    }

    // --- Scenario: Malformed alias table fails adapter construction ---

    #[test]
    fn malformed_alias_table_is_a_config_error() {
        let err = SpanTaggerAdapter::from_alias_table(
            "state-tagger",
            "location",
            "Ill.=Illinois, BadEntryNoEquals",
        )
        .unwrap_err();
        assert!(matches!(err, AdapterError::Config(_)));
    }
}
