//! Collecting sink — in-memory port endpoint
//!
//! Stores every emitted sentence behind a shared mutex. Used by the CLI
//! and by tests as the downstream end of the pipeline; clones share the
//! same buffer.

use super::port::{AdapterError, AdapterSink, EmitResult, Emission, TaggedSentence};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    collected: Arc<Mutex<Vec<TaggedSentence>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn collected(&self) -> Vec<TaggedSentence> {
        self.collected.lock().unwrap().clone()
    }

    /// Take everything emitted so far, leaving the buffer empty.
    pub fn drain(&self) -> Vec<TaggedSentence> {
        std::mem::take(&mut *self.collected.lock().unwrap())
    }
}

#[async_trait]
impl AdapterSink for CollectingSink {
    async fn emit(&self, emission: Emission) -> Result<EmitResult, AdapterError> {
        let mut result = EmitResult::empty();
        let mut collected = self
            .collected
            .lock()
            .map_err(|e| AdapterError::Internal(format!("sink poisoned: {}", e)))?;

        for tagged in emission.sentences {
            result.sentences_committed += 1;
            result.spans_committed += tagged.spans.len();
            collected.push(tagged);
        }

        Ok(result)
    }
}
