//! Input router — dispatches pipeline input to matching adapters
//!
//! Fan-out: every adapter whose `input_kind()` matches receives the
//! input, each with its own sink. One adapter's failure never affects
//! another; errors are collected in the route result.

use super::port::{Adapter, AdapterInput, AdapterSink};
use std::sync::Arc;

/// Result of routing one input.
#[derive(Debug)]
pub struct RouteResult {
    /// How many adapters were invoked
    pub adapters_invoked: usize,
    /// Errors from individual adapters (adapter_id, error)
    pub errors: Vec<(String, String)>,
}

/// Dispatches input to all adapters whose `input_kind()` matches.
#[derive(Default)]
pub struct InputRouter {
    adapters: Vec<Arc<dyn Adapter>>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, adapter: Arc<dyn Adapter>) {
        self.adapters.push(adapter);
    }

    /// Route input to all matching adapters, sequentially.
    pub async fn route(
        &self,
        input: &AdapterInput,
        sink_factory: &dyn Fn(&str) -> Box<dyn AdapterSink>,
    ) -> RouteResult {
        let mut result = RouteResult {
            adapters_invoked: 0,
            errors: Vec::new(),
        };

        for adapter in self.adapters.iter().filter(|a| a.input_kind() == input.kind) {
            let sink = sink_factory(adapter.id());
            result.adapters_invoked += 1;
            tracing::debug!(adapter = %adapter.id(), kind = %input.kind, "routing input");

            if let Err(e) = adapter.process(input, sink.as_ref()).await {
                tracing::warn!(adapter = %adapter.id(), error = %e, "adapter failed");
                result.errors.push((adapter.id().to_string(), e.to_string()));
            }
        }

        result
    }
}
