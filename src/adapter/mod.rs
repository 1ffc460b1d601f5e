//! Pipeline port layer
//!
//! Adapters marshal a typed value out of a pipeline port, run the core
//! tagger over it, and push the result back through a sink. The
//! framework never inspects the opaque data payload — each adapter
//! downcasts internally.

mod collect;
mod port;
mod router;
mod tagger;

pub use collect::CollectingSink;
pub use port::{
    Adapter, AdapterError, AdapterInput, AdapterSink, EmitResult, Emission, SentenceInput,
    TaggedSentence,
};
pub use router::{InputRouter, RouteResult};
pub use tagger::SpanTaggerAdapter;
