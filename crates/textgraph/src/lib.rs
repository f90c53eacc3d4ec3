//! Textgraph — graph-based text representation.
//!
//! Converts a labeled text corpus into one heterogeneous graph for
//! graph-convolutional learning: word nodes linked by PMI association,
//! document nodes linked to words by TF-IDF relevance. [`TextGcn`] wires
//! the full pipeline: record reader → normalization → graph builder →
//! petgraph presenter.
//!
//! ```
//! use serde_json::json;
//! use textgraph::TextGcn;
//!
//! let corpus = json!([
//!     {"text": "The cat sat.", "label": "A"},
//!     {"text": "The dog sat.", "label": "B"},
//! ]);
//! let graph = TextGcn::new().graph(&corpus).unwrap();
//! assert_eq!(graph.node_count(), 6); // 4 words + 2 documents
//! ```

use petgraph::graph::UnGraph;
use serde_json::Value;
use tracing::debug;

pub use textgraph_build::{
    document_relevance_matrix, word_association_matrix, GraphBuilder, TextGcnBuilder, Vocabulary,
};
pub use textgraph_core::{BuildConfig, Document, Error, GraphMatrix, GraphStats, Result};
pub use textgraph_ingest::{ProcessingPipeline, RecordReader, TextProcessor};
pub use textgraph_present::{to_petgraph, GraphNode};

/// End-to-end TextGCN graph construction.
pub struct TextGcn {
    reader: RecordReader,
    pipeline: ProcessingPipeline,
    builder: TextGcnBuilder,
}

impl TextGcn {
    /// Standard pipeline (lowercase + punctuation stripping) and default
    /// build configuration.
    pub fn new() -> Self {
        Self {
            reader: RecordReader::new(),
            pipeline: ProcessingPipeline::standard(),
            builder: TextGcnBuilder::new(),
        }
    }

    pub fn with_config(config: BuildConfig) -> Self {
        Self {
            builder: TextGcnBuilder::with_config(config),
            ..Self::new()
        }
    }

    /// Replace the normalization pipeline.
    pub fn with_pipeline(mut self, pipeline: ProcessingPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Build the graph matrix for a JSON corpus source
    /// (an array of `{"text": ..., "label": ...}` objects).
    pub fn graph_matrix(&self, source: &Value) -> Result<GraphMatrix> {
        let mut documents = self.reader.read(source)?;
        self.pipeline.apply(&mut documents);
        debug!(documents = documents.len(), "corpus normalized");

        // TextGCN emits exactly one corpus-level graph.
        let mut graphs = self.builder.build_graph(&documents)?;
        Ok(graphs.remove(0))
    }

    /// Build the graph for a JSON corpus source and hand it over as a
    /// petgraph object.
    pub fn graph(&self, source: &Value) -> Result<UnGraph<GraphNode, f64>> {
        Ok(to_petgraph(&self.graph_matrix(source)?))
    }
}

impl Default for TextGcn {
    fn default() -> Self {
        Self::new()
    }
}
