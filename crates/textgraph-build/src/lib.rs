//! Textgraph Build — the graph assembly engine.
//!
//! Turns a normalized corpus into one heterogeneous TextGCN graph:
//! vocabulary index → PMI word–word block + TF-IDF doc–word block →
//! block-composed adjacency matrix with identity features and a label map.

pub mod builder;
pub mod pmi;
pub mod tfidf;
pub mod vocab;

pub use builder::{GraphBuilder, TextGcnBuilder};
pub use pmi::word_association_matrix;
pub use tfidf::document_relevance_matrix;
pub use vocab::Vocabulary;
