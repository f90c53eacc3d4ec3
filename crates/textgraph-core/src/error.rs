//! Error types for textgraph.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Empty document set, or a document whose text yields no tokens.
    /// Also covers a degenerate corpus with zero total token count, which
    /// is caught before any probability division.
    #[error("Invalid corpus: {0}")]
    InvalidCorpus(String),

    /// Two blocks were computed against different word/document orderings.
    /// Fatal: assembly aborts rather than emit a corrupted matrix.
    #[error("Vocabulary mismatch: {0}")]
    VocabularyMismatch(String),

    /// Node count exceeds the configured ceiling for dense allocation.
    #[error("Graph too large: {nodes} nodes exceeds configured limit of {limit}")]
    GraphTooLarge { nodes: usize, limit: usize },

    #[error("Read error: {0}")]
    Read(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
