//! Textgraph Ingest — corpus reading and text normalization.

pub mod pipeline;
pub mod reader;
pub mod stem;

pub use pipeline::{Lowercase, ProcessingPipeline, StripPunctuation, TextProcessor};
pub use reader::RecordReader;
pub use stem::Stemmer;
