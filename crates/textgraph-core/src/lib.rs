//! Textgraph Core — document model, graph output bundle, errors, configuration.

pub mod config;
pub mod document;
pub mod error;
pub mod graph;

pub use config::BuildConfig;
pub use document::Document;
pub use error::{Error, Result};
pub use graph::{GraphMatrix, GraphStats};
