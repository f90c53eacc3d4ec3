//! Sequential text normalization pipeline.
//!
//! Each step is a string-to-string processor; the pipeline runs them in
//! order over each document's text before graph construction.

use once_cell::sync::Lazy;
use regex::Regex;
use textgraph_core::Document;

/// A single string-to-string normalization step.
pub trait TextProcessor: Send + Sync {
    fn process(&self, text: &str) -> String;
}

/// Runs normalization steps in order.
pub struct ProcessingPipeline {
    steps: Vec<Box<dyn TextProcessor>>,
}

impl ProcessingPipeline {
    pub fn new(steps: Vec<Box<dyn TextProcessor>>) -> Self {
        Self { steps }
    }

    /// Lowercasing plus punctuation stripping — the default preparation
    /// for vocabulary construction.
    pub fn standard() -> Self {
        Self::new(vec![Box::new(Lowercase), Box::new(StripPunctuation)])
    }

    pub fn process(&self, text: &str) -> String {
        self.steps
            .iter()
            .fold(text.to_string(), |t, step| step.process(&t))
    }

    /// Normalize every document's text in place.
    pub fn apply(&self, documents: &mut [Document]) {
        for doc in documents {
            doc.text = self.process(&doc.text);
        }
    }
}

/// Lowercases the text.
pub struct Lowercase;

impl TextProcessor for Lowercase {
    fn process(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s]+").unwrap());

/// Replaces punctuation runs with a space, so "end.Start" tokenizes as
/// two words rather than one.
pub struct StripPunctuation;

impl TextProcessor for StripPunctuation {
    fn process(&self, text: &str) -> String {
        PUNCTUATION.replace_all(text, " ").into_owned()
    }
}
