//! Single corpus document.

use serde::{Deserialize, Serialize};

/// One text document of the corpus.
///
/// `text` is replaced in place by the normalization pipeline before graph
/// construction; nothing else mutates a document after reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Text data.
    pub text: String,
    /// Document label, if the corpus is labeled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Document name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: None,
            name: None,
        }
    }

    pub fn with_label(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: Some(label.into()),
            name: None,
        }
    }

    /// Whitespace tokens of the (already normalized) text.
    pub fn tokens(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }
}
