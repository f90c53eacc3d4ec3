//! Reader for dictionary-like corpus sources.
//!
//! Accepts a JSON array of `{"text": ..., "label": ..., "name": ...}`
//! objects and produces `Document` records. Scalar non-string values are
//! coerced to strings; a missing `text` field is an error, not a skip.

use serde_json::Value;
use textgraph_core::{Document, Error, Result};
use tracing::debug;

/// Reader for list-of-objects corpus sources.
#[derive(Debug, Default)]
pub struct RecordReader;

impl RecordReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a corpus from a JSON value.
    ///
    /// The value must be an array of objects, each carrying a `text` field.
    /// `label` and `name` are optional. Scalar values (strings, numbers,
    /// booleans) are coerced to strings; arrays, objects, and null are
    /// rejected.
    pub fn read(&self, source: &Value) -> Result<Vec<Document>> {
        let entries = source
            .as_array()
            .ok_or_else(|| Error::Read(format!("expected an array of objects, got {source}")))?;

        let mut documents = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let obj = entry
                .as_object()
                .ok_or_else(|| Error::Read(format!("record {i} is not an object: {entry}")))?;

            let text = obj
                .get("text")
                .ok_or_else(|| Error::Read(format!("record {i} is missing the text field")))?;
            let text = coerce_scalar(text)
                .ok_or_else(|| Error::Read(format!("record {i} has a non-scalar text field")))?;

            let label = match obj.get("label") {
                Some(v) => Some(
                    coerce_scalar(v).ok_or_else(|| {
                        Error::Read(format!("record {i} has a non-scalar label field"))
                    })?,
                ),
                None => None,
            };
            let name = match obj.get("name") {
                Some(v) => Some(
                    coerce_scalar(v).ok_or_else(|| {
                        Error::Read(format!("record {i} has a non-scalar name field"))
                    })?,
                ),
                None => None,
            };

            documents.push(Document { text, label, name });
        }

        debug!(count = documents.len(), "read corpus records");
        Ok(documents)
    }
}

/// Coerce a scalar JSON value to its string form. Returns None for
/// null, arrays, and objects.
fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
