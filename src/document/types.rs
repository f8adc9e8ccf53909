use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// A single stored field value.
pub enum FieldValue {
    /// String / text value.
    Text(String),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
}

impl FieldValue {
    /// Returns the text content (only for [`FieldValue::Text`]).
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Int(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write!(f, "{}", value),
            FieldValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One search hit, as handed over by query execution.
pub struct MatchedDocument {
    /// Stored field values keyed by field name.
    pub fields: BTreeMap<String, Vec<FieldValue>>,
    /// Raw relevance score computed by the engine.
    pub score: f32,
}

impl Default for MatchedDocument {
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
            score: 1.0,
        }
    }
}

impl MatchedDocument {
    /// Creates a document with no fields and a score of `1.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the values of `name`.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.add_field(name, value);
        self
    }

    /// Sets the raw relevance score.
    pub fn with_score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Appends `value` to the values of `name`.
    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// Returns all values stored under `name`.
    pub fn values(&self, name: &str) -> &[FieldValue] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the first value stored under `field`, if any.
    pub fn store_value(&self, field: &str) -> Option<&FieldValue> {
        self.values(field).first()
    }

    /// Returns `true` if at least one value is stored under `name`.
    pub fn has_field(&self, name: &str) -> bool {
        !self.values(name).is_empty()
    }

    /// Builds a document whose `store_field` holds the contents of `path`.
    pub fn from_store_file(path: &Path, store_field: &str) -> io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::new().with_field(store_field, raw))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Documents matched by one query, in the order the engine returned them.
pub struct QueryResponse {
    /// Matched documents (page only).
    pub documents: Vec<MatchedDocument>,
    /// Total number of hits. `None` means `documents.len()`.
    pub num_found: Option<u64>,
    /// Offset of the first document in the full result list.
    pub start: u64,
    /// Highest score over all hits. `None` means the maximum over `documents`.
    pub max_score: Option<f32>,
}

impl QueryResponse {
    pub fn new(documents: Vec<MatchedDocument>) -> Self {
        Self {
            documents,
            ..Default::default()
        }
    }

    pub fn with_num_found(mut self, num_found: u64) -> Self {
        self.num_found = Some(num_found);
        self
    }

    pub fn with_start(mut self, start: u64) -> Self {
        self.start = start;
        self
    }

    pub fn with_max_score(mut self, max_score: f32) -> Self {
        self.max_score = Some(max_score);
        self
    }

    pub fn num_found(&self) -> u64 {
        self.num_found.unwrap_or(self.documents.len() as u64)
    }

    pub fn max_score(&self) -> f32 {
        self.max_score.unwrap_or_else(|| {
            self.documents
                .iter()
                .map(|doc| doc.score)
                .fold(0.0_f32, f32::max)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
