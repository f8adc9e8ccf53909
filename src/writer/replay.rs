use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::{
    DEFAULT_CORE_NAME, DEFAULT_SCORE_FIELD, DEFAULT_STORE_FIELD, MAX_NORMALIZED_SCORE,
};
use crate::document::{QueryResponse, RequestedFieldList};
use crate::payload::{ParsedPayload, PayloadSchema, extract_payload};

use super::error::WriterError;

/// A matched document whose stored payload decoded cleanly.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayedDocument {
    pub payload: ParsedPayload,
    /// Normalised score (`0..=100`), present when the score was requested.
    pub score: Option<u32>,
}

/// Every document of a response, validated and decoded, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayedResponse {
    pub documents: Vec<ReplayedDocument>,
    pub num_found: u64,
    pub start: u64,
}

/// Validation and extraction shared by all replay writers.
///
/// [`prepare`](StoreReplay::prepare) runs the whole response through the
/// preconditions before anything is rendered:
///
/// 1. the score must be in the field list (once per response, when required);
/// 2. each document, in matched order, must carry a store value;
/// 3. each store value must decode under the schema.
///
/// The first failure aborts the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreReplay {
    store_field: String,
    score_field: String,
    schema: PayloadSchema,
    require_score: bool,
}

impl Default for StoreReplay {
    fn default() -> Self {
        Self::new(PayloadSchema::new(DEFAULT_CORE_NAME))
    }
}

impl StoreReplay {
    /// Default field names, score required.
    pub fn new(schema: PayloadSchema) -> Self {
        Self {
            store_field: DEFAULT_STORE_FIELD.to_string(),
            score_field: DEFAULT_SCORE_FIELD.to_string(),
            schema,
            require_score: true,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            store_field: config.store_field.clone(),
            score_field: config.score_field.clone(),
            schema: config.schema(),
            require_score: config.require_score,
        }
    }

    pub fn with_store_field(mut self, field: impl Into<String>) -> Self {
        self.store_field = field.into();
        self
    }

    pub fn with_score_field(mut self, field: impl Into<String>) -> Self {
        self.score_field = field.into();
        self
    }

    pub fn with_require_score(mut self, require_score: bool) -> Self {
        self.require_score = require_score;
        self
    }

    pub fn store_field(&self) -> &str {
        &self.store_field
    }

    pub fn score_field(&self) -> &str {
        &self.score_field
    }

    pub fn schema(&self) -> &PayloadSchema {
        &self.schema
    }

    pub fn require_score(&self) -> bool {
        self.require_score
    }

    /// Validates `response` against `fields` and decodes every stored payload.
    pub fn prepare(
        &self,
        response: &QueryResponse,
        fields: &RequestedFieldList,
    ) -> Result<ReplayedResponse, WriterError> {
        let include_score = fields.wants_score(&self.score_field);
        if self.require_score && !include_score {
            debug!(fl = %fields, score_field = %self.score_field, "Score missing from field list");
            return Err(WriterError::ScoreNotInFieldList);
        }

        let max_score = response.max_score();
        let mut documents = Vec::with_capacity(response.documents.len());

        for (position, document) in response.documents.iter().enumerate() {
            let payload = match extract_payload(document, &self.store_field, &self.schema) {
                Ok(Some(payload)) => payload,
                Ok(None) => {
                    warn!(position, store_field = %self.store_field, "Document has no store value");
                    return Err(WriterError::NoStoreValue { position });
                }
                Err(err) => {
                    warn!(
                        position,
                        reason = %err.reason,
                        raw_len = err.raw_value.len(),
                        "Failed to unmarshal stored payload"
                    );
                    return Err(err.into());
                }
            };

            let score = include_score.then(|| normalize_score(document.score, max_score));
            debug!(position, root = %payload.root().name, score, "Replayed stored payload");

            documents.push(ReplayedDocument { payload, score });
        }

        Ok(ReplayedResponse {
            documents,
            num_found: response.num_found(),
            start: response.start,
        })
    }
}

/// Scales `score` against `max_score` to an integer in `0..=100` (truncating).
///
/// A non-positive `max_score` yields `100`.
pub fn normalize_score(score: f32, max_score: f32) -> u32 {
    if max_score.is_nan() || max_score <= 0.0 {
        return MAX_NORMALIZED_SCORE;
    }
    let scaled = (score / max_score * MAX_NORMALIZED_SCORE as f32).floor();
    // NaN casts to 0
    scaled.clamp(0.0, MAX_NORMALIZED_SCORE as f32) as u32
}
