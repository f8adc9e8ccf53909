use thiserror::Error;

use crate::payload::UnmarshalError;

/// Message for a matched document without a store value.
pub const NO_STORE_VALUE: &str =
    "The document has no stored payload: it was indexed without a store field value";

/// Message for a field list that does not request the score.
pub const SCORE_NOT_IN_FIELD_LIST: &str =
    "The score field is not in the field list; add it to 'fl' (for example fl=*,score)";

pub use crate::payload::UNMARSHALLING_STORE_FAILED;

/// Errors surfaced by a [`ResponseWriter`](super::ResponseWriter).
///
/// Every variant aborts the whole response; nothing is written to the stream.
#[derive(Debug, Error)]
pub enum WriterError {
    /// The request's field list does not include the score.
    #[error("{}", SCORE_NOT_IN_FIELD_LIST)]
    ScoreNotInFieldList,

    /// The document at `position` (0-based, in matched order) has no store value.
    #[error("{}", NO_STORE_VALUE)]
    NoStoreValue { position: usize },

    /// A stored payload could not be decoded.
    #[error(transparent)]
    Unmarshal(#[from] UnmarshalError),

    #[error("no response writer registered for format '{format}'")]
    UnknownFormat { format: String },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write response: {0}")]
    Io(#[from] std::io::Error),
}

impl WriterError {
    /// Returns `true` if the client can fix the error by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            WriterError::ScoreNotInFieldList | WriterError::UnknownFormat { .. }
        )
    }

    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            WriterError::ScoreNotInFieldList => "score_not_in_field_list",
            WriterError::NoStoreValue { .. } => "no_store_value",
            WriterError::Unmarshal(_) => "unmarshal",
            WriterError::UnknownFormat { .. } => "unknown_format",
            WriterError::Serialization(_) => "serialization",
            WriterError::Io(_) => "io",
        }
    }
}
