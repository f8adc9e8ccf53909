use thiserror::Error;

/// Prefix of every unmarshalling error message; the raw stored value follows it verbatim.
pub const UNMARSHALLING_STORE_FAILED: &str = "Unable to unmarshal the stored document: ";

/// Why a stored payload could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnmarshalReason {
    #[error("malformed XML: {0}")]
    Syntax(String),

    #[error("no root element")]
    NoRootElement,

    #[error("more than one root element (second: '{second}')")]
    MultipleRoots { second: String },

    #[error("text outside the root element")]
    TextOutsideRoot,

    #[error("element '{name}' is never closed")]
    UnclosedElement { name: String },

    #[error("unexpected root element '{found}' (expected '{expected}')")]
    UnexpectedRoot { expected: String, found: String },

    #[error("root element is missing required attribute '{name}'")]
    MissingAttribute { name: String },

    #[error("store value is not text")]
    NotText,
}

/// A stored payload failed to decode.
///
/// The message is [`UNMARSHALLING_STORE_FAILED`] followed by the exact raw value;
/// the structured [`reason`](UnmarshalError::reason) never alters it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{}", UNMARSHALLING_STORE_FAILED, .raw_value)]
pub struct UnmarshalError {
    /// The stored string exactly as it was read from the document.
    pub raw_value: String,
    pub reason: UnmarshalReason,
}

impl UnmarshalError {
    pub fn new(raw_value: impl Into<String>, reason: UnmarshalReason) -> Self {
        Self {
            raw_value: raw_value.into(),
            reason,
        }
    }
}
