//! Cross-cutting, shared constants.
//!
//! Field names here are the defaults; [`Config`](crate::config::Config) can override them.

/// Reserved field holding the pre-serialized document.
pub const DEFAULT_STORE_FIELD: &str = "_store";

/// Pseudo-field carrying the relevance score.
pub const DEFAULT_SCORE_FIELD: &str = "score";

/// Field-list entry meaning "all stored fields".
pub const FIELD_LIST_WILDCARD: &str = "*";

/// Field list applied when the request carries no `fl` parameter.
pub const DEFAULT_FIELD_LIST: &str = "*,score";

/// Core used when `REPLAY_CORE_NAME` is not set.
pub const DEFAULT_CORE_NAME: &str = "artist";

/// Root attributes every stored payload must carry by default.
pub const DEFAULT_REQUIRED_ATTRIBUTES: &[&str] = &["id"];

/// Format token selecting [`XmlListWriter`](crate::writer::XmlListWriter).
pub const XML_FORMAT: &str = "replay-xml";

/// Format token selecting [`JsonListWriter`](crate::writer::JsonListWriter).
pub const JSON_FORMAT: &str = "replay-json";

/// Upper bound of a normalised score.
pub const MAX_NORMALIZED_SCORE: u32 = 100;

/// Wrapper element around every XML response.
pub const XML_METADATA_ELEMENT: &str = "metadata";

/// Declaration written at the top of every XML response.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Returns the list element / member name for a core (`artist` -> `artist-list`).
pub fn list_name(core_name: &str) -> String {
    format!("{core_name}-list")
}
