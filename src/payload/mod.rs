//! Stored-payload extraction.
//!
//! A matched document may carry a reserved store field holding the full
//! document as XML, written at index time. This module decodes that string
//! into a [`ParsedPayload`] (checked against a [`PayloadSchema`]) and renders
//! payloads back out as XML or JSON.
//!
//! Decoding is all-or-nothing: either a schema-conforming tree comes back, or
//! an [`UnmarshalError`] carrying the exact raw string.

mod error;
mod json;
mod schema;
mod tree;
mod xml;


pub use error::{UNMARSHALLING_STORE_FAILED, UnmarshalError, UnmarshalReason};
pub use json::{JSON_TEXT_MEMBER, to_json, to_json_object};
pub use schema::PayloadSchema;
pub use tree::{Element, ParsedPayload, PayloadNode};
pub use xml::{decode_payload, encode_xml};

use crate::document::{FieldValue, MatchedDocument};

/// Decodes the payload stored under `store_field` of `document`.
///
/// Returns `Ok(None)` when the document has no value for `store_field`.
pub fn extract_payload(
    document: &MatchedDocument,
    store_field: &str,
    schema: &PayloadSchema,
) -> Result<Option<ParsedPayload>, UnmarshalError> {
    let Some(value) = document.store_value(store_field) else {
        return Ok(None);
    };

    match value {
        FieldValue::Text(raw) => decode_payload(raw, schema).map(Some),
        other => Err(UnmarshalError::new(
            other.to_string(),
            UnmarshalReason::NotText,
        )),
    }
}
