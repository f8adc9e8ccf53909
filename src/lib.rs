//! Replay library crate (used by the `replay` binary and integration tests).
//!
//! Search responses normally re-serialize every hit from its indexed fields.
//! The writers in this crate instead replay a pre-serialized document stored
//! with each hit (the *store field*), after validating that the request and
//! the stored data fit the writer's contract.
//!
//! # Public API Surface
//!
//! ## Input
//! - [`MatchedDocument`], [`FieldValue`], [`QueryResponse`] - hits handed over by the engine
//! - [`RequestedFieldList`] - the client's `fl`
//!
//! ## Extraction
//! - [`decode_payload`], [`extract_payload`], [`PayloadSchema`], [`ParsedPayload`]
//! - [`UnmarshalError`] - carries the raw stored value verbatim
//!
//! ## Writers
//! - [`ResponseWriter`], [`XmlListWriter`], [`JsonListWriter`], [`WriterRegistry`]
//! - [`StoreReplay`] - validation shared by the writers
//! - [`WriterError`] and the user-facing messages [`NO_STORE_VALUE`],
//!   [`SCORE_NOT_IN_FIELD_LIST`], [`UNMARSHALLING_STORE_FAILED`]
//!
//! ## Test/Mock Support
//! [`MockResponseWriter`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod document;
pub mod payload;
pub mod writer;

pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_FIELD_LIST, DEFAULT_SCORE_FIELD, DEFAULT_STORE_FIELD, FIELD_LIST_WILDCARD, JSON_FORMAT,
    XML_FORMAT,
};
pub use document::{FieldValue, MatchedDocument, QueryResponse, RequestedFieldList};
pub use payload::{
    Element, ParsedPayload, PayloadNode, PayloadSchema, UnmarshalError, UnmarshalReason,
    decode_payload, encode_xml, extract_payload, to_json,
};
#[cfg(any(test, feature = "mock"))]
pub use writer::MockResponseWriter;
pub use writer::{
    JsonListWriter, NO_STORE_VALUE, ReplayedDocument, ReplayedResponse, ResponseWriter,
    SCORE_NOT_IN_FIELD_LIST, StoreReplay, UNMARSHALLING_STORE_FAILED, WriterError,
    WriterRegistry, XmlListWriter, normalize_score,
};
