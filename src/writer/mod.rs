//! Response writers that replay stored payloads.
//!
//! A [`ResponseWriter`] is selected by an output-format token through the
//! [`WriterRegistry`]. The replay writers ([`XmlListWriter`], [`JsonListWriter`])
//! share [`StoreReplay`], which validates the whole response before a single
//! byte is rendered:
//!
//! ```text
//! Start -> ScoreChecked -> { StoreChecked -> Extracted }* -> rendered -> Done
//!                  \______________ any failure ______________/-> Failed
//! ```
//!
//! Rendering goes to an in-memory buffer that reaches the stream in one
//! `write_all`, so a failed response leaves the stream untouched.

pub mod error;
mod json;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod registry;
mod replay;
mod xml;


use std::io::Write;

pub use error::{NO_STORE_VALUE, SCORE_NOT_IN_FIELD_LIST, UNMARSHALLING_STORE_FAILED, WriterError};
pub use json::JsonListWriter;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockResponseWriter;
pub use registry::WriterRegistry;
pub use replay::{ReplayedDocument, ReplayedResponse, StoreReplay, normalize_score};
pub use xml::XmlListWriter;

use crate::document::{QueryResponse, RequestedFieldList};

/// Serializes a query response in one output format.
pub trait ResponseWriter: Send + Sync {
    /// Format token (`wt`) this writer answers to.
    fn format(&self) -> &str;

    /// MIME type of the rendered output.
    fn content_type(&self) -> &'static str;

    /// Writes the full response for `response` to `out`, or nothing on error.
    fn write_response(
        &self,
        response: &QueryResponse,
        fields: &RequestedFieldList,
        out: &mut dyn Write,
    ) -> Result<(), WriterError>;
}

pub(crate) fn emit(out: &mut dyn Write, body: &[u8]) -> Result<(), WriterError> {
    out.write_all(body)?;
    out.flush()?;
    Ok(())
}
