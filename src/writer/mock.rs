//! Mock writer for registry consumers.

use std::io::Write;
use std::sync::RwLock;

use crate::document::{QueryResponse, RequestedFieldList};

use super::ResponseWriter;
use super::error::WriterError;

/// Writes a fixed body and records the field lists it was called with.
#[derive(Debug, Default)]
pub struct MockResponseWriter {
    format: String,
    body: String,
    calls: RwLock<Vec<String>>,
}

impl MockResponseWriter {
    pub fn new(format: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            body: body.into(),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Field lists (as `fl` strings) of every call so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl ResponseWriter for MockResponseWriter {
    fn format(&self) -> &str {
        &self.format
    }

    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn write_response(
        &self,
        _response: &QueryResponse,
        fields: &RequestedFieldList,
        out: &mut dyn Write,
    ) -> Result<(), WriterError> {
        if let Ok(mut calls) = self.calls.write() {
            calls.push(fields.to_string());
        }
        out.write_all(self.body.as_bytes())?;
        Ok(())
    }
}
