use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::Config;
use crate::document::{QueryResponse, RequestedFieldList};

use super::error::WriterError;
use super::json::JsonListWriter;
use super::xml::XmlListWriter;
use super::ResponseWriter;

/// Maps output-format tokens (`wt`) to writers.
#[derive(Clone, Default)]
pub struct WriterRegistry {
    writers: HashMap<String, Arc<dyn ResponseWriter>>,
}

impl fmt::Debug for WriterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterRegistry")
            .field("formats", &self.formats())
            .finish()
    }
}

impl WriterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding [`XmlListWriter`] and [`JsonListWriter`] built from `config`.
    pub fn with_defaults(config: &Config) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(XmlListWriter::from_config(config)));
        registry.register(Arc::new(JsonListWriter::from_config(config)));
        registry
    }

    /// Registers `writer` under its format token, returning the writer it replaced.
    pub fn register(&mut self, writer: Arc<dyn ResponseWriter>) -> Option<Arc<dyn ResponseWriter>> {
        let format = writer.format().to_string();
        debug!(format = %format, "Registering response writer");
        let previous = self.writers.insert(format.clone(), writer);
        if previous.is_some() {
            warn!(format = %format, "Replaced an existing response writer");
        }
        previous
    }

    pub fn get(&self, format: &str) -> Option<&Arc<dyn ResponseWriter>> {
        self.writers.get(format)
    }

    /// Registered format tokens, sorted.
    pub fn formats(&self) -> Vec<&str> {
        let mut formats: Vec<&str> = self.writers.keys().map(String::as_str).collect();
        formats.sort_unstable();
        formats
    }

    /// Dispatches to the writer registered for `format`.
    pub fn write(
        &self,
        format: &str,
        response: &QueryResponse,
        fields: &RequestedFieldList,
        out: &mut dyn Write,
    ) -> Result<(), WriterError> {
        let writer = self.get(format).ok_or_else(|| WriterError::UnknownFormat {
            format: format.to_string(),
        })?;
        writer.write_response(response, fields, out)
    }
}
