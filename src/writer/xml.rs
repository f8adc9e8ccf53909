use std::io::Write;

use tracing::instrument;

use crate::config::Config;
use crate::constants::{
    DEFAULT_CORE_NAME, XML_DECLARATION, XML_FORMAT, XML_METADATA_ELEMENT, list_name,
};
use crate::document::{QueryResponse, RequestedFieldList};
use crate::payload::encode_xml;

use super::error::WriterError;
use super::replay::{ReplayedResponse, StoreReplay};
use super::{ResponseWriter, emit};

/// Replays stored payloads as an XML list.
///
/// ```text
/// <?xml version="1.0" encoding="UTF-8" standalone="yes"?>
/// <metadata><artist-list count="1" offset="0"><artist id=".." score="100">..</artist></artist-list></metadata>
/// ```
#[derive(Debug, Clone)]
pub struct XmlListWriter {
    core_name: String,
    replay: StoreReplay,
}

impl Default for XmlListWriter {
    fn default() -> Self {
        Self::new(DEFAULT_CORE_NAME, StoreReplay::default())
    }
}

impl XmlListWriter {
    pub fn new(core_name: impl Into<String>, replay: StoreReplay) -> Self {
        Self {
            core_name: core_name.into(),
            replay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.core_name.clone(), StoreReplay::from_config(config))
    }

    pub fn replay(&self) -> &StoreReplay {
        &self.replay
    }

    /// Renders an already validated response.
    pub fn render(&self, replayed: &ReplayedResponse) -> String {
        let list = list_name(&self.core_name);
        let mut body = String::with_capacity(256);

        body.push_str(XML_DECLARATION);
        body.push('\n');
        body.push_str(&format!("<{XML_METADATA_ELEMENT}>"));
        body.push_str(&format!(
            "<{list} count=\"{}\" offset=\"{}\">",
            replayed.num_found, replayed.start
        ));

        for document in &replayed.documents {
            match document.score {
                Some(score) => {
                    let mut root = document.payload.root().clone();
                    root.set_attribute(self.replay.score_field(), score.to_string());
                    encode_xml(&root, &mut body);
                }
                None => encode_xml(document.payload.root(), &mut body),
            }
        }

        body.push_str(&format!("</{list}></{XML_METADATA_ELEMENT}>\n"));
        body
    }
}

impl ResponseWriter for XmlListWriter {
    fn format(&self) -> &str {
        XML_FORMAT
    }

    fn content_type(&self) -> &'static str {
        "application/xml; charset=utf-8"
    }

    #[instrument(skip_all, fields(format = XML_FORMAT, documents = response.documents.len()))]
    fn write_response(
        &self,
        response: &QueryResponse,
        fields: &RequestedFieldList,
        out: &mut dyn Write,
    ) -> Result<(), WriterError> {
        let replayed = self.replay.prepare(response, fields)?;
        emit(out, self.render(&replayed).as_bytes())
    }
}
