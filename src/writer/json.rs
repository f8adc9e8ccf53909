use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::config::Config;
use crate::constants::{DEFAULT_CORE_NAME, JSON_FORMAT, list_name};
use crate::document::{QueryResponse, RequestedFieldList};
use crate::payload::to_json_object;

use super::error::WriterError;
use super::replay::{ReplayedResponse, StoreReplay};
use super::{ResponseWriter, emit};

/// Replays stored payloads as a JSON list.
///
/// `{"count":1,"offset":0,"artist-list":[{"id":"..","score":100,..}]}`
#[derive(Debug, Clone)]
pub struct JsonListWriter {
    core_name: String,
    replay: StoreReplay,
}

struct JsonList<'a> {
    count: u64,
    offset: u64,
    list_name: &'a str,
    entities: Vec<Map<String, Value>>,
}

impl Serialize for JsonList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("count", &self.count)?;
        map.serialize_entry("offset", &self.offset)?;
        map.serialize_entry(self.list_name, &self.entities)?;
        map.end()
    }
}

impl Default for JsonListWriter {
    fn default() -> Self {
        Self::new(DEFAULT_CORE_NAME, StoreReplay::default())
    }
}

impl JsonListWriter {
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
    pub fn render(&self, replayed: &ReplayedResponse) -> Result<Vec<u8>, WriterError> {
        let list_name = list_name(&self.core_name);
        let entities = replayed
            .documents
            .iter()
            .map(|document| {
                let mut entity = to_json_object(document.payload.root());
                if let Some(score) = document.score {
                    entity.insert(self.replay.score_field().to_string(), Value::from(score));
                }
                entity
            })
            .collect();

        let list = JsonList {
            count: replayed.num_found,
            offset: replayed.start,
            list_name: &list_name,
            entities,
        };

        let mut body = serde_json::to_vec(&list)?;
        body.push(b'\n');
        Ok(body)
    }
}

impl ResponseWriter for JsonListWriter {
    fn format(&self) -> &str {
        JSON_FORMAT
    }

    fn content_type(&self) -> &'static str {
        "application/json; charset=utf-8"
    }

    #[instrument(skip_all, fields(format = JSON_FORMAT, documents = response.documents.len()))]
    fn write_response(
        &self,
        response: &QueryResponse,
        fields: &RequestedFieldList,
        out: &mut dyn Write,
    ) -> Result<(), WriterError> {
        let replayed = self.replay.prepare(response, fields)?;
        let body = self.render(&replayed)?;
        emit(out, &body)
    }
}
