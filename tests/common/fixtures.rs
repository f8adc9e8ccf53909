//! Test fixtures for integration tests.
//!
//! [`TestCore`] stands in for a search core: documents are added with or
//! without a store value and queried back through the writer registry using
//! request-style parameters (`q`, `fl`, `wt`).

use std::path::PathBuf;

use replay::config::Config;
use replay::document::{MatchedDocument, QueryResponse};
use replay::writer::{WriterError, WriterRegistry};

pub const MATCH_ALL: &str = "*:*";

/// Indexed fields every fixture document carries besides the store field.
pub const DEFAULT_FIELDS: &[(&str, &str)] = &[
    ("mbid", "5b11f4ce-a62d-471e-81fc-a69a8278c7da"),
    ("artist", "Nirvana"),
    ("type", "Group"),
];

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Reads `tests/fixtures/<name>`.
pub fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Expected response fixture: `<corename>-list.<extension>`.
pub fn expected_response(core_name: &str, extension: &str) -> String {
    read_fixture(&format!("{core_name}-list.{extension}"))
}

/// A single core with its own configuration and documents.
pub struct TestCore {
    config: Config,
    registry: WriterRegistry,
    documents: Vec<MatchedDocument>,
}

impl TestCore {
    pub fn new(core_name: &str) -> Self {
        Self::with_config(Config::for_core(core_name))
    }

    pub fn with_config(config: Config) -> Self {
        let registry = WriterRegistry::with_defaults(&config);
        Self {
            config,
            registry,
            documents: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Adds the fixture document.
    ///
    /// With `with_store`, the store field is populated with `store_value`, or
    /// with `tests/fixtures/<corename>.xml` when `store_value` is `None`.
    pub fn add_document(&mut self, with_store: bool, store_value: Option<&str>) {
        let mut document = MatchedDocument::new();
        if with_store {
            let stored = match store_value {
                Some(value) => value.to_string(),
                None => read_fixture(&format!("{}.xml", self.config.core_name)),
            };
            document.add_field(self.config.store_field.clone(), stored);
        }
        for (name, value) in DEFAULT_FIELDS {
            document.add_field(*name, *value);
        }
        self.documents.push(document);
    }

    pub fn add(&mut self, document: MatchedDocument) {
        self.documents.push(document);
    }

    pub fn clear(&mut self) {
        self.documents.clear();
    }

    /// Runs a request against the core. Only the match-all query is supported.
    pub fn query(&self, params: &[(&str, &str)]) -> Result<String, WriterError> {
        let param = |key: &str| {
            params
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| *value)
        };

        assert_eq!(param("q").unwrap_or(MATCH_ALL), MATCH_ALL, "unsupported query");
        let wt = param("wt").expect("requests must name a writer");
        let fields = self.config.field_list(param("fl"));
        let response = QueryResponse::new(self.documents.clone());

        let mut out = Vec::new();
        self.registry.write(wt, &response, &fields, &mut out)?;
        Ok(String::from_utf8(out).expect("writers emit UTF-8"))
    }
}
