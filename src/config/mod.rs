//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `REPLAY_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;

use crate::constants::{
    DEFAULT_CORE_NAME, DEFAULT_FIELD_LIST, DEFAULT_REQUIRED_ATTRIBUTES, DEFAULT_SCORE_FIELD,
    DEFAULT_STORE_FIELD,
};
use crate::document::RequestedFieldList;
use crate::payload::PayloadSchema;

/// Writer configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `REPLAY_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Core (entity type) served by the writers; names the list element. Default: `artist`.
    pub core_name: String,

    /// Field holding the stored payload. Default: `_store`.
    pub store_field: String,

    /// Pseudo-field carrying the relevance score. Default: `score`.
    pub score_field: String,

    /// `fl` applied when the request has none. Default: `*,score`.
    pub default_field_list: String,

    /// Expected payload root element. `None` means the core name.
    pub root_element: Option<String>,

    /// Attributes the payload root must carry. Default: `id`.
    pub required_attributes: Vec<String>,

    /// Whether responses fail when the score is not requested. Default: `true`.
    pub require_score: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            core_name: DEFAULT_CORE_NAME.to_string(),
            store_field: DEFAULT_STORE_FIELD.to_string(),
            score_field: DEFAULT_SCORE_FIELD.to_string(),
            default_field_list: DEFAULT_FIELD_LIST.to_string(),
            root_element: None,
            required_attributes: DEFAULT_REQUIRED_ATTRIBUTES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            require_score: true,
        }
    }
}

impl Config {
    const ENV_CORE_NAME: &'static str = "REPLAY_CORE_NAME";
    const ENV_STORE_FIELD: &'static str = "REPLAY_STORE_FIELD";
    const ENV_SCORE_FIELD: &'static str = "REPLAY_SCORE_FIELD";
    const ENV_DEFAULT_FIELD_LIST: &'static str = "REPLAY_DEFAULT_FIELD_LIST";
    const ENV_ROOT_ELEMENT: &'static str = "REPLAY_ROOT_ELEMENT";
    const ENV_REQUIRED_ATTRIBUTES: &'static str = "REPLAY_REQUIRED_ATTRIBUTES";
    const ENV_REQUIRE_SCORE: &'static str = "REPLAY_REQUIRE_SCORE";

    /// Configuration for `core_name` with every other setting at its default.
    pub fn for_core(core_name: impl Into<String>) -> Self {
        Self {
            core_name: core_name.into(),
            ..Default::default()
        }
    }

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let core_name = Self::parse_string_from_env(Self::ENV_CORE_NAME, defaults.core_name);
        let store_field = Self::parse_string_from_env(Self::ENV_STORE_FIELD, defaults.store_field);
        let score_field = Self::parse_string_from_env(Self::ENV_SCORE_FIELD, defaults.score_field);
        let default_field_list = Self::parse_string_from_env(
            Self::ENV_DEFAULT_FIELD_LIST,
            defaults.default_field_list,
        );
        let root_element = Self::parse_optional_string_from_env(Self::ENV_ROOT_ELEMENT);
        let required_attributes =
            Self::parse_list_from_env(Self::ENV_REQUIRED_ATTRIBUTES, defaults.required_attributes);
        let require_score =
            Self::parse_bool_from_env(Self::ENV_REQUIRE_SCORE, defaults.require_score)?;

        Ok(Self {
            core_name,
            store_field,
            score_field,
            default_field_list,
            root_element,
            required_attributes,
            require_score,
        })
    }

    /// Validates names and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_name(Self::ENV_CORE_NAME, &self.core_name)?;
        Self::validate_name(Self::ENV_STORE_FIELD, &self.store_field)?;
        Self::validate_name(Self::ENV_SCORE_FIELD, &self.score_field)?;

        if let Some(ref root) = self.root_element {
            Self::validate_name(Self::ENV_ROOT_ELEMENT, root)?;
        }

        for attribute in &self.required_attributes {
            Self::validate_name(Self::ENV_REQUIRED_ATTRIBUTES, attribute)?;
        }

        if self.store_field == self.score_field {
            return Err(ConfigError::ConflictingFields {
                field: self.store_field.clone(),
            });
        }

        Ok(())
    }

    /// Root element stored payloads must have.
    pub fn root_element(&self) -> &str {
        self.root_element.as_deref().unwrap_or(&self.core_name)
    }

    /// Schema stored payloads are decoded against.
    pub fn schema(&self) -> PayloadSchema {
        PayloadSchema::new(self.root_element())
            .with_required_attributes(self.required_attributes.iter().cloned())
    }

    /// Parses the request's `fl`, or the default list when absent or blank.
    pub fn field_list(&self, fl: Option<&str>) -> RequestedFieldList {
        match fl.map(RequestedFieldList::parse) {
            Some(list) if !list.is_empty() => list,
            _ => RequestedFieldList::parse(&self.default_field_list),
        }
    }

    fn validate_name(var_name: &'static str, value: &str) -> Result<(), ConfigError> {
        if value.is_empty() {
            return Err(ConfigError::EmptyValue { name: var_name });
        }
        if value.chars().any(|c| c.is_whitespace() || c == ',') {
            return Err(ConfigError::InvalidFieldName {
                name: var_name,
                value: value.to_string(),
            });
        }
        Ok(())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_list_from_env(var_name: &str, default: Vec<String>) -> Vec<String> {
        match env::var(var_name) {
            Ok(value) => value
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => default,
        }
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }
}
