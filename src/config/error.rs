//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting that must name something was empty.
    #[error("{name} must not be empty")]
    EmptyValue { name: &'static str },

    /// Boolean environment variable was not `true`/`false`/`1`/`0`/`yes`/`no`.
    #[error("invalid boolean for {name}: '{value}'")]
    InvalidBool { name: &'static str, value: String },

    /// A field or element name contained whitespace or a list separator.
    #[error("invalid name for {name}: '{value}'")]
    InvalidFieldName { name: &'static str, value: String },

    /// Store and score field resolve to the same name.
    #[error("store field and score field must differ (both are '{field}')")]
    ConflictingFields { field: String },
}
