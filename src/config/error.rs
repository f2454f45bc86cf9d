//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric setting could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    NumberParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A boolean setting was not one of the accepted spellings.
    #[error("invalid boolean {name}='{value}': expected true/false/1/0/yes/no")]
    InvalidBool { name: &'static str, value: String },

    /// The query endpoint is not an absolute http(s) URL.
    #[error("invalid SPARQL endpoint '{value}': {reason}")]
    InvalidEndpoint { value: String, reason: String },

    /// Request timeout of zero seconds.
    #[error("request timeout must be at least one second")]
    ZeroTimeout,

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
