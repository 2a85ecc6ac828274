//! Error types for rate sources and configuration
//!
//! Source errors are always recoverable: the fetcher logs them and moves on
//! to the next source in the chain.

use thiserror::Error;

/// Failure of a single rate source attempt
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("{source_name} response missing field '{field}'")]
    MissingField { source_name: String, field: String },

    #[error("{source_name} returned unparseable price: {value}")]
    InvalidPrice { source_name: String, value: String },

    #[error("{source_name} returned non-positive price: {price}")]
    NonPositivePrice { source_name: String, price: f64 },

    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
