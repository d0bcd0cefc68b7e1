//! Configuration error types.

use thiserror::Error;

/// Configuration loading and lookup error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("failed to parse yaml config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse json config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{section} not found: {name}")]
    NotFound { section: &'static str, name: String },
}
