//! Configuration management for the kirana order agent
//!
//! Supports loading configuration from:
//! - YAML files (product catalog)
//! - Environment variables (KIRANA_AGENT_ prefix)
//!
//! The catalog and settings are read once at process start and shared
//! read-only across all parse calls; there is no runtime mutation API.

pub mod catalog;
pub mod settings;

pub use catalog::{CatalogConfig, ProductEntry};
pub use settings::{load_settings, ParserConfig, Settings};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
