//! Configuration management for corpus preparation
//!
//! Supports loading configuration from:
//! - TOML/YAML files under `config/`
//! - Environment variables (CORPUS_PREP_ prefix, `__` separator)
//!
//! Also hosts the tracing subscriber setup shared by binaries and tests.

pub mod constants;
pub mod observability;
pub mod settings;

pub use observability::init_tracing;
pub use settings::{
    load_settings, load_settings_from, LanguageSettings, ObservabilityConfig, PersianRules, RuntimeEnvironment,
    Settings, SpellingSettings, StageOverrides, TaskSettings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
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
