//! Error types for text processing

use thiserror::Error;

/// Errors raised while building pipeline resources
///
/// Record processing itself never fails; these surface before the first
/// record is touched.
#[derive(Error, Debug)]
pub enum TextProcessingError {
    #[error("Failed to load resource {path}: {source}")]
    ResourceLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dictionary {path}: {message}")]
    InvalidDictionary { path: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] corpus_prep_config::ConfigError),

    #[error(transparent)]
    Core(#[from] corpus_prep_core::Error),
}

pub type Result<T> = std::result::Result<T, TextProcessingError>;

impl From<TextProcessingError> for corpus_prep_core::Error {
    fn from(err: TextProcessingError) -> Self {
        match err {
            TextProcessingError::Core(inner) => inner,
            other => corpus_prep_core::Error::ResourceUnavailable(other.to_string()),
        }
    }
}
