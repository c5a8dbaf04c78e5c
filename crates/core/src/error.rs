//! Shared error type

use thiserror::Error;

/// Errors raised while constructing pipeline resources
#[derive(Error, Debug)]
pub enum Error {
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
