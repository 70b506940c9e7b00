//! Error types.
//!
//! State transitions never fail. Errors only arise while loading sources and
//! in the output paths (runtime cache, rendered sample), where they are caught
//! at the boundary that produced them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading configuration and token sources.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema value for {identifier} must be a string or number, found {found}")]
    InvalidSchemaValue {
        identifier: String,
        found: &'static str,
    },
}

/// Errors reported by a runtime token cache.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    #[error("Runtime cache unavailable: {0}")]
    Unavailable(String),

    #[error("No async runtime available for cache updates")]
    NoRuntime,
}

/// A fault raised by the rendered sample component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RenderFault {
    pub message: String,
}

impl RenderFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
