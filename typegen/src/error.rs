//! Error types for a typegen run.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors of a generation run.
///
/// Resolution and rendering problems are not in here: they are collected on
/// the bundle and the output is still written.
#[derive(Debug, Error)]
pub enum TypegenError {
    /// Config file missing or malformed.
    #[error("failed to load config '{path}': {message}")]
    ConfigLoad {
        /// Config path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Introspection request failed.
    #[error("failed to fetch schema from {url}: {message}")]
    SchemaFetch {
        /// Endpoint URL.
        url: String,
        /// Error message.
        message: String,
    },

    /// Schema file could not be read.
    #[error("failed to read schema '{path}': {source}")]
    SchemaRead {
        /// Schema path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Introspection document could not be parsed.
    #[error("failed to parse schema: {0}")]
    SchemaParse(#[from] typegen_schema::ParseError),

    /// Output file could not be written.
    #[error("failed to write '{path}': {source}")]
    OutputWrite {
        /// Output path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl TypegenError {
    /// Creates a config load error.
    pub fn config(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::ConfigLoad {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Creates a schema fetch error.
    pub fn fetch(url: impl Into<String>, message: impl ToString) -> Self {
        Self::SchemaFetch {
            url: url.into(),
            message: message.to_string(),
        }
    }
}
