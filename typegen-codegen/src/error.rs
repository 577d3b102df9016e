//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Introspection parse error.
    #[error("schema parse error: {0}")]
    Parse(#[from] typegen_schema::ParseError),

    /// Error collected while resolving types.
    #[error("{0}")]
    Resolve(#[from] typegen_schema::ResolveError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A resolved type is not part of the schema being rendered.
    #[error("unknown type '{type_name}'")]
    UnknownType {
        /// Type name.
        type_name: String,
    },
}
