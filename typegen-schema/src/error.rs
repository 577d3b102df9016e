//! Error types for schema parsing and type resolution.

use thiserror::Error;

/// Error type for introspection parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document does not contain a `__schema` object.
    #[error("no introspection schema found in document")]
    MissingSchema,

    /// The remote endpoint answered with GraphQL errors instead of a schema.
    #[error("introspection query failed: {messages}")]
    Remote {
        /// Error messages joined with `; `.
        messages: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (type, field, etc.).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Invalid schema structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

/// Error collected while resolving the types reachable from a seed set.
///
/// These never abort a run: the walker records them and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A seed or referenced type is absent from the schema.
    #[error("{}", unresolved_message(.name, .referenced_by.as_deref()))]
    UnresolvedReference {
        /// Missing type name.
        name: String,
        /// Type whose field, argument or member referenced it (`None` for seeds).
        referenced_by: Option<String>,
    },

    /// The type exists but its kind has no rendering rule.
    #[error("type '{name}' has unsupported kind '{kind}'")]
    UnsupportedKind {
        /// Type name.
        name: String,
        /// Raw introspection kind.
        kind: String,
    },
}

impl ResolveError {
    /// Returns the name of the offending type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::UnresolvedReference { name, .. } | Self::UnsupportedKind { name, .. } => name,
        }
    }
}

fn unresolved_message(name: &str, referenced_by: Option<&str>) -> String {
    match referenced_by {
        Some(owner) => format!("unresolved type '{name}' referenced by '{owner}'"),
        None => format!("unresolved type '{name}' requested as a root type"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_reference_display() {
        let err = ResolveError::UnresolvedReference {
            name: "Ghost".to_string(),
            referenced_by: Some("Widget".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "unresolved type 'Ghost' referenced by 'Widget'"
        );

        let err = ResolveError::UnresolvedReference {
            name: "Ghost".to_string(),
            referenced_by: None,
        };
        assert_eq!(
            err.to_string(),
            "unresolved type 'Ghost' requested as a root type"
        );
    }

    #[test]
    fn test_resolve_error_type_name() {
        let err = ResolveError::UnsupportedKind {
            name: "Weird".to_string(),
            kind: "LIST".to_string(),
        };
        assert_eq!(err.type_name(), "Weird");
    }

    #[test]
    fn test_parse_error_helpers() {
        let err = ParseError::duplicate("type", "Widget");
        assert_eq!(err.to_string(), "duplicate type definition: 'Widget'");

        let err = ParseError::invalid("types must be an array");
        assert!(err.to_string().contains("types must be an array"));
    }
}
