//! Rust code generation modules.

pub mod enums;
pub mod objects;
pub mod polymorphic;
pub mod scalars;
pub mod types;

pub use enums::EnumGenerator;
pub use objects::ObjectGenerator;
pub use polymorphic::PolymorphicGenerator;
pub use scalars::ScalarGenerator;
pub use types::TypeMapper;

use crate::graph::ValueGraph;
use crate::naming::TypeNames;
use std::collections::BTreeMap;
use typegen_schema::Schema;

/// Schema-wide lookups shared by the per-kind generators.
#[derive(Debug)]
pub struct RustContext<'a> {
    /// Schema being rendered.
    pub schema: &'a Schema,
    /// GraphQL to Rust type names.
    pub names: TypeNames,
    /// Cycle information for inline embedding.
    pub graph: ValueGraph,
    /// Scalar name to Rust type overrides.
    pub scalars: BTreeMap<String, String>,
}

impl<'a> RustContext<'a> {
    /// Builds the context for a schema.
    #[must_use]
    pub fn new(schema: &'a Schema, scalars: BTreeMap<String, String>) -> Self {
        Self {
            schema,
            names: TypeNames::new(schema),
            graph: ValueGraph::new(schema),
            scalars,
        }
    }
}

/// Writes a description and deprecation note as `///` lines.
pub(crate) fn push_docs(
    output: &mut String,
    indent: &str,
    description: Option<&str>,
    deprecation: Option<&str>,
) {
    if let Some(description) = description {
        for line in description.trim().lines() {
            let line = line.trim_end();
            if line.is_empty() {
                output.push_str(&format!("{indent}///\n"));
            } else {
                output.push_str(&format!("{indent}/// {line}\n"));
            }
        }
    }

    if let Some(reason) = deprecation {
        if description.is_some() {
            output.push_str(&format!("{indent}///\n"));
        }
        let reason = reason.split_whitespace().collect::<Vec<_>>().join(" ");
        output.push_str(&format!("{indent}/// Deprecated: {reason}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_docs_multiline() {
        let mut output = String::new();
        push_docs(&mut output, "    ", Some("First line.\n\nSecond line.  \n"), None);
        assert_eq!(output, "    /// First line.\n    ///\n    /// Second line.\n");
    }

    #[test]
    fn test_push_docs_deprecation() {
        let mut output = String::new();
        push_docs(&mut output, "", Some("Old."), Some("use\nnewField"));
        assert_eq!(output, "/// Old.\n///\n/// Deprecated: use newField\n");

        let mut output = String::new();
        push_docs(&mut output, "", None, Some("gone"));
        assert_eq!(output, "/// Deprecated: gone\n");
    }

    #[test]
    fn test_push_docs_nothing() {
        let mut output = String::new();
        push_docs(&mut output, "", None, None);
        assert!(output.is_empty());
    }
}
