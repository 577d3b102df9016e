//! Scalar alias generation.

use super::{RustContext, push_docs};
use typegen_schema::SchemaType;

/// Custom scalars with a well known non-string representation.
const KNOWN_SCALARS: [(&str, &str); 9] = [
    ("BigInt", "i64"),
    ("Decimal", "f64"),
    ("EpochMilliseconds", "i64"),
    ("EpochSeconds", "i64"),
    ("Long", "i64"),
    ("Milliseconds", "i64"),
    ("Minutes", "i64"),
    ("Percentage", "f64"),
    ("Seconds", "i64"),
];

/// Generator for scalar type aliases.
pub struct ScalarGenerator<'a> {
    ctx: &'a RustContext<'a>,
}

impl<'a> ScalarGenerator<'a> {
    /// Creates a new scalar generator.
    #[must_use]
    pub fn new(ctx: &'a RustContext<'a>) -> Self {
        Self { ctx }
    }

    /// Returns the Rust type a custom scalar aliases.
    ///
    /// Configured overrides win, then the known table; anything else is
    /// carried as a string.
    #[must_use]
    pub fn target_type(&self, name: &str) -> String {
        if let Some(rust_type) = self.ctx.scalars.get(name) {
            return rust_type.clone();
        }
        KNOWN_SCALARS
            .iter()
            .find(|(scalar, _)| *scalar == name)
            .map_or("String", |(_, rust_type)| *rust_type)
            .to_string()
    }

    /// Generates a type alias for a scalar.
    #[must_use]
    pub fn render(&self, scalar: &SchemaType) -> String {
        let mut output = String::new();
        push_docs(&mut output, "", scalar.description.as_deref(), None);
        output.push_str(&format!(
            "pub type {} = {};\n",
            self.ctx.names.ident(&scalar.name),
            self.target_type(&scalar.name)
        ));
        output
    }
}
