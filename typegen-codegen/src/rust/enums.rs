//! Enum code generation.

use super::{RustContext, push_docs};
use crate::naming::{UniqueIdents, variant_ident};
use typegen_schema::SchemaType;

/// Generator for enum definitions.
pub struct EnumGenerator<'a> {
    ctx: &'a RustContext<'a>,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(ctx: &'a RustContext<'a>) -> Self {
        Self { ctx }
    }

    /// Generates an enum definition and its wire value accessor.
    ///
    /// Variants keep schema order; each carries its original value through
    /// `serde(rename)`.
    #[must_use]
    pub fn render(&self, enum_type: &SchemaType) -> String {
        let mut output = String::new();
        let rust_name = self.ctx.names.ident(&enum_type.name);

        let mut unique = UniqueIdents::new();
        let variants: Vec<_> = enum_type
            .enum_values
            .iter()
            .map(|value| (unique.claim(variant_ident(&value.name)), value))
            .collect();

        push_docs(&mut output, "", enum_type.description.as_deref(), None);
        output.push_str(
            "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]\n",
        );
        output.push_str(&format!("pub enum {} {{\n", rust_name));
        for (ident, value) in &variants {
            push_docs(
                &mut output,
                "    ",
                value.description.as_deref(),
                value.deprecation_reason.as_deref(),
            );
            output.push_str(&format!("    #[serde(rename = {:?})]\n", value.name));
            output.push_str(&format!("    {},\n", ident));
        }
        output.push_str("}\n\n");

        output.push_str(&format!("impl {} {{\n", rust_name));
        output.push_str("    /// Returns the GraphQL wire value.\n");
        output.push_str("    #[must_use]\n");
        output.push_str("    pub const fn as_str(&self) -> &'static str {\n");
        output.push_str("        match *self {\n");
        for (ident, value) in &variants {
            output.push_str(&format!("            Self::{} => {:?},\n", ident, value.name));
        }
        output.push_str("        }\n");
        output.push_str("    }\n");
        output.push_str("}\n");

        output
    }
}
