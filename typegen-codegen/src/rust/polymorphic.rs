//! Interface and union generation.
//!
//! Both kinds become an enum tagged by `__typename`, with one variant per
//! concrete type found during resolution and a catch-all for types the
//! schema gains later.

use super::{RustContext, push_docs};
use crate::naming::UniqueIdents;
use typegen_schema::SchemaType;

/// Generator for interface and union enums.
pub struct PolymorphicGenerator<'a> {
    ctx: &'a RustContext<'a>,
}

impl<'a> PolymorphicGenerator<'a> {
    /// Creates a new polymorphic generator.
    #[must_use]
    pub fn new(ctx: &'a RustContext<'a>) -> Self {
        Self { ctx }
    }

    /// Generates the tagged enum for `abstract_type`.
    ///
    /// `members` are the concrete type names, already sorted.
    #[must_use]
    pub fn render(&self, abstract_type: &SchemaType, members: &[String]) -> String {
        let mut output = String::new();
        let rust_name = self.ctx.names.ident(&abstract_type.name);

        let mut unique = UniqueIdents::new();
        let variants: Vec<_> = members
            .iter()
            .map(|member| (unique.claim(self.ctx.names.ident(member)), member))
            .collect();
        let fallback = unique.claim("Unknown".to_string());

        push_docs(&mut output, "", abstract_type.description.as_deref(), None);
        output.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n");
        output.push_str("#[serde(tag = \"__typename\")]\n");
        output.push_str(&format!("pub enum {} {{\n", rust_name));

        for (ident, member) in &variants {
            let mut inner = self.ctx.names.ident(member);
            if self
                .ctx
                .graph
                .needs_indirection(&abstract_type.name, member)
            {
                inner = format!("Box<{}>", inner);
            }
            if ident != *member {
                output.push_str(&format!("    #[serde(rename = {:?})]\n", member));
            }
            output.push_str(&format!("    {}({}),\n", ident, inner));
        }

        output.push_str("    /// A concrete type this code was not generated for.\n");
        output.push_str("    #[serde(other)]\n");
        output.push_str(&format!("    {},\n", fallback));
        output.push_str("}\n\n");

        let possible = members
            .iter()
            .map(|m| format!("{:?}", m))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("impl {} {{\n", rust_name));
        output.push_str("    /// GraphQL names of the concrete types this value can hold.\n");
        output.push_str(&format!(
            "    pub const POSSIBLE_TYPES: &'static [&'static str] = &[{}];\n",
            possible
        ));
        output.push_str("}\n");

        output
    }
}
