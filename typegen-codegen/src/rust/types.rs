//! Mapping of GraphQL type references to Rust types.

use super::RustContext;
use typegen_schema::{Modifier, TypeRef};

/// Maps type references to Rust type expressions.
pub struct TypeMapper<'a> {
    ctx: &'a RustContext<'a>,
}

impl<'a> TypeMapper<'a> {
    /// Creates a new type mapper.
    #[must_use]
    pub fn new(ctx: &'a RustContext<'a>) -> Self {
        Self { ctx }
    }

    /// Returns the Rust type for a named GraphQL type, without wrappers.
    #[must_use]
    pub fn base_type(&self, name: &str) -> String {
        if let Some(rust_type) = self.ctx.scalars.get(name) {
            return rust_type.clone();
        }
        match name {
            "Int" => "i32".to_string(),
            "Float" => "f64".to_string(),
            "String" | "ID" => "String".to_string(),
            "Boolean" => "bool".to_string(),
            _ => self.ctx.names.ident(name),
        }
    }

    /// Returns the Rust type of a field declared on `owner`.
    ///
    /// `List` becomes `Vec`, a missing `NonNull` becomes `Option`, and an
    /// inline reference that would close a cycle is boxed.
    #[must_use]
    pub fn field_type(&self, owner: &str, type_ref: &TypeRef) -> String {
        let target = type_ref.underlying();
        let mut rust_type = self.base_type(target);
        if !type_ref.is_list() && self.ctx.graph.needs_indirection(owner, target) {
            rust_type = format!("Box<{rust_type}>");
        }

        let mut non_null = false;
        for modifier in type_ref.modifiers().iter().rev() {
            match modifier {
                Modifier::NonNull => non_null = true,
                Modifier::List => {
                    rust_type = format!("Vec<{}>", nullable(rust_type, non_null));
                    non_null = false;
                }
            }
        }
        nullable(rust_type, non_null)
    }
}

fn nullable(rust_type: String, non_null: bool) -> String {
    if non_null {
        rust_type
    } else {
        format!("Option<{rust_type}>")
    }
}
