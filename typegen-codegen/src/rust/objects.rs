//! Object and input object struct generation.

use super::{RustContext, TypeMapper, push_docs};
use crate::naming::{UniqueIdents, field_ident, unraw};
use typegen_schema::{SchemaType, TypeKind};

/// Generator for object and input object structs.
pub struct ObjectGenerator<'a> {
    ctx: &'a RustContext<'a>,
}

impl<'a> ObjectGenerator<'a> {
    /// Creates a new object generator.
    #[must_use]
    pub fn new(ctx: &'a RustContext<'a>) -> Self {
        Self { ctx }
    }

    /// Generates a struct with one member per field, in schema order.
    #[must_use]
    pub fn render(&self, object: &SchemaType) -> String {
        let mut output = String::new();
        let rust_name = self.ctx.names.ident(&object.name);
        let mapper = TypeMapper::new(self.ctx);
        let is_input = object.kind == TypeKind::InputObject;

        push_docs(&mut output, "", object.description.as_deref(), None);
        output.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n");

        if object.fields.is_empty() {
            output.push_str(&format!("pub struct {} {{}}\n", rust_name));
            return output;
        }

        output.push_str(&format!("pub struct {} {{\n", rust_name));

        let mut unique = UniqueIdents::new();
        for field in &object.fields {
            let ident = unique.claim(field_ident(&field.name));
            let rust_type = mapper.field_type(&object.name, &field.type_ref);

            push_docs(
                &mut output,
                "    ",
                field.description.as_deref(),
                field.deprecation_reason.as_deref(),
            );
            if unraw(&ident) != field.name {
                output.push_str(&format!("    #[serde(rename = {:?})]\n", field.name));
            }
            if is_input && !field.type_ref.is_non_null() {
                output.push_str("    #[serde(skip_serializing_if = \"Option::is_none\")]\n");
            }
            output.push_str(&format!("    pub {}: {},\n", ident, rust_type));
        }

        output.push_str("}\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use typegen_schema::{Field, Schema, TypeRef};

    fn create_test_schema() -> Schema {
        let mut schema = Schema::new();
        schema
            .add_type(
                SchemaType::new("Widget", TypeKind::Object)
                    .with_description("A widget.")
                    .with_field(Field::new("id", TypeRef::named("ID").non_null()))
                    .with_field(Field::new("tags", TypeRef::named("String").non_null().list()))
                    .with_field(
                        Field::new("owner", TypeRef::named("Person"))
                            .with_description("Who owns it."),
                    )
                    .with_field(Field::new("type", TypeRef::named("String")))
                    .with_field(
                        Field::new("createdAt", TypeRef::named("Int"))
                            .deprecated("use created"),
                    ),
            )
            .expect("add Widget");
        schema
            .add_type(
                SchemaType::new("Person", TypeKind::Object)
                    .with_field(Field::new("name", TypeRef::named("String").non_null()))
                    .with_field(Field::new("widgets", TypeRef::named("Widget").list()))
                    .with_field(Field::new("manager", TypeRef::named("Person"))),
            )
            .expect("add Person");
        schema
            .add_type(
                SchemaType::new("WidgetInput", TypeKind::InputObject)
                    .with_field(Field::new("name", TypeRef::named("String").non_null()))
                    .with_field(Field::new("ownerId", TypeRef::named("ID"))),
            )
            .expect("add WidgetInput");
        schema
    }

    fn render(schema: &Schema, name: &str) -> String {
        let ctx = RustContext::new(schema, BTreeMap::new());
        ObjectGenerator::new(&ctx).render(schema.get_type(name).expect("type present"))
    }

    #[test]
    fn test_generate_object() {
        let schema = create_test_schema();
        let output = render(&schema, "Widget");

        assert!(output.starts_with(concat!(
            "/// A widget.\n",
            "#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n"
        )));
        assert!(output.contains("pub struct Widget {\n"));
        assert!(output.contains("    pub id: String,\n"));
        assert!(output.contains("    pub tags: Option<Vec<String>>,\n"));
        assert!(output.contains("    /// Who owns it.\n    pub owner: Option<Person>,\n"));
        assert!(output.contains("    pub r#type: Option<String>,\n"));
        assert!(output.contains(concat!(
            "    /// Deprecated: use created\n",
            "    #[serde(rename = \"createdAt\")]\n",
            "    pub created_at: Option<i32>,\n"
        )));
    }

    #[test]
    fn test_fields_keep_schema_order() {
        let schema = create_test_schema();
        let output = render(&schema, "Widget");

        let needles = [
            "pub id:",
            "pub tags:",
            "pub owner:",
            "pub r#type:",
            "pub created_at:",
        ];
        let positions: Vec<usize> = needles
            .iter()
            .map(|needle| output.find(needle).expect(needle))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_self_reference_is_boxed() {
        let schema = create_test_schema();
        let output = render(&schema, "Person");

        assert!(output.contains("    pub manager: Option<Box<Person>>,\n"));
        assert!(output.contains("    pub widgets: Option<Vec<Option<Widget>>>,\n"));
    }

    #[test]
    fn test_input_object_skips_none() {
        let schema = create_test_schema();
        let output = render(&schema, "WidgetInput");

        assert!(output.contains("    pub name: String,\n"));
        assert!(output.contains(concat!(
            "    #[serde(rename = \"ownerId\")]\n",
            "    #[serde(skip_serializing_if = \"Option::is_none\")]\n",
            "    pub owner_id: Option<String>,\n"
        )));
    }

    #[test]
    fn test_empty_object() {
        let schema = Schema::new();
        let ctx = RustContext::new(&schema, BTreeMap::new());
        let output = ObjectGenerator::new(&ctx).render(&SchemaType::new("Empty", TypeKind::Object));
        assert!(output.ends_with("pub struct Empty {}\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let schema = create_test_schema();
        assert_eq!(render(&schema, "Widget"), render(&schema, "Widget"));
    }
}
