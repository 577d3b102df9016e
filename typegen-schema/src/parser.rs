//! GraphQL introspection result parser.
//!
//! This module turns the JSON answer of the standard introspection query
//! into the internal schema representation.

use crate::error::ParseError;
use crate::fields::{Field, Modifier, TypeRef};
use crate::types::{EnumValue, Schema, SchemaType, TypeKind};
use serde::Deserialize;
use serde_json::Value;

/// Reason GraphQL reports for deprecations that carry none.
const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Parses an introspection result from a JSON string.
///
/// Accepts a full GraphQL response (`{"data": {"__schema": ...}}`), a bare
/// `{"__schema": ...}` object, or the schema object itself.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed, holds no schema, or
/// contains inconsistent type definitions.
pub fn parse_schema(json: &str) -> Result<Schema, ParseError> {
    let document: Value = serde_json::from_str(json)?;
    parse_schema_value(document)
}

/// Parses an introspection result that was already decoded to JSON.
///
/// # Errors
/// See [`parse_schema`].
pub fn parse_schema_value(document: Value) -> Result<Schema, ParseError> {
    let raw: RawSchema = match locate_schema(document)? {
        Some(schema) => serde_json::from_value(schema)?,
        None => return Err(ParseError::MissingSchema),
    };

    let mut schema = Schema::new();
    schema.query_type = raw.query_type.map(|t| t.name);
    schema.mutation_type = raw.mutation_type.map(|t| t.name);
    schema.subscription_type = raw.subscription_type.map(|t| t.name);

    for raw_type in raw.types {
        let name = raw_type
            .name
            .clone()
            .ok_or_else(|| ParseError::invalid("named type without a name"))?;

        match TypeKind::from_introspection(&raw_type.kind) {
            Some(kind) => schema.add_type(convert_type(name, kind, raw_type)?)?,
            None => {
                tracing::debug!("type '{}' has unsupported kind '{}'", name, raw_type.kind);
                schema.add_unsupported(name, raw_type.kind)?;
            }
        }
    }

    tracing::debug!("parsed introspection schema with {} types", schema.len());
    Ok(schema)
}

/// Finds the `__schema` object in one of the accepted document shapes.
fn locate_schema(mut document: Value) -> Result<Option<Value>, ParseError> {
    if let Some(schema) = document
        .get_mut("data")
        .and_then(|data| data.get_mut("__schema"))
        .filter(|schema| !schema.is_null())
    {
        return Ok(Some(schema.take()));
    }

    if let Some(schema) = document.get_mut("__schema").filter(|s| !s.is_null()) {
        return Ok(Some(schema.take()));
    }

    if document.get("types").is_some_and(Value::is_array) {
        return Ok(Some(document));
    }

    if let Some(errors) = document.get("errors").and_then(Value::as_array) {
        let messages = errors
            .iter()
            .map(|e| {
                e.get("message")
                    .and_then(Value::as_str)
                    .map_or_else(|| e.to_string(), str::to_string)
            })
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ParseError::Remote { messages });
    }

    Ok(None)
}

fn convert_type(name: String, kind: TypeKind, raw: RawType) -> Result<SchemaType, ParseError> {
    let mut schema_type = SchemaType::new(name, kind);
    schema_type.description = non_empty(raw.description);

    let fields = match kind {
        TypeKind::InputObject => raw
            .input_fields
            .unwrap_or_default()
            .into_iter()
            .map(|f| convert_input_value(f, &schema_type.name))
            .collect::<Result<Vec<_>, _>>()?,
        _ => raw
            .fields
            .unwrap_or_default()
            .into_iter()
            .map(|f| convert_field(f, &schema_type.name))
            .collect::<Result<Vec<_>, _>>()?,
    };
    schema_type.fields = fields;

    schema_type.enum_values = raw
        .enum_values
        .unwrap_or_default()
        .into_iter()
        .map(|v| EnumValue {
            name: v.name,
            description: non_empty(v.description),
            deprecation_reason: deprecation(v.is_deprecated, v.deprecation_reason),
        })
        .collect();

    schema_type.possible_types = named_list(raw.possible_types);
    schema_type.interfaces = named_list(raw.interfaces);

    Ok(schema_type)
}

fn convert_field(raw: RawField, owner: &str) -> Result<Field, ParseError> {
    let mut field = Field::new(raw.name, flatten_type_ref(&raw.type_ref, owner)?);
    field.description = non_empty(raw.description);
    field.deprecation_reason = deprecation(raw.is_deprecated, raw.deprecation_reason);
    field.args = raw
        .args
        .into_iter()
        .map(|a| convert_input_value(a, owner))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(field)
}

fn convert_input_value(raw: RawInputValue, owner: &str) -> Result<Field, ParseError> {
    let mut field = Field::new(raw.name, flatten_type_ref(&raw.type_ref, owner)?);
    field.description = non_empty(raw.description);
    field.deprecation_reason = deprecation(raw.is_deprecated, raw.deprecation_reason);
    Ok(field)
}

/// Walks the `ofType` chain iteratively and collects the modifiers.
fn flatten_type_ref(raw: &RawTypeRef, owner: &str) -> Result<TypeRef, ParseError> {
    let mut modifiers = Vec::new();
    let mut current = raw;

    loop {
        match current.kind.as_str() {
            "LIST" => modifiers.push(Modifier::List),
            "NON_NULL" => modifiers.push(Modifier::NonNull),
            _ => {
                let name = current.name.as_deref().ok_or_else(|| {
                    ParseError::invalid(format!("unnamed type reference in '{owner}'"))
                })?;
                return Ok(TypeRef::with_modifiers(name, &modifiers));
            }
        }

        current = current.of_type.as_deref().ok_or_else(|| {
            ParseError::invalid(format!(
                "{} wrapper without ofType in '{owner}'",
                current.kind
            ))
        })?;
    }
}

fn named_list(refs: Option<Vec<RawTypeRef>>) -> Vec<String> {
    refs.unwrap_or_default()
        .into_iter()
        .filter_map(|r| r.name)
        .collect()
}

fn deprecation(is_deprecated: bool, reason: Option<String>) -> Option<String> {
    is_deprecated.then(|| {
        non_empty(reason).unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string())
    })
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
    query_type: Option<RawNamed>,
    mutation_type: Option<RawNamed>,
    subscription_type: Option<RawNamed>,
    #[serde(default)]
    types: Vec<RawType>,
}

#[derive(Debug, Deserialize)]
struct RawNamed {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawType {
    kind: String,
    name: Option<String>,
    description: Option<String>,
    fields: Option<Vec<RawField>>,
    input_fields: Option<Vec<RawInputValue>>,
    interfaces: Option<Vec<RawTypeRef>>,
    enum_values: Option<Vec<RawEnumValue>>,
    possible_types: Option<Vec<RawTypeRef>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    name: String,
    description: Option<String>,
    #[serde(default)]
    args: Vec<RawInputValue>,
    #[serde(rename = "type")]
    type_ref: RawTypeRef,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInputValue {
    name: String,
    description: Option<String>,
    #[serde(rename = "type")]
    type_ref: RawTypeRef,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnumValue {
    name: String,
    description: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeRef {
    kind: String,
    name: Option<String>,
    of_type: Option<Box<RawTypeRef>>,
}
