//! Schema type definitions.
//!
//! This module contains the read-only model of an introspected GraphQL
//! schema: named types, their kinds, fields, enum values and polymorphic
//! member lists.

use crate::error::ParseError;
use crate::fields::Field;
use std::collections::{BTreeSet, HashMap};

/// Scalars every GraphQL schema provides. They never need a declaration.
pub const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// Returns true if `name` is one of the built-in GraphQL scalars.
#[must_use]
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

/// Complete introspected schema.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Root query type name.
    pub query_type: Option<String>,
    /// Root mutation type name.
    pub mutation_type: Option<String>,
    /// Root subscription type name.
    pub subscription_type: Option<String>,
    /// Type definitions, in introspection order.
    pub types: Vec<SchemaType>,
    /// Types whose kind maps to no rendering rule, keyed by name.
    unsupported: HashMap<String, String>,
    /// Type lookup map (built while adding types).
    type_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type definition to the schema.
    ///
    /// # Errors
    /// Returns `ParseError::DuplicateDefinition` if the name is already taken.
    pub fn add_type(&mut self, schema_type: SchemaType) -> Result<(), ParseError> {
        if self.contains(&schema_type.name) {
            return Err(ParseError::duplicate("type", schema_type.name));
        }
        self.type_map
            .insert(schema_type.name.clone(), self.types.len());
        self.types.push(schema_type);
        Ok(())
    }

    /// Records a type whose introspection kind has no rendering rule.
    ///
    /// # Errors
    /// Returns `ParseError::DuplicateDefinition` if the name is already taken.
    pub fn add_unsupported(
        &mut self,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Result<(), ParseError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(ParseError::duplicate("type", name));
        }
        self.unsupported.insert(name, kind.into());
        Ok(())
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&SchemaType> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Returns the raw kind of a type that was recorded as unsupported.
    #[must_use]
    pub fn unsupported_kind(&self, name: &str) -> Option<&str> {
        self.unsupported.get(name).map(String::as_str)
    }

    fn contains(&self, name: &str) -> bool {
        self.has_type(name) || self.unsupported.contains_key(name)
    }

    /// Returns the concrete types implementing an interface, sorted.
    ///
    /// Combines objects that declare the interface with the interface's own
    /// `possibleTypes` list. Interfaces extending `interface` are not
    /// concrete and are left out.
    #[must_use]
    pub fn implementers(&self, interface: &str) -> Vec<String> {
        let mut names: BTreeSet<&str> = self
            .types
            .iter()
            .filter(|t| t.kind == TypeKind::Object)
            .filter(|t| t.interfaces.iter().any(|i| i == interface))
            .map(|t| t.name.as_str())
            .collect();

        if let Some(declared) = self.get_type(interface) {
            names.extend(
                declared
                    .possible_types
                    .iter()
                    .map(String::as_str)
                    .filter(|name| {
                        self.get_type(name)
                            .is_none_or(|t| t.kind == TypeKind::Object)
                    }),
            );
        }

        names.into_iter().map(str::to_string).collect()
    }

    /// Returns the number of supported types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the schema holds no supported types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Kind of a named schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Output object type.
    Object,
    /// Input object type.
    InputObject,
    /// Enumeration.
    Enum,
    /// Scalar.
    Scalar,
    /// Interface.
    Interface,
    /// Union.
    Union,
}

impl TypeKind {
    /// Parses an introspection `__TypeKind` value.
    ///
    /// `LIST` and `NON_NULL` are wrappers, not named kinds, and return `None`.
    #[must_use]
    pub fn from_introspection(kind: &str) -> Option<Self> {
        match kind {
            "OBJECT" => Some(Self::Object),
            "INPUT_OBJECT" => Some(Self::InputObject),
            "ENUM" => Some(Self::Enum),
            "SCALAR" => Some(Self::Scalar),
            "INTERFACE" => Some(Self::Interface),
            "UNION" => Some(Self::Union),
            _ => None,
        }
    }

    /// Returns the introspection spelling of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "OBJECT",
            Self::InputObject => "INPUT_OBJECT",
            Self::Enum => "ENUM",
            Self::Scalar => "SCALAR",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
        }
    }

    /// Returns true for kinds that render as records or tagged variants.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(
            self,
            Self::Object | Self::InputObject | Self::Interface | Self::Union
        )
    }
}

/// Named schema type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaType {
    /// Type name, unique within the schema.
    pub name: String,
    /// Type kind.
    pub kind: TypeKind,
    /// Description.
    pub description: Option<String>,
    /// Fields (object/interface) or input fields (input object), in order.
    pub fields: Vec<Field>,
    /// Permitted values (enum), in order.
    pub enum_values: Vec<EnumValue>,
    /// Member types (union) or implementers reported by introspection (interface).
    pub possible_types: Vec<String>,
    /// Interfaces an object declares.
    pub interfaces: Vec<String>,
}

impl SchemaType {
    /// Creates a new type with no fields, values or members.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            fields: Vec::new(),
            enum_values: Vec::new(),
            possible_types: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds an enum value.
    #[must_use]
    pub fn with_value(mut self, value: EnumValue) -> Self {
        self.enum_values.push(value);
        self
    }

    /// Adds a union member or interface implementer.
    #[must_use]
    pub fn with_possible_type(mut self, name: impl Into<String>) -> Self {
        self.possible_types.push(name.into());
        self
    }

    /// Declares an implemented interface.
    #[must_use]
    pub fn with_interface(mut self, name: impl Into<String>) -> Self {
        self.interfaces.push(name.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Enum value definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Wire value.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Deprecation reason, present when the value is deprecated.
    pub deprecation_reason: Option<String>,
}

impl EnumValue {
    /// Creates a new enum value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deprecation_reason: None,
        }
    }
}
