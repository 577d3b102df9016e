//! # typegen Schema
//!
//! GraphQL schema model and type resolution.
//!
//! This crate provides:
//! - Parsing of introspection query results
//! - Type definitions for schema elements
//! - Type reference unwrapping
//! - Transitive resolution of the types reachable from a set of roots

pub mod error;
pub mod fields;
pub mod parser;
pub mod resolve;
pub mod types;

pub use error::{ParseError, ResolveError};
pub use fields::{Field, Modifier, TypeRef};
pub use parser::{parse_schema, parse_schema_value};
pub use resolve::{ResolutionSet, ResolvedType, resolve};
pub use types::{
    BUILTIN_SCALARS, EnumValue, Schema, SchemaType, TypeKind, is_builtin_scalar,
};
