//! Prelude module for convenient imports.
//!
//! ```ignore
//! use typegen::prelude::*;
//! ```

// Schema types
pub use typegen_schema::{
    ParseError, ResolutionSet, ResolveError, Schema, SchemaType, TypeKind, TypeRef, parse_schema,
    resolve,
};

// Codegen types
pub use typegen_codegen::{Bundle, CodegenError, Generator, GeneratorConfig};

// Run types
pub use crate::config::Config;
pub use crate::error::TypegenError;
pub use crate::source::SchemaSource;
