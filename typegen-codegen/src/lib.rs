//! # typegen Codegen
//!
//! Rust type generation from GraphQL introspection schemas.
//!
//! This crate provides:
//! - Struct generation for objects and input objects
//! - Enum generation with wire value mapping
//! - Tagged enums for interfaces and unions
//! - Assembly of the declarations into one generated file

pub mod bundle;
pub mod error;
pub mod generator;
pub mod graph;
pub mod naming;
pub mod rust;

pub use bundle::{Bundle, GENERATED_MARKER};
pub use error::CodegenError;
pub use generator::{Generator, GeneratorConfig};

/// Generates Rust types from an introspection JSON document.
///
/// # Arguments
/// * `json` - Introspection result
/// * `config` - Package name and scalar overrides
/// * `seeds` - Root type names to generate
///
/// # Returns
/// The rendered bundle, including any resolution errors.
///
/// # Errors
/// Returns `CodegenError` if the document cannot be parsed.
pub fn generate_from_json<S: AsRef<str>>(
    json: &str,
    config: GeneratorConfig,
    seeds: &[S],
) -> Result<Bundle, CodegenError> {
    let schema = typegen_schema::parse_schema(json)?;
    let generator = Generator::new(&schema, config);
    Ok(generator.generate(seeds))
}

/// Generates Rust types from an introspection JSON file.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file<S: AsRef<str>>(
    path: &std::path::Path,
    config: GeneratorConfig,
    seeds: &[S],
) -> Result<Bundle, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, config, seeds)
}
