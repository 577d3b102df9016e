//! # typegen
//!
//! Generates Rust types for selected GraphQL schema types.
//!
//! A run loads `typegen.yaml`, obtains the schema through introspection
//! (live endpoint or saved JSON file), resolves every type reachable from
//! the configured roots, and writes one Rust file with a declaration per
//! type.
//!
//! ## Quick Start
//!
//! ```ignore
//! use typegen::prelude::*;
//!
//! let schema = SchemaSource::File("schema.json".into()).load()?;
//! let bundle = Generator::new(&schema, GeneratorConfig::new("alerts"))
//!     .generate(&["AlertsPolicy"]);
//! std::fs::write("types.rs", bundle.assemble())?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Introspection parsing and type resolution
//! - [`codegen`] - Rust declaration rendering
//! - [`config`] - `typegen.yaml` handling
//! - [`source`] - Schema file and endpoint loading

pub mod cli;
pub mod config;
pub mod error;
pub mod prelude;
pub mod source;

/// Schema model, parsing and resolution.
pub mod schema {
    pub use typegen_schema::*;
}

/// Rust code generation.
pub mod codegen {
    pub use typegen_codegen::*;
}

pub use cli::Args;
pub use config::Config;
pub use error::TypegenError;
pub use source::SchemaSource;

use std::path::Path;
use typegen_codegen::{Bundle, Generator};

/// Runs one generation: config, schema, resolution, output file.
///
/// # Errors
/// Returns `TypegenError` for fatal failures. Resolution and rendering
/// errors are returned on the bundle after the output has been written.
pub fn run(args: &Args) -> Result<Bundle, TypegenError> {
    let config = Config::load(&args.config)?;
    let schema = args.source().load()?;
    tracing::info!("schema has {} types", schema.len());

    let generator = Generator::new(&schema, config.generator_config());
    let bundle = generator.generate(config.types.as_slice());

    write_output(&args.output, &bundle)?;
    Ok(bundle)
}

/// Writes the assembled bundle to `path`.
///
/// # Errors
/// Returns `TypegenError::OutputWrite` if the file cannot be written.
pub fn write_output(path: &Path, bundle: &Bundle) -> Result<(), TypegenError> {
    std::fs::write(path, bundle.assemble()).map_err(|source| TypegenError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("wrote {} types to {}", bundle.len(), path.display());
    Ok(())
}
