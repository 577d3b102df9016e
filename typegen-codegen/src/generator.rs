//! Main code generator.

use crate::bundle::Bundle;
use crate::error::CodegenError;
use crate::rust::{
    EnumGenerator, ObjectGenerator, PolymorphicGenerator, RustContext, ScalarGenerator,
};
use std::collections::BTreeMap;
use typegen_schema::{ResolutionSet, ResolvedType, Schema, TypeKind, resolve};

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Module name written in the generated header.
    pub package: String,
    /// Custom scalar name to Rust type overrides.
    pub scalars: BTreeMap<String, String>,
}

impl GeneratorConfig {
    /// Creates a config without scalar overrides.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            scalars: BTreeMap::new(),
        }
    }

    /// Maps a custom scalar to a Rust type.
    #[must_use]
    pub fn with_scalar(mut self, scalar: impl Into<String>, rust_type: impl Into<String>) -> Self {
        self.scalars.insert(scalar.into(), rust_type.into());
        self
    }
}

/// Main code generator for GraphQL types.
pub struct Generator<'a> {
    ctx: RustContext<'a>,
    package: String,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for the given schema.
    #[must_use]
    pub fn new(schema: &'a Schema, config: GeneratorConfig) -> Self {
        Self {
            ctx: RustContext::new(schema, config.scalars),
            package: config.package,
        }
    }

    /// Resolves everything reachable from `seeds` and renders it.
    ///
    /// Resolution errors end up in the returned bundle next to the
    /// declarations that could be rendered.
    pub fn generate<S: AsRef<str>>(&self, seeds: &[S]) -> Bundle {
        let resolution = resolve(self.ctx.schema, seeds);
        self.render_all(&resolution)
    }

    /// Renders every type of a resolution set into a bundle.
    pub fn render_all(&self, resolution: &ResolutionSet) -> Bundle {
        let mut bundle = Bundle::new(self.package.clone());

        for error in resolution.errors() {
            bundle.push_error(CodegenError::from(error.clone()));
        }

        for resolved in resolution.iter() {
            match self.render(resolved) {
                Ok(fragment) => {
                    bundle.insert(resolved.name.clone(), fragment);
                }
                Err(error) => {
                    tracing::warn!(type_name = %resolved.name, %error, "skipping type");
                    bundle.push_error(error);
                }
            }
        }

        tracing::info!(
            package = %self.package,
            types = bundle.len(),
            errors = bundle.errors().len(),
            "rendered bundle"
        );
        bundle
    }

    /// Renders the declaration for one resolved type.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` if the type is not in the schema.
    pub fn render(&self, resolved: &ResolvedType) -> Result<String, CodegenError> {
        let schema_type =
            self.ctx
                .schema
                .get_type(&resolved.name)
                .ok_or_else(|| CodegenError::UnknownType {
                    type_name: resolved.name.clone(),
                })?;

        let fragment = match resolved.kind {
            TypeKind::Scalar => ScalarGenerator::new(&self.ctx).render(schema_type),
            TypeKind::Enum => EnumGenerator::new(&self.ctx).render(schema_type),
            TypeKind::Object | TypeKind::InputObject => {
                ObjectGenerator::new(&self.ctx).render(schema_type)
            }
            TypeKind::Interface | TypeKind::Union => {
                PolymorphicGenerator::new(&self.ctx).render(schema_type, &resolved.possible_types)
            }
        };

        tracing::debug!(type_name = %resolved.name, kind = resolved.kind.as_str(), "rendered");
        Ok(fragment)
    }
}
