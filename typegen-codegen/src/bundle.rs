//! Assembly of rendered fragments into one generated file.

use crate::error::CodegenError;
use std::collections::BTreeMap;

/// First line of every generated file.
pub const GENERATED_MARKER: &str = "// Code generated by typegen; DO NOT EDIT.";

/// Rendered declarations of one run, keyed by GraphQL type name.
///
/// Errors travel next to the fragments: a bundle with errors still holds
/// every declaration that could be rendered.
#[derive(Debug)]
pub struct Bundle {
    package: String,
    fragments: BTreeMap<String, String>,
    errors: Vec<CodegenError>,
}

impl Bundle {
    /// Creates an empty bundle for a package.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            fragments: BTreeMap::new(),
            errors: Vec::new(),
        }
    }

    /// Adds a rendered declaration. A name already present keeps its first
    /// fragment; returns false in that case.
    pub fn insert(&mut self, type_name: impl Into<String>, fragment: String) -> bool {
        match self.fragments.entry(type_name.into()) {
            std::collections::btree_map::Entry::Vacant(entry) => {
                entry.insert(fragment);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Records an error.
    pub fn push_error(&mut self, error: CodegenError) {
        self.errors.push(error);
    }

    /// Package or module name written in the header.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Rendered fragment for a type.
    #[must_use]
    pub fn fragment(&self, type_name: &str) -> Option<&str> {
        self.fragments.get(type_name).map(String::as_str)
    }

    /// Type names in output order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.fragments.keys().map(String::as_str)
    }

    /// Collected errors.
    #[must_use]
    pub fn errors(&self) -> &[CodegenError] {
        &self.errors
    }

    /// Returns true if any error was collected.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of rendered declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns true if nothing was rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Returns the generated-file header.
    #[must_use]
    pub fn header(&self) -> String {
        let mut output = String::new();
        output.push_str(GENERATED_MARKER);
        output.push_str("\n\n");
        output.push_str(&format!(
            "//! Generated GraphQL types for the `{}` module.\n\n",
            self.package
        ));
        output.push_str("#![allow(dead_code, non_camel_case_types, clippy::all)]\n\n");
        output.push_str("use serde::{Deserialize, Serialize};\n");
        output
    }

    /// Concatenates the header and all fragments, sorted by type name.
    #[must_use]
    pub fn assemble(&self) -> String {
        let mut output = self.header();
        for fragment in self.fragments.values() {
            output.push('\n');
            output.push_str(fragment);
        }
        output
    }
}
