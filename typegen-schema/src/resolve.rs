//! Transitive type resolution.
//!
//! Starting from a set of root type names, the walker collects every named
//! type reachable through fields, arguments, union members and interface
//! implementers. Each name is expanded at most once, which is what makes
//! cyclic schemas terminate.

use crate::error::ResolveError;
use crate::types::{Schema, TypeKind, is_builtin_scalar};
use std::collections::{BTreeMap, HashSet, VecDeque};

/// A type selected for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Type name.
    pub name: String,
    /// Type kind.
    pub kind: TypeKind,
    /// Concrete members (union) or implementers (interface) present in the
    /// schema, sorted. Empty for other kinds.
    pub possible_types: Vec<String>,
}

/// Result of a resolution run: the closed set of types plus collected errors.
#[derive(Debug, Clone, Default)]
pub struct ResolutionSet {
    types: BTreeMap<String, ResolvedType>,
    errors: Vec<ResolveError>,
}

impl ResolutionSet {
    /// Creates an empty resolution set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the resolved entry for a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ResolvedType> {
        self.types.get(name)
    }

    /// Returns true if the name was resolved.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterates resolved types in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedType> {
        self.types.values()
    }

    /// Resolved type names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Errors collected during resolution, in discovery order.
    #[must_use]
    pub fn errors(&self) -> &[ResolveError] {
        &self.errors
    }

    /// Returns true if any error was collected.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of resolved types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no type was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Work item: a name to expand and the type that referenced it.
struct Pending {
    name: String,
    referenced_by: Option<String>,
}

/// Resolves every type reachable from `seeds`.
///
/// Built-in scalars are never expanded. Missing names and types of
/// unsupported kind are recorded as errors, once per name, and the walk
/// continues with the rest of the queue.
#[must_use]
pub fn resolve<S: AsRef<str>>(schema: &Schema, seeds: &[S]) -> ResolutionSet {
    let mut set = ResolutionSet::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<Pending> = seeds
        .iter()
        .map(|seed| Pending {
            name: seed.as_ref().to_string(),
            referenced_by: None,
        })
        .collect();

    while let Some(Pending {
        name,
        referenced_by,
    }) = queue.pop_front()
    {
        if is_builtin_scalar(&name) || !visited.insert(name.clone()) {
            continue;
        }

        let Some(schema_type) = schema.get_type(&name) else {
            let error = match schema.unsupported_kind(&name) {
                Some(kind) => ResolveError::UnsupportedKind {
                    name,
                    kind: kind.to_string(),
                },
                None => ResolveError::UnresolvedReference {
                    name,
                    referenced_by,
                },
            };
            tracing::warn!("{}", error);
            set.errors.push(error);
            continue;
        };

        tracing::debug!("resolved {} '{}'", schema_type.kind.as_str(), name);

        let mut enqueue = |target: &str| {
            if !is_builtin_scalar(target) && !visited.contains(target) {
                queue.push_back(Pending {
                    name: target.to_string(),
                    referenced_by: Some(name.clone()),
                });
            }
        };

        for field in &schema_type.fields {
            enqueue(field.type_ref.underlying());
            for arg in &field.args {
                enqueue(arg.type_ref.underlying());
            }
        }

        let members = match schema_type.kind {
            TypeKind::Union => schema_type.possible_types.clone(),
            TypeKind::Interface => schema.implementers(&name),
            _ => Vec::new(),
        };
        for member in &members {
            enqueue(member.as_str());
        }

        let mut possible_types: Vec<String> = members
            .into_iter()
            .filter(|m| schema.has_type(m))
            .collect();
        possible_types.sort();
        possible_types.dedup();

        set.types.insert(
            name.clone(),
            ResolvedType {
                name,
                kind: schema_type.kind,
                possible_types,
            },
        );
    }

    set
}
