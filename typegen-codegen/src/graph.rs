//! By-value containment graph between generated types.
//!
//! A struct field without a list wrapper embeds the referenced type inline,
//! and a tagged enum embeds every variant inline. Any cycle of such edges
//! gives a type of infinite size, so edges inside one strongly connected
//! component are rendered through `Box`.

use std::collections::HashMap;
use typegen_schema::{Schema, TypeKind};

/// Strongly connected components of the by-value graph.
#[derive(Debug, Clone, Default)]
pub struct ValueGraph {
    component: HashMap<String, usize>,
}

impl ValueGraph {
    /// Builds the graph for every composite type in the schema.
    #[must_use]
    pub fn new(schema: &Schema) -> Self {
        let nodes: Vec<&str> = schema
            .types
            .iter()
            .filter(|t| t.kind.is_composite())
            .map(|t| t.name.as_str())
            .collect();
        let index: HashMap<&str, usize> =
            nodes.iter().enumerate().map(|(i, n)| (*n, i)).collect();

        let mut edges: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        for (from, name) in nodes.iter().enumerate() {
            for target in by_value_targets(schema, name) {
                if let Some(&to) = index.get(target.as_str()) {
                    edges[from].push(to);
                }
            }
        }

        let components = strongly_connected(&edges);
        let component = nodes
            .iter()
            .zip(components)
            .map(|(name, c)| ((*name).to_string(), c))
            .collect();

        Self { component }
    }

    /// Returns true if `from` embedding `to` inline would close a cycle.
    #[must_use]
    pub fn needs_indirection(&self, from: &str, to: &str) -> bool {
        match (self.component.get(from), self.component.get(to)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Names a type embeds inline once rendered.
fn by_value_targets(schema: &Schema, name: &str) -> Vec<String> {
    let Some(schema_type) = schema.get_type(name) else {
        return Vec::new();
    };

    match schema_type.kind {
        TypeKind::Object | TypeKind::InputObject => schema_type
            .fields
            .iter()
            .filter(|f| !f.type_ref.is_list())
            .map(|f| f.type_ref.underlying().to_string())
            .collect(),
        TypeKind::Union => schema_type.possible_types.clone(),
        TypeKind::Interface => schema.implementers(name),
        TypeKind::Enum | TypeKind::Scalar => Vec::new(),
    }
}

/// Kosaraju's algorithm with explicit stacks. Returns a component id per node.
fn strongly_connected(edges: &[Vec<usize>]) -> Vec<usize> {
    let n = edges.len();

    // First pass: nodes in order of DFS completion.
    let mut order = Vec::with_capacity(n);
    let mut seen = vec![false; n];
    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut stack = vec![(start, 0usize)];
        while let Some((node, next)) = stack.pop() {
            if let Some(&child) = edges[node].get(next) {
                stack.push((node, next + 1));
                if !seen[child] {
                    seen[child] = true;
                    stack.push((child, 0));
                }
            } else {
                order.push(node);
            }
        }
    }

    let mut reversed: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (from, targets) in edges.iter().enumerate() {
        for &to in targets {
            reversed[to].push(from);
        }
    }

    // Second pass on the transposed graph, latest finisher first.
    let mut component = vec![usize::MAX; n];
    let mut next_id = 0;
    for &root in order.iter().rev() {
        if component[root] != usize::MAX {
            continue;
        }
        component[root] = next_id;
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            for &prev in &reversed[node] {
                if component[prev] == usize::MAX {
                    component[prev] = next_id;
                    stack.push(prev);
                }
            }
        }
        next_id += 1;
    }

    component
}
