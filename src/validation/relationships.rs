//! Relationship validation functionality
//!
//! Checks inheritance and composition relations of a parsed model against its
//! objects and detects inheritance cycles.

use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::models::{CompositionRelation, InheritanceRelation, SchemaModel, is_native_type};

/// Inheritance cycle detected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritanceCycle {
    /// Objects on the cycle, sorted by name
    pub objects: Vec<String>,
}

/// Composition relation that breaks the model invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidComposition {
    pub relation: CompositionRelation,
    pub reason: String,
}

/// Relationship validator
#[derive(Debug, Default)]
pub struct RelationshipValidator;

impl RelationshipValidator {
    /// Create a new relationship validator
    pub fn new() -> Self {
        Self
    }

    /// Inheritance relations whose child is not an object of the model
    pub fn orphan_inheritances(&self, model: &SchemaModel) -> Vec<InheritanceRelation> {
        let names = object_names(model);
        model
            .inherits
            .iter()
            .filter(|rel| !names.contains(rel.child.as_str()))
            .cloned()
            .collect()
    }

    /// Composition relations with an unknown container or a native referenced type
    pub fn invalid_compositions(&self, model: &SchemaModel) -> Vec<InvalidComposition> {
        let names = object_names(model);
        let mut invalid = Vec::new();

        for rel in &model.compositions {
            if !names.contains(rel.containing_object.as_str()) {
                invalid.push(InvalidComposition {
                    relation: rel.clone(),
                    reason: format!("container '{}' is not an object", rel.containing_object),
                });
            } else if is_native_type(&rel.referenced_type) {
                invalid.push(InvalidComposition {
                    relation: rel.clone(),
                    reason: format!("'{}' is a native type", rel.referenced_type),
                });
            }
        }

        invalid
    }

    /// Parents that are not defined in this module (external references)
    pub fn unresolved_parents(&self, model: &SchemaModel) -> Vec<String> {
        let names = object_names(model);
        unique_sorted(
            model
                .inherits
                .iter()
                .map(|rel| rel.parent.as_str())
                .filter(|parent| !names.contains(parent)),
        )
    }

    /// Referenced types that are not defined in this module (external references)
    pub fn unresolved_types(&self, model: &SchemaModel) -> Vec<String> {
        let names = object_names(model);
        unique_sorted(
            model
                .compositions
                .iter()
                .map(|rel| rel.referenced_type.as_str())
                .filter(|dtype| !names.contains(dtype)),
        )
    }

    /// Detect cycles in the inheritance graph
    ///
    /// An object inheriting from itself counts as a cycle of one.
    pub fn inheritance_cycles(&self, model: &SchemaModel) -> Vec<InheritanceCycle> {
        let mut graph = DiGraph::<&str, ()>::new();
        let mut node_map: HashMap<&str, NodeIndex> = HashMap::new();

        for rel in &model.inherits {
            let child = *node_map
                .entry(rel.child.as_str())
                .or_insert_with(|| graph.add_node(rel.child.as_str()));
            let parent = *node_map
                .entry(rel.parent.as_str())
                .or_insert_with(|| graph.add_node(rel.parent.as_str()));
            graph.add_edge(child, parent, ());
        }

        let mut cycles: Vec<InheritanceCycle> = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1 || graph.contains_edge(component[0], component[0])
            })
            .map(|component| {
                let mut objects: Vec<String> =
                    component.iter().map(|idx| graph[*idx].to_string()).collect();
                objects.sort();
                InheritanceCycle { objects }
            })
            .collect();

        cycles.sort_by(|a, b| a.objects.cmp(&b.objects));
        cycles
    }
}

fn object_names(model: &SchemaModel) -> HashSet<&str> {
    model.objects.iter().map(|o| o.name.as_str()).collect()
}

fn unique_sorted<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut names: Vec<String> = names.map(str::to_string).collect();
    names.sort();
    names.dedup();
    names
}
