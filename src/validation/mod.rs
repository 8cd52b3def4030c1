//! Validation functionality
//!
//! Provides validation of parsed schema models:
//! - Relationship validation (orphaned relations, inheritance cycles, external references)
//! - Object validation (duplicates, naming conventions)

pub mod objects;
pub mod relationships;

use tracing::warn;

use crate::models::{InheritanceRelation, SchemaModel};

pub use objects::{DuplicateAttribute, DuplicateObject, NamingWarning, ObjectValidator};
pub use relationships::{InheritanceCycle, InvalidComposition, RelationshipValidator};

/// Result of model validation
///
/// Unresolved parents/types and naming warnings are advisory; everything else
/// makes the model invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelValidationResult {
    /// Inheritance relations whose child is not an object
    pub orphan_inheritances: Vec<InheritanceRelation>,
    /// Composition relations with unknown container or native type
    pub invalid_compositions: Vec<InvalidComposition>,
    /// Cycles in the inheritance graph
    pub inheritance_cycles: Vec<InheritanceCycle>,
    /// Object names declared more than once
    pub duplicate_objects: Vec<DuplicateObject>,
    /// Attribute names declared more than once in an object
    pub duplicate_attributes: Vec<DuplicateAttribute>,
    /// Parents defined outside this module
    pub unresolved_parents: Vec<String>,
    /// Referenced types defined outside this module
    pub unresolved_types: Vec<String>,
    /// Object names not in `UpperCamelCase`
    pub naming_warnings: Vec<NamingWarning>,
}

impl ModelValidationResult {
    /// True when no invariant is violated
    pub fn is_valid(&self) -> bool {
        self.orphan_inheritances.is_empty()
            && self.invalid_compositions.is_empty()
            && self.inheritance_cycles.is_empty()
            && self.duplicate_objects.is_empty()
            && self.duplicate_attributes.is_empty()
    }

    /// True when there are advisory findings
    pub fn has_warnings(&self) -> bool {
        !self.unresolved_parents.is_empty()
            || !self.unresolved_types.is_empty()
            || !self.naming_warnings.is_empty()
    }
}

/// Model validator combining relationship and object checks
#[derive(Debug, Default)]
pub struct ModelValidator {
    relationships: RelationshipValidator,
    objects: ObjectValidator,
}

impl ModelValidator {
    /// Create a new model validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a parsed model
    pub fn validate(&self, model: &SchemaModel) -> ModelValidationResult {
        let result = ModelValidationResult {
            orphan_inheritances: self.relationships.orphan_inheritances(model),
            invalid_compositions: self.relationships.invalid_compositions(model),
            inheritance_cycles: self.relationships.inheritance_cycles(model),
            duplicate_objects: self.objects.duplicate_objects(model),
            duplicate_attributes: self.objects.duplicate_attributes(model),
            unresolved_parents: self.relationships.unresolved_parents(model),
            unresolved_types: self.relationships.unresolved_types(model),
            naming_warnings: self.objects.naming_warnings(model),
        };

        for cycle in &result.inheritance_cycles {
            warn!(objects = ?cycle.objects, "Inheritance cycle detected");
        }
        for duplicate in &result.duplicate_objects {
            warn!(
                object = %duplicate.name,
                occurrences = duplicate.occurrences,
                "Object declared more than once"
            );
        }

        result
    }
}
