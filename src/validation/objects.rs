//! Object validation functionality
//!
//! Checks objects for duplicate names, duplicate attributes and naming
//! conventions.

use std::collections::HashMap;

use crate::convert::{camel_to_snake, snake_to_camel};
use crate::models::SchemaModel;

/// Object declared more than once in a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateObject {
    pub name: String,
    pub occurrences: usize,
}

/// Attribute declared more than once in an object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateAttribute {
    pub object: String,
    pub attribute: String,
}

/// Object name that does not follow the `UpperCamelCase` convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingWarning {
    pub object: String,
    pub suggestion: String,
}

/// Object validator
#[derive(Debug, Default)]
pub struct ObjectValidator;

impl ObjectValidator {
    /// Create a new object validator
    pub fn new() -> Self {
        Self
    }

    /// Objects whose name occurs more than once, in order of first occurrence
    pub fn duplicate_objects(&self, model: &SchemaModel) -> Vec<DuplicateObject> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for object in &model.objects {
            *counts.entry(object.name.as_str()).or_default() += 1;
        }

        let mut duplicates = Vec::new();
        for object in &model.objects {
            if let Some(occurrences) = counts.remove(object.name.as_str())
                && occurrences > 1
            {
                duplicates.push(DuplicateObject {
                    name: object.name.clone(),
                    occurrences,
                });
            }
        }
        duplicates
    }

    /// Attributes repeated within the same object
    pub fn duplicate_attributes(&self, model: &SchemaModel) -> Vec<DuplicateAttribute> {
        let mut duplicates = Vec::new();
        for object in &model.objects {
            let mut seen: Vec<&str> = Vec::new();
            for attribute in &object.attributes {
                if seen.contains(&attribute.name.as_str()) {
                    duplicates.push(DuplicateAttribute {
                        object: object.name.clone(),
                        attribute: attribute.name.clone(),
                    });
                } else {
                    seen.push(attribute.name.as_str());
                }
            }
        }
        duplicates
    }

    /// Object names that change when normalized to `UpperCamelCase`
    pub fn naming_warnings(&self, model: &SchemaModel) -> Vec<NamingWarning> {
        model
            .objects
            .iter()
            .filter_map(|object| {
                let suggestion = snake_to_camel(&camel_to_snake(&object.name));
                (suggestion != object.name).then(|| NamingWarning {
                    object: object.name.clone(),
                    suggestion,
                })
            })
            .collect()
    }
}
