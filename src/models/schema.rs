//! Schema model produced by the Markdown parser
//!
//! A `SchemaModel` describes one module: its objects, their attributes and the
//! inheritance/composition relations between objects. Once returned from a
//! parser the model is treated as immutable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Option key holding the attribute type
pub const TYPE_OPTION: &str = "type";
/// Option key holding the attribute description
pub const DESCRIPTION_OPTION: &str = "description";

/// Parsed representation of one Markdown schema module
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaModel {
    pub module_name: String,
    #[serde(default)]
    pub module_description: String,
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
    #[serde(default)]
    pub inherits: Vec<InheritanceRelation>,
    #[serde(default)]
    pub compositions: Vec<CompositionRelation>,
}

impl SchemaModel {
    /// Look up an object by name
    pub fn object(&self, name: &str) -> Option<&ObjectDef> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Names of all objects in declaration order
    pub fn object_names(&self) -> Vec<&str> {
        self.objects.iter().map(|o| o.name.as_str()).collect()
    }

    /// Total number of attributes across all objects
    pub fn attribute_count(&self) -> usize {
        self.objects.iter().map(|o| o.attributes.len()).sum()
    }

    /// Parent of an object, if its heading declared one
    pub fn parent_of(&self, child: &str) -> Option<&str> {
        self.inherits
            .iter()
            .find(|rel| rel.child == child)
            .map(|rel| rel.parent.as_str())
    }

    /// Import from YAML
    pub fn from_yaml(yaml_content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml_content)
    }

    /// Export to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// A named schema entity, mapped to one generated data-model class
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeDef>,
}

impl ObjectDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            attributes: Vec::new(),
        }
    }

    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&AttributeDef> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// A named field of an object
///
/// Option keys are lower-cased and keep the order in which they appeared in
/// the source. `type` and `description` are mandatory for parser output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeDef {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: IndexMap<String, String>,
}

impl AttributeDef {
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
            options: IndexMap::new(),
        }
    }

    /// Value of an option by (lower-case) key
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Declared type of the attribute
    pub fn attr_type(&self) -> Option<&str> {
        self.option(TYPE_OPTION)
    }

    pub fn description(&self) -> Option<&str> {
        self.option(DESCRIPTION_OPTION)
    }

    /// Mandatory keys absent from the options, sorted
    pub fn missing_options<S: AsRef<str>>(&self, mandatory: &[S]) -> Vec<String> {
        let mut missing = Vec::new();
        for key in mandatory {
            let key: &str = key.as_ref();
            if !self.options.contains_key(key) {
                missing.push(key.to_string());
            }
        }
        missing.sort();
        missing.dedup();
        missing
    }

    /// Options other than `type` and `description`
    pub fn extra_options(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options
            .iter()
            .filter(|(k, _)| k.as_str() != TYPE_OPTION && k.as_str() != DESCRIPTION_OPTION)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parent/child relation declared on an object heading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct InheritanceRelation {
    pub parent: String,
    pub child: String,
}

/// Relation recorded when an attribute type refers to a non-native type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CompositionRelation {
    pub referenced_type: String,
    pub containing_object: String,
}
