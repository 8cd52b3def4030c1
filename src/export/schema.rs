//! Schema model exporter
//!
//! Writes `SchemaModel` values as JSON, YAML or TOML, either as one document
//! or split into one YAML file per object plus a module manifest.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ExportError, ExportFormat, ExportResult};
use crate::convert::camel_to_snake;
use crate::models::{CompositionRelation, InheritanceRelation, SchemaModel};

/// File name of the module manifest written by `export_split`
pub const MODULE_MANIFEST: &str = "module.yaml";

/// Module-level data written next to the per-object files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleManifest {
    pub module_name: String,
    #[serde(default)]
    pub module_description: String,
    /// Object files in declaration order
    #[serde(default)]
    pub objects: Vec<String>,
    #[serde(default)]
    pub inherits: Vec<InheritanceRelation>,
    #[serde(default)]
    pub compositions: Vec<CompositionRelation>,
}

/// Schema model exporter
#[derive(Debug, Default)]
pub struct SchemaExporter;

impl SchemaExporter {
    /// Create a new exporter
    pub fn new() -> Self {
        Self
    }

    /// Export a model in the given format
    pub fn export(
        &self,
        model: &SchemaModel,
        format: ExportFormat,
    ) -> Result<ExportResult, ExportError> {
        let content = match format {
            ExportFormat::Json => self.to_json(model, true)?,
            ExportFormat::Yaml => self.to_yaml(model)?,
            ExportFormat::Toml => self.to_toml(model)?,
        };

        Ok(ExportResult {
            content,
            format: format.to_string(),
        })
    }

    /// Serialize a model to JSON
    pub fn to_json(&self, model: &SchemaModel, pretty: bool) -> Result<String, ExportError> {
        let result = if pretty {
            serde_json::to_string_pretty(model)
        } else {
            serde_json::to_string(model)
        };
        result.map_err(|e| ExportError::SerializationError(format!("JSON: {}", e)))
    }

    /// Serialize a model to YAML
    pub fn to_yaml(&self, model: &SchemaModel) -> Result<String, ExportError> {
        model
            .to_yaml()
            .map_err(|e| ExportError::SerializationError(format!("YAML: {}", e)))
    }

    /// Serialize a model to TOML
    #[cfg(feature = "toml")]
    pub fn to_toml(&self, model: &SchemaModel) -> Result<String, ExportError> {
        toml::to_string(model).map_err(|e| ExportError::SerializationError(format!("TOML: {}", e)))
    }

    #[cfg(not(feature = "toml"))]
    pub fn to_toml(&self, _model: &SchemaModel) -> Result<String, ExportError> {
        Err(ExportError::UnsupportedFormat(
            "toml (enable the `toml` feature)".to_string(),
        ))
    }

    /// Read back a model written by `to_json`
    pub fn from_json(&self, content: &str) -> Result<SchemaModel, ExportError> {
        serde_json::from_str(content)
            .map_err(|e| ExportError::SerializationError(format!("JSON: {}", e)))
    }

    /// Read back a model written by `to_yaml`
    pub fn from_yaml(&self, content: &str) -> Result<SchemaModel, ExportError> {
        SchemaModel::from_yaml(content)
            .map_err(|e| ExportError::SerializationError(format!("YAML: {}", e)))
    }

    /// Write the model into `dir` as one YAML file per object
    ///
    /// Object files are named after the object in `snake_case`; module data and
    /// relations go to `module.yaml`. Returns the written paths, manifest first.
    pub fn export_split(&self, model: &SchemaModel, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        std::fs::create_dir_all(dir).map_err(|e| {
            ExportError::IoError(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let object_files: Vec<String> = model
            .objects
            .iter()
            .map(|object| format!("{}.yaml", camel_to_snake(&object.name)))
            .collect();

        let manifest = ModuleManifest {
            module_name: model.module_name.clone(),
            module_description: model.module_description.clone(),
            objects: object_files.clone(),
            inherits: model.inherits.clone(),
            compositions: model.compositions.clone(),
        };

        let mut written = Vec::with_capacity(object_files.len() + 1);
        let manifest_yaml = serde_yaml::to_string(&manifest)
            .map_err(|e| ExportError::SerializationError(format!("YAML: {}", e)))?;
        written.push(write_file(&dir.join(MODULE_MANIFEST), &manifest_yaml)?);

        for (object, file_name) in model.objects.iter().zip(&object_files) {
            let yaml = serde_yaml::to_string(object)
                .map_err(|e| ExportError::SerializationError(format!("YAML: {}", e)))?;
            written.push(write_file(&dir.join(file_name), &yaml)?);
        }

        info!(
            module = %model.module_name,
            files = written.len(),
            "Exported schema to {}",
            dir.display()
        );
        Ok(written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<PathBuf, ExportError> {
    std::fs::write(path, content)
        .map_err(|e| ExportError::IoError(format!("Failed to write {}: {}", path.display(), e)))?;
    Ok(path.to_path_buf())
}
