//! Export command implementation

use std::path::PathBuf;

use markdown_schema::{ExportError, ExportFormat, SchemaExporter};

use super::load_model;
use crate::error::CliError;

/// Arguments for the export command
pub struct ExportArgs {
    /// Markdown schema file or '-'
    pub input: String,
    /// Output file, or directory for split exports
    pub output: PathBuf,
    /// Output format (json, yaml, toml)
    pub format: String,
    /// Write one YAML file per object
    pub split: bool,
    /// Parser configuration file
    pub config: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export(args: &ExportArgs) -> Result<(), CliError> {
    let model = load_model(&args.input, args.config.as_deref())?;
    let format: ExportFormat = args.format.parse()?;
    let exporter = SchemaExporter::new();

    if args.split {
        if format != ExportFormat::Yaml {
            return Err(CliError::InvalidArgument(format!(
                "--split writes YAML files, got format '{}'",
                format
            )));
        }
        let written = exporter.export_split(&model, &args.output)?;
        eprintln!("Wrote {} file(s) to {}", written.len(), args.output.display());
        return Ok(());
    }

    let result = exporter.export(&model, format)?;
    std::fs::write(&args.output, result.content).map_err(|e| {
        ExportError::IoError(format!("Failed to write {}: {}", args.output.display(), e))
    })?;
    eprintln!("Exported '{}' to {}", model.module_name, args.output.display());
    Ok(())
}
