//! Parse command implementation

use std::path::Path;

use markdown_schema::{ExportFormat, SchemaExporter};

use super::load_model;
use crate::error::CliError;
use crate::output::format_summary;

/// Handle the parse command
pub fn handle_parse(input: &str, format: &str, config: Option<&Path>) -> Result<(), CliError> {
    let model = load_model(input, config)?;

    if format == "summary" {
        print!("{}", format_summary(&model));
        return Ok(());
    }

    let format: ExportFormat = format.parse()?;
    let result = SchemaExporter::new().export(&model, format)?;
    println!("{}", result.content);
    Ok(())
}
