//! Validate command implementation

use std::path::Path;

use markdown_schema::ModelValidator;

use super::load_model;
use crate::error::CliError;
use crate::output::format_validation;

/// Handle the validate command
pub fn handle_validate(input: &str, config: Option<&Path>) -> Result<(), CliError> {
    let model = load_model(input, config)?;
    let result = ModelValidator::new().validate(&model);

    print!("{}", format_validation(&model, &result));

    if !result.is_valid() {
        return Err(CliError::ValidationFailed(format!(
            "module '{}' violates model invariants",
            model.module_name
        )));
    }

    Ok(())
}
