//! Error type for the md-schema binary

use markdown_schema::{ExportError, ImportError};

/// Errors surfaced by CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl CliError {
    /// Get a user-friendly error message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            CliError::Import(e) => e.user_message(),
            CliError::Config(msg) => {
                format!("Configuration error: {msg}\n\nHint: Check the file passed with --config.")
            }
            _ => self.to_string(),
        }
    }
}
