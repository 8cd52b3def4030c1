//! Import functionality
//!
//! Provides parsers for importing data-model schemas:
//! - Markdown schema files (`# Module`, `## Object`, `- **attribute**`)
//!
//! Every parser implements [`SchemaParser`] and returns either a fully
//! finalized [`SchemaModel`] or the first error encountered.

pub mod classifier;
pub mod config;
pub mod markdown;

use std::path::{Path, PathBuf};

use crate::models::SchemaModel;

pub use classifier::{LineKind, classify};
pub use config::{ParserConfig, ParserConfigBuilder};
pub use markdown::{MarkdownParser, ParserState};

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Input path does not resolve to a readable file
    #[error("File '{}' does not exist. Please specify a valid file.", .path.display())]
    InputNotFound { path: PathBuf },

    /// Input exists but could not be read
    #[error("Failed to read '{}': {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// Object heading without an extractable name
    #[error("No object name available at line {line}: '{content}'")]
    MalformedObjectHeader { line: usize, content: String },

    /// Attribute finalized without all mandatory options
    #[error(
        "Missing mandatory fields for attribute '{attribute}' in object '{object}' (line {line}): {}",
        .missing.join(", ")
    )]
    MissingMandatoryFields {
        line: usize,
        object: String,
        attribute: String,
        missing: Vec<String>,
    },
}

impl ImportError {
    /// Line of the offending Markdown, if the error is tied to one
    pub fn line(&self) -> Option<usize> {
        match self {
            ImportError::MalformedObjectHeader { line, .. }
            | ImportError::MissingMandatoryFields { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Get a user-friendly error message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            ImportError::InputNotFound { path } => format!(
                "File not found: {}\n\nHint: Check that the file exists and the path is correct.",
                path.display()
            ),
            ImportError::MalformedObjectHeader { line, content } => format!(
                "No object name at line {line}: '{content}'\n\n\
                Hint: Declare objects as '## ObjectName' or '### ObjectName [_Parent_]'."
            ),
            ImportError::MissingMandatoryFields {
                line,
                object,
                attribute,
                missing,
            } => {
                let options: Vec<String> = missing
                    .iter()
                    .map(|key| format!("  {}: ...", capitalize(key)))
                    .collect();
                format!(
                    "Attribute '{attribute}' in object '{object}' (line {line}) is missing: {}\n\n\
                    Hint: Add the missing options below the attribute:\n{}",
                    missing.join(", "),
                    options.join("\n")
                )
            }
            _ => self.to_string(),
        }
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A parser turning one schema document into a `SchemaModel`
///
/// Implementations keep no state between calls: every parse starts from
/// empty accumulators, so a parser can be reused or shared freely.
pub trait SchemaParser {
    /// Parse schema source text
    fn parse_str(&self, content: &str) -> Result<SchemaModel, ImportError>;

    /// Parse a schema file
    ///
    /// The file is read completely before parsing starts; the handle is not
    /// held while the model is assembled.
    fn parse(&self, path: &Path) -> Result<SchemaModel, ImportError> {
        if !path.is_file() {
            return Err(ImportError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ImportError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        self.parse_str(&content)
    }
}
