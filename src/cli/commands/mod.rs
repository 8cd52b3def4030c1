//! CLI command implementations

pub mod export;
pub mod parse;
pub mod validate;

pub use export::{ExportArgs, handle_export};
pub use parse::handle_parse;
pub use validate::handle_validate;

use std::io::Read;
use std::path::{Path, PathBuf};

use markdown_schema::{MarkdownParser, ParserConfig, SchemaModel, SchemaParser};

use crate::error::CliError;

/// Build a parser from an optional configuration file
fn build_parser(config: Option<&Path>) -> Result<MarkdownParser, CliError> {
    let config = match config {
        Some(path) => ParserConfig::load(path).map_err(|e| CliError::Config(format!("{:#}", e)))?,
        None => ParserConfig::default(),
    };
    Ok(MarkdownParser::with_config(config))
}

/// Parse a schema from a file or stdin
fn load_model(input: &str, config: Option<&Path>) -> Result<SchemaModel, CliError> {
    let parser = build_parser(config)?;

    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(parser.parse_str(&content)?)
    } else {
        Ok(parser.parse(&PathBuf::from(input))?)
    }
}
