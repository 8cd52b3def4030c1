//! Command-line interface for Markdown schema files
//!
//! Usage:
//!   md-schema parse `<file>` [--format summary|json|yaml|toml]  - Parse and print a schema
//!   md-schema validate `<file>`                                - Parse and validate a schema
//!   md-schema export `<file>` --output `<path>` [--split]        - Write the parsed model

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{ExportArgs, handle_export, handle_parse, handle_validate};

#[derive(Parser)]
#[command(name = "md-schema", version, about = "Parse Markdown data-model schemas")]
struct Cli {
    /// Parser configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a schema and print the model
    Parse {
        /// Markdown schema file ('-' reads stdin)
        input: String,
        /// Output format: summary, json, yaml or toml
        #[arg(short, long, default_value = "summary")]
        format: String,
    },
    /// Parse a schema and validate the resulting model
    Validate {
        /// Markdown schema file ('-' reads stdin)
        input: String,
    },
    /// Parse a schema and write the model to disk
    Export {
        /// Markdown schema file ('-' reads stdin)
        input: String,
        /// Output file, or directory with --split
        #[arg(short, long)]
        output: PathBuf,
        /// Output format: json, yaml or toml
        #[arg(short, long, default_value = "yaml")]
        format: String,
        /// Write one YAML file per object
        #[arg(long)]
        split: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match &cli.command {
        Commands::Parse { input, format } => handle_parse(input, format, config),
        Commands::Validate { input } => handle_validate(input, config),
        Commands::Export {
            input,
            output,
            format,
            split,
        } => handle_export(&ExportArgs {
            input: input.clone(),
            output: output.clone(),
            format: format.clone(),
            split: *split,
            config: config.map(PathBuf::from),
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}
