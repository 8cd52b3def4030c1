//! Markdown Schema SDK - Parses Markdown data-model schemas for code generators
//!
//! Provides unified interfaces for:
//! - Line classification and parsing of Markdown schema files
//! - The schema model (objects, attributes, inheritance, composition)
//! - Model validation
//! - Export to JSON, YAML and TOML
//! - Naming conventions shared by generators

pub mod convert;
pub mod export;
pub mod import;
pub mod models;
pub mod validation;

pub use convert::{camel_to_snake, quote_literal, snake_to_camel};
pub use export::{ExportError, ExportFormat, ExportResult, SchemaExporter};
pub use import::{
    ImportError, LineKind, MarkdownParser, ParserConfig, SchemaParser, classify,
};

// Re-export models
pub use models::{
    AttributeDef, CompositionRelation, InheritanceRelation, NATIVE_TYPES, ObjectDef, SchemaModel,
    is_native_type,
};

pub use validation::{ModelValidationResult, ModelValidator};
