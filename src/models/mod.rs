//! Models module for the SDK
//!
//! Defines the schema model produced by the Markdown parser and consumed by
//! code generators, plus the native type catalogue.

pub mod native_types;
pub mod schema;

pub use native_types::{NATIVE_TYPES, is_native_type};
pub use schema::{AttributeDef, CompositionRelation, InheritanceRelation, ObjectDef, SchemaModel};
