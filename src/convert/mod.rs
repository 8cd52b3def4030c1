//! Conversion helpers
//!
//! Naming conventions shared by validation, export and the CLI.

pub mod naming;

pub use naming::{camel_to_snake, quote_literal, snake_to_camel};
