//! Line classification for Markdown schema files
//!
//! Each non-blank line of a schema file falls into exactly one `LineKind`.
//! Classification never touches parser state; the parser decides what a
//! verdict means for the line it is currently processing.

use once_cell::sync::Lazy;
use regex::Regex;

pub use crate::models::native_types::is_native_type;

// Exactly one '#' followed by whitespace
static MODULE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s").unwrap());

static OBJECT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{2,3}").unwrap());

static OBJECT_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{2,3}\s*([A-Za-z][A-Za-z0-9_]*)").unwrap());

static PARENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[_([A-Za-z0-9_]+)_\]").unwrap());

// `- **Name**`, `- **Name***` and the underscore forms `- __Name__`, `- __Name*__`
static ATTRIBUTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*-\s+(?:\*\*([A-Za-z_][A-Za-z0-9_]*)(\*?)\*\*|__([A-Za-z_][A-Za-z0-9_]*)(\*?)__)",
    )
    .unwrap()
});

// `Key: value`, optionally written as a nested bullet `- Key: value`
static OPTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:-\s+)?([A-Za-z_]+)\s*:(?:\s+(.*))?$").unwrap());

/// Structural category of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `# ModuleName`
    ModuleHeading,
    /// `## ObjectName` or `### ObjectName`
    ObjectHeading,
    /// `- **attribute**`
    AttributeMarker,
    /// `Key: value`
    OptionLine,
    /// Free text
    Plain,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::ModuleHeading => write!(f, "module heading"),
            LineKind::ObjectHeading => write!(f, "object heading"),
            LineKind::AttributeMarker => write!(f, "attribute marker"),
            LineKind::OptionLine => write!(f, "option"),
            LineKind::Plain => write!(f, "plain text"),
        }
    }
}

/// Classify a line. Rules are tried in priority order and the first match wins.
pub fn classify(line: &str) -> LineKind {
    if MODULE_PATTERN.is_match(line) {
        LineKind::ModuleHeading
    } else if OBJECT_PATTERN.is_match(line) {
        LineKind::ObjectHeading
    } else if ATTRIBUTE_PATTERN.is_match(line) {
        LineKind::AttributeMarker
    } else if OPTION_PATTERN.is_match(line) {
        LineKind::OptionLine
    } else {
        LineKind::Plain
    }
}

/// Extract the object name and optional parent from an object heading
///
/// The name is the identifier directly after the heading markers, the parent
/// is an `[_Parent_]` annotation anywhere later on the line. Returns `None`
/// when the heading carries no name.
pub fn extract_object_header(line: &str) -> Option<(String, Option<String>)> {
    let captures = OBJECT_NAME_PATTERN.captures(line)?;
    let name = captures.get(1)?;

    let parent = PARENT_PATTERN
        .captures(&line[name.end()..])
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    Some((name.as_str().to_string(), parent))
}

/// Extract the attribute name and required flag from an attribute marker
pub fn extract_attribute_marker(line: &str) -> Option<(String, bool)> {
    let captures = ATTRIBUTE_PATTERN.captures(line)?;
    let (name, marker) = match (captures.get(1), captures.get(3)) {
        (Some(name), _) => (name, captures.get(2)),
        (None, Some(name)) => (name, captures.get(4)),
        (None, None) => return None,
    };
    let required = marker.is_some_and(|m| !m.as_str().is_empty());

    Some((name.as_str().to_string(), required))
}

/// Extract `(key, value)` from an option line; the value may be empty
pub fn extract_option(line: &str) -> Option<(String, String)> {
    let captures = OPTION_PATTERN.captures(line)?;
    let key = captures.get(1)?.as_str().to_string();
    let value = captures
        .get(2)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    Some((key, value))
}
