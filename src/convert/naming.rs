//! Name and literal conversions

use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap());

static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Convert `snake_case` to `CamelCase`
///
/// Each segment is capitalized and the rest of it lower-cased; empty segments
/// (leading, trailing or doubled underscores) are kept as `_`.
pub fn snake_to_camel(word: &str) -> String {
    word.split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => "_".to_string(),
            }
        })
        .collect()
}

/// Convert `CamelCase` to `snake_case`
///
/// Acronyms stay together: `HTTPServer` becomes `http_server`.
pub fn camel_to_snake(name: &str) -> String {
    let name = name.replace('@', "");
    let name = CAMEL_WORD.replace_all(&name, "${1}_${2}");
    CAMEL_BOUNDARY
        .replace_all(&name, "${1}_${2}")
        .to_lowercase()
}

/// Render an option value as a literal
///
/// Integers, booleans and `none` are returned unchanged, anything else
/// (decimals included) is wrapped in double quotes.
pub fn quote_literal(value: &str) -> String {
    let lowered = value.to_lowercase();
    if lowered == "none" || lowered == "true" || lowered == "false" {
        return value.to_string();
    }

    if value.parse::<i64>().is_ok() {
        return value.to_string();
    }

    format!("\"{}\"", value)
}
