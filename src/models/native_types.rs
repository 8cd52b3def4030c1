//! Native type catalogue
//!
//! Type names that map onto scalar or container types of the generated code.
//! Any attribute type outside this catalogue is treated as a reference to
//! another object and recorded as a composition.

/// Fixed catalogue of recognized native type names (case-sensitive)
pub const NATIVE_TYPES: &[&str] = &[
    "string",
    "str",
    "float",
    "int",
    "integer",
    "bool",
    "boolean",
    "posfloat",
    "PositiveFloat",
    "posint",
    "PositiveInt",
    "date",
    "datetime",
    "time",
    "bytes",
    "Decimal",
    "Any",
    "Unit",
    "Identifier",
    "Email",
    "HttpUrl",
    "list",
    "dict",
    "tuple",
];

/// Check whether a type name belongs to the native type catalogue
pub fn is_native_type(name: &str) -> bool {
    NATIVE_TYPES.contains(&name)
}
