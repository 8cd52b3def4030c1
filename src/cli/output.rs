//! Output formatting for CLI

use markdown_schema::{ModelValidationResult, SchemaModel, quote_literal};

/// Format a parsed model as a human-readable summary
pub fn format_summary(model: &SchemaModel) -> String {
    let mut output = String::new();

    output.push_str(&format!("Module: {}\n", model.module_name));
    if !model.module_description.is_empty() {
        output.push_str(&format!("  {}\n", model.module_description));
    }

    output.push_str(&format!("\n✅ Parsed {} object(s):\n", model.objects.len()));
    for object in &model.objects {
        match model.parent_of(&object.name) {
            Some(parent) => output.push_str(&format!("\n{} ({})\n", object.name, parent)),
            None => output.push_str(&format!("\n{}\n", object.name)),
        }
        if let Some(description) = &object.description {
            output.push_str(&format!("  {}\n", description));
        }

        for attr in &object.attributes {
            let marker = if attr.required { "*" } else { "" };
            output.push_str(&format!(
                "  - {}{}: {}\n",
                attr.name,
                marker,
                attr.attr_type().unwrap_or("?")
            ));
            for (key, value) in attr.extra_options() {
                output.push_str(&format!("      {} = {}\n", key, quote_literal(value)));
            }
        }
    }

    if !model.compositions.is_empty() {
        output.push_str("\nCompositions:\n");
        for rel in &model.compositions {
            output.push_str(&format!(
                "  - {} contains {}\n",
                rel.containing_object, rel.referenced_type
            ));
        }
    }

    output
}

/// Format a validation result
pub fn format_validation(model: &SchemaModel, result: &ModelValidationResult) -> String {
    let mut output = String::new();

    for rel in &result.orphan_inheritances {
        output.push_str(&format!(
            "❌ Inheritance {} -> {} refers to an unknown object\n",
            rel.parent, rel.child
        ));
    }
    for invalid in &result.invalid_compositions {
        output.push_str(&format!(
            "❌ Composition {} -> {}: {}\n",
            invalid.relation.containing_object, invalid.relation.referenced_type, invalid.reason
        ));
    }
    for cycle in &result.inheritance_cycles {
        output.push_str(&format!(
            "❌ Inheritance cycle: {}\n",
            cycle.objects.join(" -> ")
        ));
    }
    for duplicate in &result.duplicate_objects {
        output.push_str(&format!(
            "❌ Object '{}' declared {} times\n",
            duplicate.name, duplicate.occurrences
        ));
    }
    for duplicate in &result.duplicate_attributes {
        output.push_str(&format!(
            "❌ Attribute '{}' repeated in object '{}'\n",
            duplicate.attribute, duplicate.object
        ));
    }

    for parent in &result.unresolved_parents {
        output.push_str(&format!("⚠️  Parent '{}' is not defined in this module\n", parent));
    }
    for dtype in &result.unresolved_types {
        output.push_str(&format!("⚠️  Type '{}' is not defined in this module\n", dtype));
    }
    for warning in &result.naming_warnings {
        output.push_str(&format!(
            "⚠️  Object '{}' is not UpperCamelCase (suggested: {})\n",
            warning.object, warning.suggestion
        ));
    }

    if result.is_valid() {
        output.push_str(&format!(
            "\n✅ Module '{}' is valid ({} object(s), {} attribute(s))\n",
            model.module_name,
            model.objects.len(),
            model.attribute_count()
        ));
    }

    output
}
