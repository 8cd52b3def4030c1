//! Import module tests

use std::io::Write;
use std::path::Path;

use markdown_schema::import::{ImportError, MarkdownParser, SchemaParser};
use markdown_schema::models::{CompositionRelation, InheritanceRelation, is_native_type};

const ENZYME_ML: &str = r#"# EnzymeML
Data model for enzyme kinetics experiments.

## Document
The root of an EnzymeML document.

- **name***
  Type: string
  Description: Title of the document
- **reactions**
  Type: Reaction
  Description: Reactions of the experiment
  Multiple: True

### Reaction
A biochemical reaction.
- **temperature***
  - Type: float
  - Description: Temperature of the reaction
  - Unit: K
- **educts**
  Type: ReactionElement
  Description: Consumed species

### ReactionElement
- **species_id***
  Type: string
  Description: Reference to the species

### KineticReaction [_Reaction_]
A reaction described by a rate law.
- **rate_law**
  Type: KineticModel
  Description: Rate law of the reaction
"#;

fn write_schema(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn parse(markdown: &str) -> Result<markdown_schema::SchemaModel, ImportError> {
    MarkdownParser::new().parse_str(markdown)
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_single_object_with_native_attribute() {
        let model = parse("# M\nDescr\n## Obj\n- **x**\n  Type: string\n  Description: d\n").unwrap();

        assert_eq!(model.objects.len(), 1);
        let obj = &model.objects[0];
        assert_eq!(obj.name, "Obj");
        assert_eq!(obj.attributes.len(), 1);
        assert_eq!(obj.attributes[0].name, "x");
        assert!(!obj.attributes[0].required);
        assert_eq!(obj.attributes[0].attr_type(), Some("string"));
        assert!(model.compositions.is_empty());
        assert!(model.inherits.is_empty());
    }

    #[test]
    fn test_parent_annotation_records_inheritance() {
        let model = parse("# M\n### Child [_Parent_]\n").unwrap();
        assert_eq!(
            model.inherits,
            vec![InheritanceRelation {
                parent: "Parent".to_string(),
                child: "Child".to_string(),
            }]
        );
    }

    #[test]
    fn test_non_native_type_records_composition() {
        let model =
            parse("# M\n## Person\n- **home**\n  Type: Address\n  Description: d\n").unwrap();
        assert_eq!(
            model.compositions,
            vec![CompositionRelation {
                referenced_type: "Address".to_string(),
                containing_object: "Person".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_description_is_reported() {
        let err = parse("# M\n## Obj\n- **x**\n  Type: string\n").unwrap_err();
        match err {
            ImportError::MissingMandatoryFields {
                object,
                attribute,
                missing,
                ..
            } => {
                assert_eq!(object, "Obj");
                assert_eq!(attribute, "x");
                assert_eq!(missing, vec!["description"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_yields_empty_model() {
        let file = write_schema("\n\n   \n");
        let model = MarkdownParser::new().parse(file.path()).unwrap();
        assert!(model.objects.is_empty());
        assert!(model.inherits.is_empty());
        assert!(model.compositions.is_empty());
    }

    #[test]
    fn test_plain_lines_after_options_are_ignored() {
        let model =
            parse("# M\nVersion: 2\nTrailing text\n## Obj\nDescr\nNote: x\nAfter note\n").unwrap();

        assert_eq!(model.module_description, "");
        assert_eq!(model.objects[0].description.as_deref(), Some("Descr"));
    }

    #[test]
    fn test_text_after_attribute_options_keeps_object_description() {
        let model = parse(
            "# M\n## Obj\nThe object\n- **x**\n  Type: string\n  Description: d\n  continued prose\n",
        )
        .unwrap();

        let obj = &model.objects[0];
        assert_eq!(obj.description.as_deref(), Some("The object"));
        assert_eq!(obj.attributes[0].description(), Some("d"));
    }

    #[test]
    fn test_empty_type_records_no_composition() {
        let model = parse("# M\n## Obj\n- **x**\n  Type:\n  Description: d\n").unwrap();

        assert_eq!(model.objects[0].attributes[0].attr_type(), Some(""));
        assert!(model.compositions.is_empty());
    }

    #[test]
    fn test_required_marker() {
        let model = parse(
            "# M\n## Obj\n- **name***\n  Type: string\n  Description: d\n- **alias**\n  Type: string\n  Description: d\n",
        )
        .unwrap();
        let attrs = &model.objects[0].attributes;
        assert!(attrs[0].required);
        assert!(!attrs[1].required);
    }
}

mod document_tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let model = parse(ENZYME_ML).unwrap();

        assert_eq!(model.module_name, "EnzymeML");
        assert_eq!(
            model.module_description,
            "Data model for enzyme kinetics experiments."
        );
        assert_eq!(
            model.object_names(),
            vec!["Document", "Reaction", "ReactionElement", "KineticReaction"]
        );

        let document = model.object("Document").unwrap();
        assert_eq!(
            document.description.as_deref(),
            Some("The root of an EnzymeML document.")
        );
        assert_eq!(document.attribute("reactions").unwrap().option("multiple"), Some("True"));

        let reaction = model.object("Reaction").unwrap();
        let temperature = reaction.attribute("temperature").unwrap();
        assert!(temperature.required);
        assert_eq!(temperature.option("unit"), Some("K"));

        assert_eq!(model.object("ReactionElement").unwrap().description, None);
        assert_eq!(model.parent_of("KineticReaction"), Some("Reaction"));
    }

    #[test]
    fn test_compositions_in_declaration_order() {
        let model = parse(ENZYME_ML).unwrap();
        let pairs: Vec<(&str, &str)> = model
            .compositions
            .iter()
            .map(|c| (c.containing_object.as_str(), c.referenced_type.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Document", "Reaction"),
                ("Reaction", "ReactionElement"),
                ("KineticReaction", "KineticModel"),
            ]
        );
    }

    #[test]
    fn test_objects_match_heading_count() {
        let model = parse(ENZYME_ML).unwrap();
        let headings = ENZYME_ML
            .lines()
            .filter(|line| line.starts_with("##"))
            .count();
        assert_eq!(model.objects.len(), headings);
    }

    #[test]
    fn test_relations_point_at_objects() {
        let model = parse(ENZYME_ML).unwrap();
        let names = model.object_names();

        for rel in &model.inherits {
            assert!(names.contains(&rel.child.as_str()));
        }
        for rel in &model.compositions {
            assert!(names.contains(&rel.containing_object.as_str()));
            assert!(!is_native_type(&rel.referenced_type));
        }
    }

    #[test]
    fn test_underscore_emphasis_markers() {
        let model = parse("# M\n## Obj\n- __value*__\n  - Type: float\n  - Description: v\n").unwrap();
        let attr = &model.objects[0].attributes[0];
        assert_eq!(attr.name, "value");
        assert!(attr.required);
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let err = MarkdownParser::new()
            .parse(Path::new("/definitely/not/here/schema.md"))
            .unwrap_err();
        assert!(matches!(err, ImportError::InputNotFound { .. }));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MarkdownParser::new().parse(dir.path()).unwrap_err();
        assert!(matches!(err, ImportError::InputNotFound { .. }));
    }

    #[test]
    fn test_missing_both_mandatory_fields() {
        let err = parse("# M\n## Obj\n- **x**\n  Unit: mm\n").unwrap_err();
        match err {
            ImportError::MissingMandatoryFields { missing, .. } => {
                assert_eq!(missing, vec!["description", "type"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_line_counts_blank_lines() {
        let err = parse("# M\n\n\n## Obj\n\n- **x**\n  Type: string\n").unwrap_err();
        assert_eq!(err.line(), Some(6));
    }

    #[test]
    fn test_first_error_stops_parsing() {
        // Both attributes are broken; only the first one is reported
        let err = parse("# M\n## Obj\n- **a**\n  Type: string\n- **b**\n  Type: string\n")
            .unwrap_err();
        match err {
            ImportError::MissingMandatoryFields { attribute, .. } => assert_eq!(attribute, "a"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_heading_message() {
        let err = parse("# M\n## 123\n").unwrap_err();
        assert!(matches!(err, ImportError::MalformedObjectHeader { line: 2, .. }));
        assert!(err.user_message().contains("## ObjectName"));
    }
}

mod isolation_tests {
    use super::*;

    #[test]
    fn test_reparsing_is_idempotent() {
        let file = write_schema(ENZYME_ML);
        let first = MarkdownParser::new().parse(file.path()).unwrap();
        let second = MarkdownParser::new().parse(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parser_reuse_does_not_leak_state() {
        let parser = MarkdownParser::new();
        let full = parser.parse_str(ENZYME_ML).unwrap();
        let small = parser
            .parse_str("# Other\n## Only\n- **x**\n  Type: int\n  Description: d\n")
            .unwrap();

        assert_eq!(small.objects.len(), 1);
        assert!(small.compositions.is_empty());
        assert!(small.inherits.is_empty());
        assert_eq!(parser.parse_str(ENZYME_ML).unwrap(), full);
    }

    #[test]
    fn test_parallel_parsers_agree() {
        let expected = parse(ENZYME_ML).unwrap();

        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| MarkdownParser::new().parse_str(ENZYME_ML).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for model in results {
            assert_eq!(model, expected);
        }
    }
}
