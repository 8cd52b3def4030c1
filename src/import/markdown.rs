//! Markdown schema importer
//!
//! Parses Markdown schema files into a `SchemaModel`. The parser is a single
//! pass over the non-blank lines of the document:
//!
//! ```text
//! # ModuleName
//! Module description
//!
//! ## ObjectName [_ParentName_]
//! Object description
//! - **attribute***
//!   Type: string
//!   Description: What the attribute holds
//! ```
//!
//! Every line is classified first; the verdict decides the next state and the
//! state handler then mutates the accumulators. Attributes and objects are only
//! finalized when the next structural marker arrives, so the end of the input
//! is fed through the same dispatch as an explicit event.

use tracing::{debug, info, warn};

use super::classifier::{
    LineKind, classify, extract_attribute_marker, extract_object_header, extract_option,
    is_native_type,
};
use super::config::ParserConfig;
use super::{ImportError, SchemaParser};
use crate::models::{
    AttributeDef, CompositionRelation, InheritanceRelation, ObjectDef, SchemaModel,
};

/// Parser state while scanning a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Nothing seen yet
    Idle,
    /// After a module heading; plain lines describe the module
    InsideModule,
    /// After an object heading; plain lines describe the object
    InsideObject,
    /// After an attribute marker; option lines fill the attribute
    InsideAttribute,
    /// After an option line; plain lines are ignored until the next marker
    InsideOptions,
    /// End of input processed
    Done,
}

/// Input to the state machine
#[derive(Debug, Clone, Copy)]
enum Event<'a> {
    Line {
        number: usize,
        text: &'a str,
        kind: LineKind,
    },
    EndOfInput,
}

/// Markdown schema parser
///
/// Holds only configuration; every call to `parse`/`parse_str` scans with
/// fresh accumulators.
#[derive(Debug, Clone, Default)]
pub struct MarkdownParser {
    config: ParserConfig,
}

impl MarkdownParser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

impl SchemaParser for MarkdownParser {
    /// Parse Markdown schema text
    ///
    /// # Example
    ///
    /// ```rust
    /// use markdown_schema::import::{MarkdownParser, SchemaParser};
    ///
    /// let markdown = "# M\nDescr\n## Obj\n- **x**\n  Type: string\n  Description: d\n";
    /// let model = MarkdownParser::new().parse_str(markdown).unwrap();
    /// assert_eq!(model.objects[0].name, "Obj");
    /// assert_eq!(model.objects[0].attributes[0].name, "x");
    /// ```
    fn parse_str(&self, content: &str) -> Result<SchemaModel, ImportError> {
        let mut scan = Scan::new(&self.config);

        // Blank lines never reach the state machine
        let lines = content
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim_end()))
            .filter(|(_, line)| !line.is_empty());

        for (number, text) in lines {
            let kind = classify(text);
            scan.dispatch(Event::Line { number, text, kind })?;
        }
        scan.dispatch(Event::EndOfInput)?;

        let model = scan.into_model();
        info!(
            module = %model.module_name,
            objects = model.objects.len(),
            inherits = model.inherits.len(),
            compositions = model.compositions.len(),
            "Parsed Markdown schema"
        );
        Ok(model)
    }
}

/// Attribute under construction with the line it was declared on
struct PendingAttribute {
    def: AttributeDef,
    line: usize,
}

/// Accumulators for one scan of a document
struct Scan<'c> {
    config: &'c ParserConfig,
    state: ParserState,
    module_name: String,
    module_description: String,
    object: Option<ObjectDef>,
    attribute: Option<PendingAttribute>,
    objects: Vec<ObjectDef>,
    inherits: Vec<InheritanceRelation>,
    compositions: Vec<CompositionRelation>,
}

impl<'c> Scan<'c> {
    fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            state: ParserState::Idle,
            module_name: String::new(),
            module_description: String::new(),
            object: None,
            attribute: None,
            objects: Vec::new(),
            inherits: Vec::new(),
            compositions: Vec::new(),
        }
    }

    fn dispatch(&mut self, event: Event<'_>) -> Result<(), ImportError> {
        match event {
            Event::EndOfInput => {
                self.finalize_attribute()?;
                self.finalize_object();
                self.transition(ParserState::Done);
                Ok(())
            }
            Event::Line { number, text, kind } => match kind {
                LineKind::ModuleHeading => {
                    self.module_name = text.trim_start_matches('#').trim().to_string();
                    self.transition(ParserState::InsideModule);
                    Ok(())
                }
                LineKind::ObjectHeading => self.start_object(number, text),
                LineKind::AttributeMarker => self.start_attribute(number, text),
                LineKind::OptionLine => {
                    self.record_option(number, text);
                    self.transition(ParserState::InsideOptions);
                    Ok(())
                }
                LineKind::Plain => {
                    self.record_text(text);
                    Ok(())
                }
            },
        }
    }

    fn transition(&mut self, next: ParserState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "Parser state transition");
        }
        self.state = next;
    }

    fn start_object(&mut self, number: usize, text: &str) -> Result<(), ImportError> {
        self.finalize_attribute()?;
        self.finalize_object();

        let (name, parent) =
            extract_object_header(text).ok_or_else(|| ImportError::MalformedObjectHeader {
                line: number,
                content: text.to_string(),
            })?;

        if let Some(parent) = parent {
            self.inherits.push(InheritanceRelation {
                parent,
                child: name.clone(),
            });
        }

        self.object = Some(ObjectDef::new(name));
        self.transition(ParserState::InsideObject);
        Ok(())
    }

    fn start_attribute(&mut self, number: usize, text: &str) -> Result<(), ImportError> {
        if self.object.is_none() {
            warn!(line = number, "Ignoring attribute declared outside of an object");
            return Ok(());
        }

        self.finalize_attribute()?;

        let Some((name, required)) = extract_attribute_marker(text) else {
            return Ok(());
        };
        self.attribute = Some(PendingAttribute {
            def: AttributeDef::new(name, required),
            line: number,
        });
        self.transition(ParserState::InsideAttribute);
        Ok(())
    }

    fn record_option(&mut self, number: usize, text: &str) {
        let Some((key, value)) = extract_option(text) else {
            return;
        };

        match self.attribute.as_mut() {
            Some(pending) => {
                pending.def.options.insert(key.to_lowercase(), value);
            }
            None if self.config.warn_on_stray_options => {
                warn!(line = number, key = %key, "Ignoring option outside of an attribute");
            }
            None => {}
        }
    }

    fn record_text(&mut self, text: &str) {
        let text = text.trim();
        match self.state {
            ParserState::InsideModule => self.module_description = text.to_string(),
            ParserState::InsideObject if !text.is_empty() => {
                if let Some(object) = self.object.as_mut() {
                    object.description = Some(text.to_string());
                }
            }
            _ => {}
        }
    }

    /// Validate the pending attribute and move it into the current object
    fn finalize_attribute(&mut self) -> Result<(), ImportError> {
        let Some(pending) = self.attribute.take() else {
            return Ok(());
        };
        let Some(object) = self.object.as_mut() else {
            return Ok(());
        };

        let missing = pending.def.missing_options(&self.config.mandatory_options);
        if !missing.is_empty() {
            return Err(ImportError::MissingMandatoryFields {
                line: pending.line,
                object: object.name.clone(),
                attribute: pending.def.name,
                missing,
            });
        }

        if let Some(dtype) = pending.def.attr_type()
            && !dtype.is_empty()
            && !is_native_type(dtype)
        {
            self.compositions.push(CompositionRelation {
                referenced_type: dtype.to_string(),
                containing_object: object.name.clone(),
            });
        }

        object.attributes.push(pending.def);
        Ok(())
    }

    fn finalize_object(&mut self) {
        if let Some(object) = self.object.take() {
            debug!(
                object = %object.name,
                attributes = object.attributes.len(),
                "Finalized object"
            );
            self.objects.push(object);
        }
    }

    fn into_model(self) -> SchemaModel {
        SchemaModel {
            module_name: self.module_name,
            module_description: self.module_description,
            objects: self.objects,
            inherits: self.inherits,
            compositions: self.compositions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(markdown: &str) -> Result<SchemaModel, ImportError> {
        MarkdownParser::new().parse_str(markdown)
    }

    #[test]
    fn test_simple_module() {
        let model =
            parse("# M\nDescr\n## Obj\n- **x**\n  Type: string\n  Description: d\n").unwrap();

        assert_eq!(model.module_name, "M");
        assert_eq!(model.module_description, "Descr");
        assert_eq!(model.objects.len(), 1);

        let obj = &model.objects[0];
        assert_eq!(obj.name, "Obj");
        assert_eq!(obj.description, None);
        assert_eq!(obj.attributes.len(), 1);

        let attr = &obj.attributes[0];
        assert_eq!(attr.name, "x");
        assert!(!attr.required);
        assert_eq!(attr.attr_type(), Some("string"));
        assert_eq!(attr.description(), Some("d"));
        assert!(model.compositions.is_empty());
        assert!(model.inherits.is_empty());
    }

    #[test]
    fn test_descriptions_last_line_wins() {
        let model = parse(
            "# M\nfirst module line\nsecond module line\n\n## Obj\nfirst\nsecond\n- **x**\n  Type: int\n  Description: d\nignored after attribute\n",
        )
        .unwrap();

        assert_eq!(model.module_description, "second module line");
        let obj = &model.objects[0];
        assert_eq!(obj.description.as_deref(), Some("second"));
        assert_eq!(obj.attributes.len(), 1);
    }

    #[test]
    fn test_option_keys_lowercased_and_kept_in_order() {
        let model = parse(
            "# M\n## Obj\n- **x***\n  TYPE: float\n  Unit: mm\n  Description: length\n  Default: 0\n",
        )
        .unwrap();

        let attr = &model.objects[0].attributes[0];
        assert!(attr.required);
        let keys: Vec<&str> = attr.options.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["type", "unit", "description", "default"]);
        assert_eq!(attr.option("unit"), Some("mm"));
    }

    #[test]
    fn test_composition_for_last_attribute_of_object() {
        let model = parse(
            "# M\n## Person\n- **name**\n  Type: string\n  Description: n\n- **address**\n  Type: Address\n  Description: home\n## Address\n- **street**\n  Type: string\n  Description: s\n",
        )
        .unwrap();

        assert_eq!(
            model.compositions,
            vec![CompositionRelation {
                referenced_type: "Address".to_string(),
                containing_object: "Person".to_string(),
            }]
        );
    }

    #[test]
    fn test_attribute_without_options_is_an_error() {
        let err = parse("# M\n## Obj\n- **x**\n- **y**\n  Type: string\n  Description: d\n")
            .unwrap_err();

        match err {
            ImportError::MissingMandatoryFields {
                line,
                object,
                attribute,
                missing,
            } => {
                assert_eq!(line, 3);
                assert_eq!(object, "Obj");
                assert_eq!(attribute, "x");
                assert_eq!(missing, vec!["description", "type"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_dangling_marker_at_end_is_an_error() {
        let err = parse("# M\n## Obj\n- **x**\n").unwrap_err();
        assert!(matches!(err, ImportError::MissingMandatoryFields { .. }));
    }

    #[test]
    fn test_malformed_object_header_reports_line() {
        let err = parse("# M\n\n## [_Parent_]\n").unwrap_err();
        match err {
            ImportError::MalformedObjectHeader { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "## [_Parent_]");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_attribute_before_any_object_is_ignored() {
        let model = parse("# M\n- **x**\n  Type: string\n## Obj\n").unwrap();
        assert_eq!(model.objects.len(), 1);
        assert!(model.objects[0].attributes.is_empty());
    }

    #[test]
    fn test_custom_mandatory_options() {
        let parser =
            MarkdownParser::with_config(ParserConfig::builder().require_option("unit").build());
        let err = parser
            .parse_str("# M\n## Obj\n- **x**\n  Type: float\n  Description: d\n")
            .unwrap_err();

        match err {
            ImportError::MissingMandatoryFields { missing, .. } => {
                assert_eq!(missing, vec!["unit"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        let model = parse("\n   \n\n").unwrap();
        assert_eq!(model, SchemaModel::default());
    }
}
