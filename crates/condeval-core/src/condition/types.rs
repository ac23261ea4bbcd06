//! Condition types

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

use super::parser::TemplateParser;

/// A single `{{propertyName}}` occurrence within a condition string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Inclusive byte offset of the first `{` in the original string
    pub start: usize,
    /// Inclusive byte offset of the last `}` in the original string
    pub end: usize,
    /// Raw text between the delimiters; may contain dots denoting a
    /// nested-property path
    pub property_name: String,
}

impl Template {
    pub fn new(start: usize, end: usize, property_name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            property_name: property_name.into(),
        }
    }
}

/// Outcome of parsing a condition string.
///
/// `is_valid == false` implies `templates == None`; `is_valid == true`
/// implies `templates` is a (possibly empty) sequence ordered by ascending
/// `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub is_valid: bool,
    pub message: String,
    pub templates: Option<Vec<Template>>,
}

impl ParseResult {
    /// Successful parse
    pub fn valid(templates: Vec<Template>) -> Self {
        Self {
            is_valid: true,
            message: String::new(),
            templates: Some(templates),
        }
    }

    /// Failed parse with a diagnostic message
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
            templates: None,
        }
    }
}

/// An immutable parsed condition.
///
/// Created only through [`Condition::parse`]; holds the original condition
/// string together with its template occurrences and is never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    source: String,
    templates: Vec<Template>,
}

impl Condition {
    /// Parse `source` into a condition.
    ///
    /// On failure the diagnostic is logged and no instance is produced.
    pub fn parse(source: &str) -> Result<Self, CoreError> {
        let result = TemplateParser::new().parse(source);
        match result.templates {
            Some(templates) if result.is_valid => Ok(Self {
                source: source.to_string(),
                templates,
            }),
            _ => {
                log::error!("Condition parse failed: {}", result.message);
                Err(CoreError::SyntaxError {
                    condition: source.to_string(),
                    message: result.message,
                })
            }
        }
    }

    /// Returns true when `source` parses as a condition string.
    pub fn is_valid_source(source: &str) -> bool {
        TemplateParser::new().parse(source).is_valid
    }

    /// The original condition string
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Template occurrences, ordered by ascending start offset
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_result_invariants() {
        let ok = ParseResult::valid(vec![]);
        assert!(ok.is_valid);
        assert!(ok.message.is_empty());
        assert_eq!(ok.templates, Some(vec![]));

        let bad = ParseResult::invalid("nope");
        assert!(!bad.is_valid);
        assert_eq!(bad.message, "nope");
        assert!(bad.templates.is_none());
    }

    #[test]
    fn test_condition_parse_success() {
        let condition = Condition::parse("{{a.b}} > 5").unwrap();
        assert_eq!(condition.source(), "{{a.b}} > 5");
        assert_eq!(condition.templates(), &[Template::new(0, 6, "a.b")]);
    }

    #[test]
    fn test_condition_parse_failure_yields_no_instance() {
        let err = Condition::parse("{{a}} {{b").unwrap_err();
        match err {
            CoreError::SyntaxError { condition, message } => {
                assert_eq!(condition, "{{a}} {{b");
                assert!(message.contains("{{b"));
            }
            other => panic!("Expected SyntaxError, got {:?}", other),
        }
    }

    #[test]
    fn test_is_valid_source() {
        assert!(Condition::is_valid_source("2 > 1"));
        assert!(Condition::is_valid_source("{{name}} == 'x'"));
        assert!(!Condition::is_valid_source("a}} > 1"));
    }

    #[test]
    fn test_condition_templates_ordered_by_start() {
        let condition = Condition::parse("{{a}} + {{b}} > {{c}}").unwrap();
        let starts: Vec<usize> = condition.templates().iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![0, 8, 16]);
    }
}
