//! Template substitution
//!
//! Replaces every `{{propertyName}}` span in a condition with the literal
//! rendering of the resolved property value. Substitutions run left to
//! right with a running offset correction, since each replacement shifts
//! every later template span.

use condeval_core::{Condition, Value};
use std::collections::HashMap;

use crate::context::RecordContext;
use condeval_core::strings::splice;

/// Text spliced in for properties the record does not contain
const UNDEFINED_LITERAL: &str = "undefined";

/// Substitute every template of `condition` with values from `fields`,
/// returning the fully-substituted expression string.
pub(crate) fn apply(condition: &Condition, fields: &HashMap<String, Value>) -> String {
    let context = RecordContext::new(fields);
    let mut out = condition.source().to_string();
    let mut delta: isize = 0;

    for template in condition.templates() {
        let literal = match context.resolve(&template.property_name) {
            Some(value) => value.to_literal(),
            None => UNDEFINED_LITERAL.to_string(),
        };

        let start = (template.start as isize + delta) as usize;
        let end = (template.end as isize + delta) as usize;
        let span = end - start + 1;

        out = splice(&out, &literal, start, end);
        delta += literal.len() as isize - span as isize;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(json: serde_json::Value) -> HashMap<String, Value> {
        match Value::from(json) {
            Value::Object(map) => map,
            other => panic!("Expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_substitute_single_template() {
        let condition = Condition::parse("{{age}} > 18").unwrap();
        let record = fields(serde_json::json!({"age": 21}));
        assert_eq!(apply(&condition, &record), "21 > 18");
    }

    #[test]
    fn test_substitute_string_is_quoted() {
        let condition = Condition::parse("{{name}} == \"x\"").unwrap();
        let record = fields(serde_json::json!({"name": "x"}));
        assert_eq!(apply(&condition, &record), "\"x\" == \"x\"");
    }

    #[test]
    fn test_offsets_shift_left_to_right() {
        // The first replacement is longer than its span, the second shorter;
        // both must land on the right spans.
        let condition = Condition::parse("{{a}} + {{b}} == 107").unwrap();
        let record = fields(serde_json::json!({"a": 100, "b": 7}));
        assert_eq!(apply(&condition, &record), "100 + 7 == 107");
    }

    #[test]
    fn test_missing_property_renders_undefined() {
        let condition = Condition::parse("{{nope}} == undefined").unwrap();
        let record = fields(serde_json::json!({}));
        assert_eq!(apply(&condition, &record), "undefined == undefined");
    }

    #[test]
    fn test_nested_path_substitution() {
        let condition = Condition::parse("{{user.age}} >= 18").unwrap();
        let record = fields(serde_json::json!({"user": {"age": 30}}));
        assert_eq!(apply(&condition, &record), "30 >= 18");
    }

    #[test]
    fn test_no_residual_delimiters() {
        let condition =
            Condition::parse("{{a}} > 1 && {{b.c}} == \"s\" && {{d}}.length > 0").unwrap();
        let record = fields(serde_json::json!({
            "a": 5,
            "b": {"c": "s"},
            "d": [1, 2]
        }));
        let substituted = apply(&condition, &record);
        assert!(!substituted.contains("{{"));
        assert!(!substituted.contains("}}"));
        assert_eq!(substituted, "5 > 1 && \"s\" == \"s\" && [1,2].length > 0");
    }

    #[test]
    fn test_adjacent_templates_substitute_cleanly() {
        let condition = Condition::parse("{{a}}{{b}} == 12").unwrap();
        let record = fields(serde_json::json!({"a": 1, "b": 2}));
        assert_eq!(apply(&condition, &record), "12 == 12");
    }
}
