//! End-to-end condition evaluation tests

use crate::engine::ConditionEngine;
use condeval_core::{Condition, Value};

fn records(json: serde_json::Value) -> Value {
    Value::from(json)
}

#[test]
fn test_unconditionally_true_condition_returns_all_records() {
    let engine = ConditionEngine::new();
    let condition = Condition::parse("2 > 1").unwrap();
    let data = records(serde_json::json!([{"name": "x"}, {"name": "y"}]));

    let matched = engine.satisfying_data(&condition, &data, false).unwrap();
    assert_eq!(matched.len(), 2);
    assert_eq!(matched, match data { Value::Array(ref items) => items.clone(), _ => vec![] });
}

#[test]
fn test_single_record_data() {
    let engine = ConditionEngine::new();
    let condition = Condition::parse("{{age}} >= 18").unwrap();

    let adult = records(serde_json::json!({"age": 21}));
    assert_eq!(engine.satisfying_data(&condition, &adult, false).unwrap().len(), 1);

    let minor = records(serde_json::json!({"age": 12}));
    assert!(engine.satisfying_data(&condition, &minor, false).unwrap().is_empty());
}

#[test]
fn test_length_boundary() {
    let engine = ConditionEngine::new();
    let condition = Condition::parse("{{name}}.length < 4").unwrap();

    let short = records(serde_json::json!([{"name": "abc"}]));
    assert!(engine.is_satisfied_by(&condition, &short).unwrap());

    let long = records(serde_json::json!([{"name": "abcd"}]));
    assert!(!engine.is_satisfied_by(&condition, &long).unwrap());
}

#[test]
fn test_is_satisfied_by_any_record() {
    let engine = ConditionEngine::new();
    let condition = Condition::parse("{{name}}.length < 5").unwrap();
    let data = records(serde_json::json!([{"name": "first"}, {"name": "ok"}]));

    // "first" has length 5, "ok" satisfies
    assert!(engine.is_satisfied_by(&condition, &data).unwrap());
}

#[test]
fn test_stop_at_first_match_returns_first_in_input_order() {
    let engine = ConditionEngine::new();
    let condition = Condition::parse("{{score}} > 10").unwrap();
    let data = records(serde_json::json!([
        {"id": 1, "score": 5},
        {"id": 2, "score": 50},
        {"id": 3, "score": 99}
    ]));

    let matched = engine.satisfying_data(&condition, &data, true).unwrap();
    assert_eq!(matched.len(), 1);
    match &matched[0] {
        Value::Object(map) => assert_eq!(map.get("id"), Some(&Value::Number(2.0))),
        other => panic!("Expected object, got {:?}", other),
    }
}

#[test]
fn test_all_matches_preserve_input_order() {
    let engine = ConditionEngine::new();
    let condition = Condition::parse("{{score}} > 10").unwrap();
    let data = records(serde_json::json!([
        {"id": 1, "score": 50},
        {"id": 2, "score": 5},
        {"id": 3, "score": 99}
    ]));

    let matched = engine.satisfying_data(&condition, &data, false).unwrap();
    let ids: Vec<&Value> = matched
        .iter()
        .map(|record| match record {
            Value::Object(map) => &map["id"],
            other => panic!("Expected object, got {:?}", other),
        })
        .collect();
    assert_eq!(ids, vec![&Value::Number(1.0), &Value::Number(3.0)]);
}

#[test]
fn test_compound_condition() -> anyhow::Result<()> {
    let engine = ConditionEngine::new();
    let condition = Condition::parse("{{age}} >= 18 && {{country}} == \"US\"")?;
    let data = records(serde_json::json!([
        {"age": 25, "country": "US"},
        {"age": 25, "country": "CA"},
        {"age": 12, "country": "US"}
    ]));

    let matched = engine.satisfying_data(&condition, &data, false)?;
    assert_eq!(matched.len(), 1);
    Ok(())
}

#[test]
fn test_nested_property_and_flat_key_precedence() {
    let engine = ConditionEngine::new();
    let condition = Condition::parse("{{a.b}} == \"flat\"").unwrap();
    let data = records(serde_json::json!([
        {"a.b": "flat", "a": {"b": "nested"}}
    ]));

    assert!(engine.is_satisfied_by(&condition, &data).unwrap());
}

#[test]
fn test_truthy_non_boolean_result_does_not_satisfy() {
    let engine = ConditionEngine::new();
    // Evaluates to a number, not a boolean
    let condition = Condition::parse("{{score}} + 1").unwrap();
    let data = records(serde_json::json!([{"score": 41}]));

    assert!(!engine.is_satisfied_by(&condition, &data).unwrap());
}

#[test]
fn test_missing_property_compares_as_undefined() {
    let engine = ConditionEngine::new();
    let condition = Condition::parse("{{missing}} == undefined").unwrap();
    let data = records(serde_json::json!([{"present": 1}]));

    assert!(engine.is_satisfied_by(&condition, &data).unwrap());
}

#[test]
fn test_math_namespace_in_condition() {
    let engine = ConditionEngine::new();
    let condition = Condition::parse("Math.abs({{delta}}) <= 3").unwrap();
    let data = records(serde_json::json!([{"delta": -2}, {"delta": 9}]));

    let matched = engine.satisfying_data(&condition, &data, false).unwrap();
    assert_eq!(matched.len(), 1);
}

#[test]
fn test_string_valued_template_round_trips_quoting() {
    let engine = ConditionEngine::new();
    let condition = Condition::parse("{{note}} == \"say \\\"hi\\\"\"").unwrap();
    let data = records(serde_json::json!([{"note": "say \"hi\""}]));

    assert!(engine.is_satisfied_by(&condition, &data).unwrap());
}

#[test]
fn test_empty_record_list() {
    let engine = ConditionEngine::new();
    let condition = Condition::parse("2 > 1").unwrap();
    let data = records(serde_json::json!([]));

    assert!(engine.satisfying_data(&condition, &data, false).unwrap().is_empty());
    assert!(!engine.is_satisfied_by(&condition, &data).unwrap());
}

#[test]
fn test_evaluation_does_not_mutate_input() {
    let engine = ConditionEngine::new();
    let condition = Condition::parse("{{n}} > 0").unwrap();
    let data = records(serde_json::json!([{"n": 1}]));
    let snapshot = data.clone();

    engine.satisfying_data(&condition, &data, false).unwrap();
    assert_eq!(data, snapshot);
}
