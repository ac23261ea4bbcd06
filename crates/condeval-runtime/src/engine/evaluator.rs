//! Expression evaluator
//!
//! Walks an expression AST and produces a value. Record properties are
//! already substituted as literals by the time an expression reaches the
//! evaluator, so evaluation is a pure function of the AST: no environment,
//! no side effects.

use crate::error::{Result, RuntimeError};
use condeval_core::ast::Expression;
use condeval_core::Value;

use super::{functions, operators};

/// Evaluate an expression to a value
pub fn evaluate(expr: &Expression) -> Result<Value> {
    match expr {
        Expression::Literal(value) => Ok(value.clone()),

        Expression::Identifier(name) => functions::constant(name)
            .ok_or_else(|| RuntimeError::UndefinedIdentifier(name.clone())),

        Expression::Array(elements) => {
            let values: Result<Vec<Value>> = elements.iter().map(evaluate).collect();
            Ok(Value::Array(values?))
        }

        Expression::Member { object, property } => {
            let value = evaluate(object)?;
            member_access(&value, property)
        }

        Expression::Unary { op, operand } => {
            let value = evaluate(operand)?;
            operators::execute_unary_op(op, &value)
        }

        Expression::Binary { left, op, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            if op.is_comparison() {
                operators::execute_compare(&left, op, &right).map(Value::Bool)
            } else {
                operators::execute_binary_op(&left, op, &right)
            }
        }

        Expression::FunctionCall { name, args } => {
            let values: Result<Vec<Value>> = args.iter().map(evaluate).collect();
            functions::call(name, &values?)
        }
    }
}

fn member_access(value: &Value, property: &str) -> Result<Value> {
    match (value, property) {
        (Value::String(s), "length") => Ok(Value::Number(s.chars().count() as f64)),
        (Value::Array(items), "length") => Ok(Value::Number(items.len() as f64)),
        // Missing object members behave like missing properties
        (Value::Object(map), _) => Ok(map.get(property).cloned().unwrap_or(Value::Null)),
        _ => Err(RuntimeError::TypeError(format!(
            "No property '{}' on {}",
            property,
            value.type_name()
        ))),
    }
}
