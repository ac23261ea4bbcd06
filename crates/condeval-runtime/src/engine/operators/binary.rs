//! Binary operator execution (arithmetic and logical)

use crate::error::{Result, RuntimeError};
use condeval_core::ast::Operator;
use condeval_core::Value;

/// Execute an arithmetic or logical binary operation
pub(crate) fn execute_binary_op(left: &Value, op: &Operator, right: &Value) -> Result<Value> {
    // Null in arithmetic propagates Null, so expressions over missing
    // properties stay evaluable instead of erroring
    match (left, right) {
        (Value::Null, _) | (_, Value::Null) => {
            tracing::debug!(
                "Null in binary operation: {:?} {} {:?}, returning Null",
                left,
                op.symbol(),
                right
            );
            return Ok(Value::Null);
        }
        _ => {}
    }

    match (left, op, right) {
        // Arithmetic operations
        (Value::Number(l), Operator::Add, Value::Number(r)) => Ok(Value::Number(l + r)),
        (Value::Number(l), Operator::Sub, Value::Number(r)) => Ok(Value::Number(l - r)),
        (Value::Number(l), Operator::Mul, Value::Number(r)) => Ok(Value::Number(l * r)),
        (Value::Number(l), Operator::Div, Value::Number(r)) => {
            if *r == 0.0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Number(l / r))
            }
        }
        (Value::Number(l), Operator::Mod, Value::Number(r)) => {
            if *r == 0.0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Number(l % r))
            }
        }

        // String concatenation
        (Value::String(l), Operator::Add, Value::String(r)) => {
            Ok(Value::String(format!("{}{}", l, r)))
        }

        // Logical operations
        (Value::Bool(l), Operator::And, Value::Bool(r)) => Ok(Value::Bool(*l && *r)),
        (Value::Bool(l), Operator::Or, Value::Bool(r)) => Ok(Value::Bool(*l || *r)),

        _ => Err(RuntimeError::InvalidOperation(format!(
            "Cannot apply {} to {:?} and {:?}",
            op.symbol(),
            left,
            right
        ))),
    }
}
