//! Unary operator execution

use crate::error::{Result, RuntimeError};
use condeval_core::ast::UnaryOperator;
use condeval_core::Value;

/// Execute a unary operation
pub(crate) fn execute_unary_op(op: &UnaryOperator, operand: &Value) -> Result<Value> {
    match (op, operand) {
        (UnaryOperator::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        // !undefined is true
        (UnaryOperator::Not, Value::Null) => Ok(Value::Bool(true)),
        (UnaryOperator::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOperator::Negate, Value::Null) => Ok(Value::Null),
        _ => Err(RuntimeError::TypeError(format!(
            "Cannot apply {:?} to {:?}",
            op, operand
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not() {
        assert_eq!(
            execute_unary_op(&UnaryOperator::Not, &Value::Bool(true)).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            execute_unary_op(&UnaryOperator::Not, &Value::Null).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_negate() {
        assert_eq!(
            execute_unary_op(&UnaryOperator::Negate, &Value::Number(3.0)).unwrap(),
            Value::Number(-3.0)
        );
    }

    #[test]
    fn test_not_on_number_is_type_error() {
        let err = execute_unary_op(&UnaryOperator::Not, &Value::Number(1.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeError(_)));
    }
}
