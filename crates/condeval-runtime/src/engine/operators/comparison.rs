//! Comparison operator execution

use crate::error::{Result, RuntimeError};
use condeval_core::ast::Operator;
use condeval_core::Value;

/// Execute a comparison operation
pub(crate) fn execute_compare(left: &Value, op: &Operator, right: &Value) -> Result<bool> {
    match op {
        Operator::StrictEq => Ok(strict_eq(left, right)),
        Operator::StrictNe => Ok(!strict_eq(left, right)),
        Operator::Eq => Ok(loose_eq(left, right)),
        Operator::Ne => Ok(!loose_eq(left, right)),
        Operator::Gt | Operator::Ge | Operator::Lt | Operator::Le => order(left, op, right),
        other => Err(RuntimeError::InvalidOperation(format!(
            "Not a comparison operator: {}",
            other.symbol()
        ))),
    }
}

/// Same type, same value
fn strict_eq(left: &Value, right: &Value) -> bool {
    left == right
}

/// Equality with the coercions the condition language supports:
/// number/numeric-string, bool/number, and null equal to null only
fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Number(l), Value::String(s)) | (Value::String(s), Value::Number(l)) => {
            s.trim().parse::<f64>().map(|r| *l == r).unwrap_or(false)
        }
        (Value::Bool(b), Value::Number(n)) | (Value::Number(n), Value::Bool(b)) => {
            *n == if *b { 1.0 } else { 0.0 }
        }
        _ => left == right,
    }
}

/// Ordering comparisons: numbers numerically, strings lexicographically.
/// Null ordered against anything is false, so conditions over missing
/// properties fail gracefully rather than erroring.
fn order(left: &Value, op: &Operator, right: &Value) -> Result<bool> {
    match (left, right) {
        (Value::Null, _) | (_, Value::Null) => {
            tracing::debug!(
                "Null comparison: {:?} {} {:?}, returning false",
                left,
                op.symbol(),
                right
            );
            Ok(false)
        }
        (Value::Number(l), Value::Number(r)) => Ok(apply_order(l, op, r)),
        (Value::String(l), Value::String(r)) => Ok(apply_order(l, op, r)),
        _ => Err(RuntimeError::InvalidOperation(format!(
            "Cannot compare {:?} and {:?} with {}",
            left,
            right,
            op.symbol()
        ))),
    }
}

fn apply_order<T: PartialOrd + ?Sized>(l: &T, op: &Operator, r: &T) -> bool {
    match op {
        Operator::Gt => l > r,
        Operator::Ge => l >= r,
        Operator::Lt => l < r,
        Operator::Le => l <= r,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Value {
        Value::String(text.to_string())
    }

    #[test]
    fn test_numeric_ordering() {
        assert!(execute_compare(&Value::Number(2.0), &Operator::Gt, &Value::Number(1.0)).unwrap());
        assert!(execute_compare(&Value::Number(1.0), &Operator::Le, &Value::Number(1.0)).unwrap());
        assert!(!execute_compare(&Value::Number(1.0), &Operator::Gt, &Value::Number(2.0)).unwrap());
    }

    #[test]
    fn test_string_ordering() {
        assert!(execute_compare(&s("b"), &Operator::Gt, &s("a")).unwrap());
        assert!(execute_compare(&s("abc"), &Operator::Lt, &s("abd")).unwrap());
    }

    #[test]
    fn test_strict_equality_requires_same_type() {
        assert!(execute_compare(&Value::Number(1.0), &Operator::StrictEq, &Value::Number(1.0)).unwrap());
        assert!(!execute_compare(&Value::Number(1.0), &Operator::StrictEq, &s("1")).unwrap());
        assert!(execute_compare(&Value::Number(1.0), &Operator::StrictNe, &s("1")).unwrap());
    }

    #[test]
    fn test_loose_equality_coerces() {
        assert!(execute_compare(&Value::Number(1.0), &Operator::Eq, &s("1")).unwrap());
        assert!(execute_compare(&Value::Bool(true), &Operator::Eq, &Value::Number(1.0)).unwrap());
        assert!(!execute_compare(&Value::Bool(false), &Operator::Eq, &Value::Number(1.0)).unwrap());
        assert!(execute_compare(&s("x"), &Operator::Ne, &Value::Number(1.0)).unwrap());
    }

    #[test]
    fn test_null_equality() {
        assert!(execute_compare(&Value::Null, &Operator::Eq, &Value::Null).unwrap());
        assert!(!execute_compare(&Value::Null, &Operator::Eq, &Value::Number(0.0)).unwrap());
        assert!(execute_compare(&Value::Null, &Operator::StrictEq, &Value::Null).unwrap());
    }

    #[test]
    fn test_null_ordering_is_false() {
        assert!(!execute_compare(&Value::Null, &Operator::Gt, &Value::Number(1.0)).unwrap());
        assert!(!execute_compare(&Value::Number(1.0), &Operator::Le, &Value::Null).unwrap());
    }

    #[test]
    fn test_mixed_type_ordering_is_invalid() {
        let err = execute_compare(&Value::Number(1.0), &Operator::Gt, &s("a")).unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidOperation(_)));
    }
}
