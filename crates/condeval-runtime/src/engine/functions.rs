//! The `Math` function namespace
//!
//! The only callable namespace the condition language exposes. Everything
//! operates on numbers; wrong arities or argument types are type errors.

use crate::error::{Result, RuntimeError};
use condeval_core::Value;

/// Resolve a namespace constant, e.g. `Math.PI`
pub(crate) fn constant(name: &str) -> Option<Value> {
    match name {
        "Math.PI" => Some(Value::Number(std::f64::consts::PI)),
        "Math.E" => Some(Value::Number(std::f64::consts::E)),
        _ => None,
    }
}

/// Call a namespace function with evaluated arguments
pub(crate) fn call(name: &str, args: &[Value]) -> Result<Value> {
    match name {
        "Math.abs" => unary(name, args, f64::abs),
        "Math.floor" => unary(name, args, f64::floor),
        "Math.ceil" => unary(name, args, f64::ceil),
        "Math.round" => unary(name, args, f64::round),
        "Math.trunc" => unary(name, args, f64::trunc),
        "Math.sqrt" => unary(name, args, f64::sqrt),
        "Math.pow" => binary(name, args, f64::powf),
        "Math.min" => fold(name, args, f64::min),
        "Math.max" => fold(name, args, f64::max),
        _ => Err(RuntimeError::UnknownFunction(name.to_string())),
    }
}

fn number(name: &str, value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(RuntimeError::TypeError(format!(
            "{} expects numbers, got {}",
            name,
            other.type_name()
        ))),
    }
}

fn unary(name: &str, args: &[Value], f: impl Fn(f64) -> f64) -> Result<Value> {
    match args {
        [value] => Ok(Value::Number(f(number(name, value)?))),
        _ => Err(RuntimeError::TypeError(format!(
            "{} expects 1 argument, got {}",
            name,
            args.len()
        ))),
    }
}

fn binary(name: &str, args: &[Value], f: impl Fn(f64, f64) -> f64) -> Result<Value> {
    match args {
        [a, b] => Ok(Value::Number(f(number(name, a)?, number(name, b)?))),
        _ => Err(RuntimeError::TypeError(format!(
            "{} expects 2 arguments, got {}",
            name,
            args.len()
        ))),
    }
}

fn fold(name: &str, args: &[Value], f: impl Fn(f64, f64) -> f64) -> Result<Value> {
    if args.is_empty() {
        return Err(RuntimeError::TypeError(format!(
            "{} expects at least 1 argument",
            name
        )));
    }
    let mut acc = number(name, &args[0])?;
    for value in &args[1..] {
        acc = f(acc, number(name, value)?);
    }
    Ok(Value::Number(acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(constant("Math.PI"), Some(Value::Number(std::f64::consts::PI)));
        assert_eq!(constant("Math.nope"), None);
    }

    #[test]
    fn test_unary_functions() {
        assert_eq!(
            call("Math.abs", &[Value::Number(-4.0)]).unwrap(),
            Value::Number(4.0)
        );
        assert_eq!(
            call("Math.floor", &[Value::Number(2.7)]).unwrap(),
            Value::Number(2.0)
        );
    }

    #[test]
    fn test_pow_and_minmax() {
        assert_eq!(
            call("Math.pow", &[Value::Number(2.0), Value::Number(3.0)]).unwrap(),
            Value::Number(8.0)
        );
        assert_eq!(
            call(
                "Math.max",
                &[Value::Number(1.0), Value::Number(5.0), Value::Number(3.0)]
            )
            .unwrap(),
            Value::Number(5.0)
        );
        assert_eq!(
            call("Math.min", &[Value::Number(2.0), Value::Number(-1.0)]).unwrap(),
            Value::Number(-1.0)
        );
    }

    #[test]
    fn test_unknown_function() {
        let err = call("Math.bogus", &[]).unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownFunction(_)));
    }

    #[test]
    fn test_wrong_arity() {
        let err = call("Math.abs", &[]).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeError(_)));
    }

    #[test]
    fn test_wrong_argument_type() {
        let err = call("Math.abs", &[Value::String("x".to_string())]).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeError(_)));
    }
}
