//! Expression AST nodes

use super::operator::Operator;
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Expression AST node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Literal value
    Literal(Value),

    /// Named identifier (e.g. `Math.PI`). Only namespace constants resolve;
    /// anything else fails at evaluation time.
    Identifier(String),

    /// Array literal with expression elements
    Array(Vec<Expression>),

    /// Member access (e.g. `"abc".length`, `[1,2].length`)
    Member {
        object: Box<Expression>,
        property: String,
    },

    /// Binary operation
    Binary {
        left: Box<Expression>,
        op: Operator,
        right: Box<Expression>,
    },

    /// Unary operation
    Unary {
        op: UnaryOperator,
        operand: Box<Expression>,
    },

    /// Function call (e.g. `Math.max(1, 2)`)
    FunctionCall { name: String, args: Vec<Expression> },
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    /// Logical NOT (!)
    Not,
    /// Arithmetic negation (-)
    Negate,
}

impl Expression {
    /// Create a literal expression
    pub fn literal(value: Value) -> Self {
        Expression::Literal(value)
    }

    /// Create an identifier expression
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    /// Create a binary expression
    pub fn binary(left: Expression, op: Operator, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Create a unary expression
    pub fn unary(op: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Create a member access expression
    pub fn member(object: Expression, property: impl Into<String>) -> Self {
        Expression::Member {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// Create a function call expression
    pub fn function_call(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::FunctionCall {
            name: name.into(),
            args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_expression() {
        let expr = Expression::literal(Value::Number(42.0));
        assert_eq!(expr, Expression::Literal(Value::Number(42.0)));
    }

    #[test]
    fn test_binary_expression() {
        let expr = Expression::binary(
            Expression::literal(Value::Number(1.0)),
            Operator::Lt,
            Expression::literal(Value::Number(2.0)),
        );
        match expr {
            Expression::Binary { op, .. } => assert_eq!(op, Operator::Lt),
            _ => panic!("Expected Binary"),
        }
    }

    #[test]
    fn test_member_expression() {
        let expr = Expression::member(
            Expression::literal(Value::String("abc".to_string())),
            "length",
        );
        match expr {
            Expression::Member { property, .. } => assert_eq!(property, "length"),
            _ => panic!("Expected Member"),
        }
    }
}
