//! Runtime error types

use condeval_parser::ParseError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Required argument absent; the text comes from the engine's message
    /// catalog
    #[error("{0}")]
    MissingParameter(String),

    /// Data argument is not a record or a sequence of records; the text
    /// comes from the engine's message catalog
    #[error("{0}")]
    InvalidData(String),

    /// Type error
    #[error("Type error: {0}")]
    TypeError(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Identifier with no binding (record properties are substituted before
    /// evaluation, so any surviving identifier is undefined)
    #[error("Undefined identifier: {0}")]
    UndefinedIdentifier(String),

    /// Unknown function
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// The substituted condition failed to parse as an expression
    #[error("Failed to evaluate substituted condition '{condition}': {source}")]
    EvaluationFailure {
        condition: String,
        #[source]
        source: ParseError,
    },
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
