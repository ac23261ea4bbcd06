//! Error types for Condeval Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// The condition string failed template validation
    #[error("Syntax error in condition '{condition}': {message}")]
    SyntaxError { condition: String, message: String },

    /// Invalid value
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
