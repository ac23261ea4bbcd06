//! Condeval Parser - Expression parsing for the Condeval condition engine
//!
//! Turns a fully-substituted condition string (no remaining `{{ }}`
//! templates) into an expression AST from `condeval-core`.

pub mod error;
pub mod expression_parser;

pub use error::{ParseError, Result};
pub use expression_parser::ExpressionParser;
