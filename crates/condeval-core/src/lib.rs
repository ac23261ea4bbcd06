//! Condeval Core - Core types and template parsing for the Condeval condition engine
//!
//! This crate provides the fundamental types used across the Condeval workspace:
//! - Value types for runtime data
//! - The templated-condition data model (`Template`, `ParseResult`, `Condition`)
//! - The `{{propertyName}}` template parser
//! - Expression AST definitions
//! - String helpers and the diagnostic message catalog

pub mod ast;
pub mod condition;
pub mod error;
pub mod messages;
pub mod strings;
pub mod types;

// Re-export commonly used types
pub use condition::{Condition, ParseResult, Template, TemplateParser};
pub use error::CoreError;
pub use types::Value;
