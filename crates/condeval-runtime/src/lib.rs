//! Condeval Runtime - Evaluation engine for templated conditions
//!
//! Substitutes record properties into a parsed [`Condition`] and evaluates
//! the resulting expression, yielding the records that satisfy it.
//!
//! [`Condition`]: condeval_core::Condition

pub mod context;
pub mod engine;
pub mod error;

pub use context::RecordContext;
pub use engine::ConditionEngine;
pub use error::{Result, RuntimeError};
