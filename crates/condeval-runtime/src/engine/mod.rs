//! Condition evaluation engine
//!
//! Ties together substitution, expression parsing and evaluation: for each
//! candidate record, the condition's templates are substituted with record
//! properties and the resulting expression is evaluated. A record satisfies
//! the condition iff the result is exactly boolean `true`.

mod evaluator;
mod functions;
mod operators;
mod substitute;
mod tests;

pub use evaluator::evaluate;

use condeval_core::messages::{MessageCatalog, MessageKey};
use condeval_core::{Condition, Value};
use condeval_parser::ExpressionParser;
use std::collections::HashMap;

use crate::error::{Result, RuntimeError};

/// Evaluates parsed conditions against data records
#[derive(Debug, Default)]
pub struct ConditionEngine {
    messages: MessageCatalog,
}

impl ConditionEngine {
    /// Create an engine with the default message catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom message catalog for data diagnostics
    pub fn with_messages(messages: MessageCatalog) -> Self {
        Self { messages }
    }

    /// Return the records in `data` that satisfy `condition`, in input
    /// order.
    ///
    /// `data` is a single record (object) or a sequence of records. With
    /// `stop_at_first_match` the scan stops at the first satisfying record,
    /// so at most one is returned. Malformed data and evaluation failures
    /// surface as errors; they are never swallowed.
    pub fn satisfying_data(
        &self,
        condition: &Condition,
        data: &Value,
        stop_at_first_match: bool,
    ) -> Result<Vec<Value>> {
        let records = self.collect_records(data)?;
        let mut matched = Vec::new();

        for record in records {
            if self.satisfies(condition, record)? {
                matched.push(Value::Object(record.clone()));
                if stop_at_first_match {
                    break;
                }
            }
        }

        Ok(matched)
    }

    /// True when at least one record in `data` satisfies `condition`
    pub fn is_satisfied_by(&self, condition: &Condition, data: &Value) -> Result<bool> {
        Ok(!self.satisfying_data(condition, data, true)?.is_empty())
    }

    fn satisfies(&self, condition: &Condition, record: &HashMap<String, Value>) -> Result<bool> {
        let substituted = substitute::apply(condition, record);

        let expression =
            ExpressionParser::parse(&substituted).map_err(|source| RuntimeError::EvaluationFailure {
                condition: substituted.clone(),
                source,
            })?;

        let result = evaluator::evaluate(&expression)?;
        tracing::debug!(
            "Evaluated '{}' => {:?} (from '{}')",
            substituted,
            result,
            condition.source()
        );

        // Exactly boolean true, not merely truthy
        Ok(result == Value::Bool(true))
    }

    /// Accept a single record or a sequence of records, rejecting anything
    /// else before evaluation starts. Diagnostic text is rendered through
    /// the engine's message catalog.
    fn collect_records<'a>(&self, data: &'a Value) -> Result<Vec<&'a HashMap<String, Value>>> {
        match data {
            Value::Null => Err(RuntimeError::MissingParameter(self.messages.render(
                MessageKey::MissingParameter,
                &[("name", "data".to_string())],
            ))),
            Value::Object(map) => Ok(vec![map]),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Object(map) => Ok(map),
                    other => Err(self.invalid_data(&format!(
                        "an array element of type {}",
                        other.type_name()
                    ))),
                })
                .collect(),
            other => Err(self.invalid_data(other.type_name())),
        }
    }

    fn invalid_data(&self, actual: &str) -> RuntimeError {
        RuntimeError::InvalidData(self.messages.render(
            MessageKey::InvalidData,
            &[("actual", actual.to_string())],
        ))
    }
}
