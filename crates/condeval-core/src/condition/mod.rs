//! Templated condition parsing
//!
//! A condition is a boolean-expression string containing `{{propertyName}}`
//! placeholders, e.g. `{{user.age}} > 18 && {{status}} == "active"`.

mod parser;
mod types;

pub use parser::TemplateParser;
pub use types::{Condition, ParseResult, Template};
