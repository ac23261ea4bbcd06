//! Diagnostic message catalog
//!
//! Human-readable error text is looked up in an explicitly constructed
//! catalog instead of process-wide state, so callers can swap in their own
//! wording (or locale) by passing a different catalog to the parser.
//! Placeholders of the form `{name}` are interpolated at render time.

use std::collections::HashMap;

/// Message keys understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// A condition string contained a malformed `{{ }}` template
    TemplateSyntaxError,
    /// The data argument was absent
    MissingParameter,
    /// The data argument was present but not a record or list of records
    InvalidData,
}

/// Catalog of diagnostic message templates
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    templates: HashMap<MessageKey, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        let mut templates = HashMap::new();
        templates.insert(
            MessageKey::TemplateSyntaxError,
            "Invalid template '{snippet}' at offset {offset} in condition '{condition}'. \
             Templates must take the form {{propertyName}} or \
             {{propertyName1.propertyName2...}}."
                .to_string(),
        );
        templates.insert(
            MessageKey::MissingParameter,
            "Missing required parameter '{name}'.".to_string(),
        );
        templates.insert(
            MessageKey::InvalidData,
            "Expected a record or an array of records, got {actual}.".to_string(),
        );
        Self { templates }
    }
}

impl MessageCatalog {
    /// Create the default (English) catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from explicit message templates. Keys missing from
    /// the map fall back to the default catalog at render time.
    pub fn with_templates(templates: HashMap<MessageKey, String>) -> Self {
        Self { templates }
    }

    /// Render the message for `key`, substituting every `{name}` placeholder
    /// that appears in `args`.
    pub fn render(&self, key: MessageKey, args: &[(&str, String)]) -> String {
        let template = match self.templates.get(&key) {
            Some(t) => t.clone(),
            None => match Self::default().templates.get(&key) {
                Some(t) => t.clone(),
                None => return String::new(),
            },
        };

        let mut message = template;
        for (name, value) in args {
            message = message.replace(&format!("{{{}}}", name), value);
        }
        message
    }
}
