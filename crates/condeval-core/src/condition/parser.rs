//! Template parser
//!
//! Locates `{{propertyName}}` occurrences in a condition string, e.g.:
//! - `{{amount}} > 100`
//! - `{{user.risk_level}} == "high"`
//! - `{{a.b}} + {{c}} >= 10`
//!
//! Delimiters inside quoted string literals are not template delimiters, so
//! the scan runs over a masked copy of the input while all extraction uses
//! the original string and original byte offsets.

use crate::condition::types::{ParseResult, Template};
use crate::messages::{MessageCatalog, MessageKey};
use crate::strings;

const MASK_FILL: u8 = b'#';

/// Parser for `{{propertyName}}` templates
#[derive(Debug, Default)]
pub struct TemplateParser {
    messages: MessageCatalog,
}

impl TemplateParser {
    /// Create a parser with the default message catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom message catalog
    pub fn with_messages(messages: MessageCatalog) -> Self {
        Self { messages }
    }

    /// Parse every template occurrence in `condition`.
    ///
    /// An empty condition is valid and yields an empty template list. Any
    /// unbalanced or malformed `{{ }}` sequence aborts parsing with a
    /// diagnostic naming the offending substring and its offset; nothing is
    /// silently repaired.
    pub fn parse(&self, condition: &str) -> ParseResult {
        let masked = strings::mask_quoted(condition, MASK_FILL);
        let opens = find_all(&masked, "{{");
        let closes = find_all(&masked, "}}");

        let mut templates = Vec::with_capacity(opens.len());

        // Forward pass: match every `{{` with the next `}}`. When the next
        // `{{` comes first, or no `}}` exists at all, the remainder of the
        // string becomes the candidate so the error names the whole span
        // instead of silently truncating.
        for (i, &open) in opens.iter().enumerate() {
            let close = closes.iter().copied().find(|&c| c >= open + 2);
            let next_open = opens.get(i + 1).copied();

            let end = match (close, next_open) {
                (Some(c), Some(n)) if c < n => c + 1,
                (Some(c), None) => c + 1,
                _ => condition.len().saturating_sub(1),
            };

            match self.validate(condition, &masked, open, end) {
                Ok(template) => templates.push(template),
                Err(message) => return ParseResult::invalid(message),
            }
        }

        // Backward pass: match every `}}` back to its `{{`, falling back to
        // just after the previous `}}` (or offset 0). Catches trailing
        // closes the forward pass never reaches.
        for (i, &close) in closes.iter().enumerate().rev() {
            let open = opens.iter().rev().copied().find(|&o| o + 2 <= close);
            let prev_close = if i > 0 { Some(closes[i - 1]) } else { None };

            let start = match (open, prev_close) {
                (Some(o), Some(p)) if o >= p + 2 => o,
                (Some(o), None) => o,
                (_, Some(p)) => p + 2,
                (None, None) => 0,
            };

            if let Err(message) = self.validate(condition, &masked, start, close + 1) {
                return ParseResult::invalid(message);
            }
        }

        ParseResult::valid(templates)
    }

    /// Validate the candidate span `[start, end]`: it must begin with `{{`,
    /// end with `}}` and contain no further delimiters in between. Delimiter
    /// checks run on the masked copy; the property name is extracted from
    /// the original string.
    fn validate(
        &self,
        condition: &str,
        masked: &str,
        start: usize,
        end: usize,
    ) -> Result<Template, String> {
        let bytes = masked.as_bytes();
        let well_formed = end >= start + 3
            && end < bytes.len()
            && bytes[start] == b'{'
            && bytes[start + 1] == b'{'
            && bytes[end - 1] == b'}'
            && bytes[end] == b'}'
            && !contains_pair(&bytes[start + 2..end - 1], b'{')
            && !contains_pair(&bytes[start + 2..end - 1], b'}');

        if well_formed {
            // Boundaries sit on ASCII braces, so slicing the original here
            // is always valid.
            Ok(Template::new(start, end, &condition[start + 2..end - 1]))
        } else {
            let snippet = snippet_lossy(condition, start, end);
            Err(self.messages.render(
                MessageKey::TemplateSyntaxError,
                &[
                    ("condition", condition.to_string()),
                    ("snippet", snippet),
                    ("offset", start.to_string()),
                ],
            ))
        }
    }
}

/// Byte offsets of non-overlapping occurrences of `pat` in `s`
fn find_all(s: &str, pat: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut from = 0;
    while let Some(i) = s[from..].find(pat) {
        positions.push(from + i);
        from += i + pat.len();
    }
    positions
}

/// True when `bytes` contains `delim` twice in a row
fn contains_pair(bytes: &[u8], delim: u8) -> bool {
    bytes.windows(2).any(|w| w[0] == delim && w[1] == delim)
}

/// Extract the inclusive byte span `[start, end]` for a diagnostic. The span
/// may end mid-character when the leniency policy extends a candidate to the
/// end of the input, so this goes through a lossy conversion.
fn snippet_lossy(s: &str, start: usize, end: usize) -> String {
    if start >= s.len() || end < start {
        return String::new();
    }
    let end = end.min(s.len() - 1);
    String::from_utf8_lossy(&s.as_bytes()[start..=end]).into_owned()
}
