//! Expression parser
//!
//! Parses string expressions into Expression AST nodes.
//!
//! Supported syntax:
//! - Literals: `42`, `3.14`, `"string"`, `'string'`, `true`, `false`,
//!   `null`, `undefined`, `[1, 2]`, `{"a": 1}`
//! - Binary operators: `>`, `<`, `>=`, `<=`, `==`, `===`, `!=`, `!==`,
//!   `+`, `-`, `*`, `/`, `%`, `&&`, `||`
//! - Unary operators: `!`, `-`
//! - Member access: `"abc".length`, `[1, 2].length`
//! - Namespace calls and constants: `Math.max(1, 2)`, `Math.PI`
//! - Parentheses for grouping: `(a + b) * c`
//!
//! Operator positions are located on a masked copy of the input (string
//! literal contents replaced with a fill byte) so operators inside strings
//! are never split on. All extraction uses the original input.

use condeval_core::ast::{Expression, Operator, UnaryOperator};
use condeval_core::strings::mask_quoted;
use condeval_core::Value;

use crate::error::{ParseError, Result};

const MASK_FILL: u8 = b'#';

/// Binary operator passes, lowest precedence first. Each pass splits at the
/// rightmost top-level occurrence, which gives left associativity.
const OPERATOR_PASSES: &[&[&str]] = &[
    &["||"],
    &["&&"],
    &["===", "!==", "==", "!="],
    &["<=", ">=", "<", ">"],
    &["+", "-"],
    &["*", "/", "%"],
];

/// Expression parser
pub struct ExpressionParser;

impl ExpressionParser {
    /// Parse an expression from a string
    pub fn parse(input: &str) -> Result<Expression> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::InvalidExpression("Empty expression".to_string()));
        }

        let masked = mask_quoted(input, MASK_FILL);
        let result = Self::parse_expression(input, &masked);
        if let Err(ref error) = result {
            log::debug!("Expression parse failed for '{}': {}", input, error);
        }
        result
    }

    /// Parse a complete expression (handles binary operators with precedence)
    fn parse_expression(input: &str, masked: &str) -> Result<Expression> {
        let (input, masked) = trim_pair(input, masked);
        if input.is_empty() {
            return Err(ParseError::InvalidExpression("Empty expression".to_string()));
        }

        for ops in OPERATOR_PASSES {
            if let Some((split, op_str)) = split_by_operator(masked, ops) {
                let op = Self::parse_operator(op_str)?;
                let left = Self::parse_expression(&input[..split], &masked[..split])?;
                let right_at = split + op_str.len();
                let right = Self::parse_expression(&input[right_at..], &masked[right_at..])?;
                return Ok(Expression::binary(left, op, right));
            }
        }

        Self::parse_primary(input, masked)
    }

    /// Parse a primary expression
    fn parse_primary(input: &str, masked: &str) -> Result<Expression> {
        let (input, masked) = trim_pair(input, masked);
        let bytes = masked.as_bytes();

        if input.is_empty() {
            return Err(ParseError::InvalidExpression("Empty expression".to_string()));
        }

        // Unary operators
        if let Some(rest) = input.strip_prefix('!') {
            let operand = Self::parse_primary(rest, &masked[1..])?;
            return Ok(Expression::unary(UnaryOperator::Not, operand));
        }
        if let Some(rest) = input.strip_prefix('-') {
            // A leading minus followed by a digit is a number literal,
            // handled below.
            if !rest.trim_start().starts_with(|c: char| c.is_ascii_digit()) {
                let operand = Self::parse_primary(rest, &masked[1..])?;
                return Ok(Expression::unary(UnaryOperator::Negate, operand));
            }
        }

        // Parentheses spanning the whole input
        if wraps_whole(bytes, b'(', b')') {
            return Self::parse_expression(&input[1..input.len() - 1], &masked[1..masked.len() - 1]);
        }

        // String literals
        if let Some(expr) = Self::parse_string_literal(input, bytes)? {
            return Ok(expr);
        }

        // Keyword literals; `undefined` is the rendering of a missing
        // record property and evaluates like `null`
        match input {
            "true" => return Ok(Expression::literal(Value::Bool(true))),
            "false" => return Ok(Expression::literal(Value::Bool(false))),
            "null" | "undefined" => return Ok(Expression::literal(Value::Null)),
            _ => {}
        }

        // Number literals
        if let Ok(num) = input.parse::<f64>() {
            return Ok(Expression::literal(Value::Number(num)));
        }

        // Array literals
        if wraps_whole(bytes, b'[', b']') {
            let inner_input = &input[1..input.len() - 1];
            let inner_masked = &masked[1..masked.len() - 1];
            let mut elements = Vec::new();
            for (start, end) in split_top_level_commas(inner_masked) {
                elements.push(Self::parse_expression(
                    &inner_input[start..end],
                    &inner_masked[start..end],
                )?);
            }
            return Ok(Expression::Array(elements));
        }

        // Object literals only appear through substitution, so they are
        // always JSON
        if wraps_whole(bytes, b'{', b'}') {
            let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
                ParseError::InvalidExpression(format!("Invalid object literal {}: {}", input, e))
            })?;
            return Ok(Expression::literal(Value::from(value)));
        }

        // Function calls (e.g. Math.max(1, 2))
        if let Some(paren) = masked.find('(') {
            if call_spans_whole(&bytes[paren..]) {
                let name = input[..paren].trim_end();
                if is_ident_path(name) {
                    let inner_input = &input[paren + 1..input.len() - 1];
                    let inner_masked = &masked[paren + 1..masked.len() - 1];
                    let mut args = Vec::new();
                    for (start, end) in split_top_level_commas(inner_masked) {
                        args.push(Self::parse_expression(
                            &inner_input[start..end],
                            &inner_masked[start..end],
                        )?);
                    }
                    return Ok(Expression::function_call(name, args));
                }
            }
        }

        // Bare identifiers (namespace constants like Math.PI; anything else
        // fails at evaluation time)
        if is_ident_path(input) {
            return Ok(Expression::identifier(input));
        }

        // Member access (e.g. "abc".length)
        if let Some(dot) = last_top_level_dot(bytes) {
            let property = &input[dot + 1..];
            let object = input[..dot].trim_end();
            if is_identifier(property) && !object.is_empty() {
                let object_masked = masked[..dot].trim_end();
                let expr = Self::parse_primary(object, object_masked)?;
                return Ok(Expression::member(expr, property));
            }
        }

        Err(ParseError::InvalidExpression(format!("Cannot parse: {}", input)))
    }

    /// Parse a whole-input string literal. Returns `Ok(None)` when the input
    /// does not start with a quote or the literal closes before the end (a
    /// member access like `"abc".length`).
    fn parse_string_literal(input: &str, masked_bytes: &[u8]) -> Result<Option<Expression>> {
        let quote = masked_bytes[0];
        if quote != b'"' && quote != b'\'' {
            return Ok(None);
        }

        match masked_bytes[1..].iter().position(|&b| b == quote) {
            None => Err(ParseError::UnterminatedString(input.to_string())),
            Some(pos) if pos + 2 == masked_bytes.len() => {
                let text = if quote == b'"' {
                    serde_json::from_str::<String>(input).map_err(|e| {
                        ParseError::InvalidExpression(format!(
                            "Invalid string literal {}: {}",
                            input, e
                        ))
                    })?
                } else {
                    unescape_single_quoted(&input[1..input.len() - 1])
                };
                Ok(Some(Expression::literal(Value::String(text))))
            }
            Some(_) => Ok(None),
        }
    }

    /// Map an operator token to its AST operator
    fn parse_operator(op: &str) -> Result<Operator> {
        match op {
            "==" => Ok(Operator::Eq),
            "!=" => Ok(Operator::Ne),
            "===" => Ok(Operator::StrictEq),
            "!==" => Ok(Operator::StrictNe),
            ">" => Ok(Operator::Gt),
            ">=" => Ok(Operator::Ge),
            "<" => Ok(Operator::Lt),
            "<=" => Ok(Operator::Le),
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            "%" => Ok(Operator::Mod),
            "&&" => Ok(Operator::And),
            "||" => Ok(Operator::Or),
            other => Err(ParseError::InvalidOperator(other.to_string())),
        }
    }
}

/// Trim both views in lockstep so byte offsets stay aligned
fn trim_pair<'a>(input: &'a str, masked: &'a str) -> (&'a str, &'a str) {
    let start = input.len() - input.trim_start().len();
    let end = input.trim_end().len();
    if start >= end {
        return ("", "");
    }
    (&input[start..end], &masked[start..end])
}

/// Find the rightmost top-level occurrence of any operator in `ops`,
/// returning its byte offset and token. Scanning right to left yields
/// left-associative trees.
fn split_by_operator<'a>(masked: &str, ops: &[&'a str]) -> Option<(usize, &'a str)> {
    let bytes = masked.as_bytes();
    let mut depth: i32 = 0;

    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b')' | b']' | b'}' => depth += 1,
            b'(' | b'[' | b'{' => depth -= 1,
            _ => {}
        }
        if depth != 0 {
            continue;
        }

        for &op in ops {
            if !masked[i..].starts_with(op) {
                continue;
            }
            // Reject matches that are part of a longer operator
            if i > 0 && is_operator_byte(bytes[i - 1]) {
                continue;
            }
            if bytes.get(i + op.len()) == Some(&b'=') {
                continue;
            }
            // Reject unary plus/minus and exponent signs
            if (op == "+" || op == "-") && is_unary_position(bytes, i) {
                continue;
            }
            return Some((i, op));
        }
    }

    None
}

/// True when a `+`/`-` at `pos` is a sign rather than a binary operator
fn is_unary_position(bytes: &[u8], pos: usize) -> bool {
    let mut i = pos;
    while i > 0 && bytes[i - 1] == b' ' {
        i -= 1;
    }
    if i == 0 {
        return true;
    }
    let prev = bytes[i - 1];
    if matches!(prev, b'e' | b'E') && i >= 2 && (bytes[i - 2].is_ascii_digit() || bytes[i - 2] == b'.')
    {
        // Exponent notation like 1e-5
        return true;
    }
    is_operator_byte(prev) || matches!(prev, b'(' | b',' | b'[' | b'{' | b':')
}

fn is_operator_byte(b: u8) -> bool {
    matches!(b, b'+' | b'-' | b'*' | b'/' | b'%' | b'<' | b'>' | b'=' | b'!' | b'&' | b'|')
}

/// True when the input starts with `open`, ends with `close`, and the pair
/// only balances at the final byte
fn wraps_whole(bytes: &[u8], open: u8, close: u8) -> bool {
    if bytes.len() < 2 || bytes[0] != open || bytes[bytes.len() - 1] != close {
        return false;
    }
    let mut depth: i32 = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
        }
        if depth == 0 {
            return i == bytes.len() - 1;
        }
    }
    false
}

/// True when `bytes` starts at a `(` whose matching `)` is the final byte
fn call_spans_whole(bytes: &[u8]) -> bool {
    wraps_whole(bytes, b'(', b')')
}

/// Split at top-level commas, returning byte ranges. Whitespace-only inputs
/// yield no ranges.
fn split_top_level_commas(masked: &str) -> Vec<(usize, usize)> {
    let bytes = masked.as_bytes();
    let mut ranges = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth -= 1,
            b',' if depth == 0 => {
                ranges.push((start, i));
                start = i + 1;
            }
            _ => {}
        }
    }
    ranges.push((start, bytes.len()));

    if ranges.len() == 1 && masked.trim().is_empty() {
        return Vec::new();
    }
    ranges
}

/// Rightmost `.` at top level, if any
fn last_top_level_dot(bytes: &[u8]) -> Option<usize> {
    let mut depth: i32 = 0;
    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b')' | b']' | b'}' => depth += 1,
            b'(' | b'[' | b'{' => depth -= 1,
            b'.' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Collapse backslash escapes in the body of a single-quoted literal.
/// `\n`/`\r`/`\t` become control characters; any other escaped character
/// (notably `\'` and `\\`) stands for itself.
fn unescape_single_quoted(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// `name`, `name_2`
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `Math.max`, `a.b.c`
fn is_ident_path(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_identifier)
}
