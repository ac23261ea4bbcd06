//! String helpers shared by the template parser and the runtime.
//!
//! Both helpers operate on byte offsets. Template offsets always point at
//! ASCII delimiter characters, so slicing at them is safe even when the
//! surrounding text contains multi-byte characters.

/// Replace the inclusive byte span `[start, end]` of `original` with
/// `replacement`.
pub fn splice(original: &str, replacement: &str, start: usize, end: usize) -> String {
    let mut out = String::with_capacity(original.len() + replacement.len());
    out.push_str(&original[..start]);
    out.push_str(replacement);
    out.push_str(&original[end + 1..]);
    out
}

/// Return a copy of `input` where the contents of every single- or
/// double-quoted substring are replaced with `fill`, byte for byte.
///
/// The quote characters themselves are preserved, so the masked copy has the
/// same length and the same quoting structure as the original. Backslash
/// escapes inside a quoted region are masked as two fill bytes. An
/// unterminated quote masks the remainder of the input.
pub fn mask_quoted(input: &str, fill: u8) -> String {
    let mut out = String::with_capacity(input.len());
    let mut quote: Option<char> = None;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match quote {
            None => {
                if c == '"' || c == '\'' {
                    quote = Some(c);
                }
                out.push(c);
            }
            Some(q) => {
                if c == '\\' {
                    push_fill(&mut out, fill, c.len_utf8());
                    if let Some(escaped) = chars.next() {
                        push_fill(&mut out, fill, escaped.len_utf8());
                    }
                } else if c == q {
                    quote = None;
                    out.push(c);
                } else {
                    push_fill(&mut out, fill, c.len_utf8());
                }
            }
        }
    }

    out
}

fn push_fill(out: &mut String, fill: u8, count: usize) {
    for _ in 0..count {
        out.push(fill as char);
    }
}
