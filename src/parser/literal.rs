//! Literal text parser
//!
//! Converts free-text literals from test-case records into [`TypedValue`]s.
//! The grammar is left-to-right, first match wins, with input pre-trimmed of
//! surrounding whitespace:
//!
//! ```text
//! ""  "null"  "None"  "nil"    → null
//! "true"  "True"               → bool(true)
//! "false" "False"              → bool(false)
//! integer parse                → number(is_integer = true)
//! float parse                  → number(is_integer = false)
//! 'x'  "x"  (matching quotes)  → string, quotes stripped, no escapes
//! [ ... ]                      → array, split on top-level commas
//! anything else                → the raw text as a string
//! ```
//!
//! The parser never fails: structured-looking text that cannot be parsed
//! falls back to a verbatim string value.

use crate::value::TypedValue;

/// Parse one literal into a typed value. Total: every input produces a value.
pub fn parse_literal(text: &str) -> TypedValue {
    let text = text.trim();

    match text {
        "" | "null" | "None" | "nil" => return TypedValue::Null,
        "true" | "True" => return TypedValue::Bool(true),
        "false" | "False" => return TypedValue::Bool(false),
        _ => {}
    }

    if let Ok(n) = text.parse::<i64>() {
        return TypedValue::int(n);
    }
    if let Ok(x) = text.parse::<f64>() {
        return TypedValue::float(x);
    }

    if let Some(inner) = strip_quotes(text) {
        return TypedValue::Str(inner.to_string());
    }

    if text.len() >= 2 && text.starts_with('[') && text.ends_with(']') {
        let interior = &text[1..text.len() - 1];
        let items = if interior.trim().is_empty() {
            Vec::new()
        } else {
            split_top_level(interior)
                .into_iter()
                .map(parse_literal)
                .collect()
        };
        return TypedValue::Array(items);
    }

    TypedValue::Str(text.to_string())
}

/// Strip a single matching pair of double or single quotes, if present.
/// No escape processing happens inside the quotes.
fn strip_quotes(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    if first == last && (first == '"' || first == '\'') {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}

/// Split on commas at bracket depth zero. Commas inside `[`, `(`, or `{`
/// nesting are not separators.
pub(crate) fn split_top_level(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        match ch {
            '[' | '(' | '{' => depth += 1,
            ']' | ')' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                segments.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&text[start..]);
    segments
}
