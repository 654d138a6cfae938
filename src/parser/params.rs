//! Parameter-assignment line parser
//!
//! Test-case inputs arrive as lines like `"nums = [2,7,11,15], target = 9"`.
//! A comma separates two parameters only when the text after it contains a
//! top-level `=` before the next top-level comma; this keeps values that
//! themselves contain unbracketed commas inside a single segment. Segments
//! without an `=` get a synthesized positional name (`arg0`, `arg1`, ...).

use super::literal::parse_literal;
use crate::value::TypedValue;

/// Parse one input line into named parameters, preserving order.
///
/// An empty line yields no parameters.
pub fn parse_param_line(line: &str) -> Vec<(String, TypedValue)> {
    let mut params: Vec<(String, TypedValue)> = Vec::new();

    for segment in split_param_segments(line) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        match segment.split_once('=') {
            Some((name, value)) => {
                params.push((name.trim().to_string(), parse_literal(value)));
            }
            None => {
                let name = format!("arg{}", params.len());
                params.push((name, parse_literal(segment)));
            }
        }
    }

    params
}

/// Split a line into parameter segments on separating commas.
///
/// A top-level comma separates only when the remaining text reaches a
/// top-level `=` before the next top-level comma.
fn split_param_segments(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (i, ch) in line.char_indices() {
        match ch {
            '[' | '(' | '{' => depth += 1,
            ']' | ')' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 && names_follow(&line[i + 1..]) => {
                segments.push(&line[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&line[start..]);
    segments
}

/// Check whether `rest` opens with a `name = ...` segment: a top-level `=`
/// is reached before any top-level comma.
fn names_follow(rest: &str) -> bool {
    let mut depth: usize = 0;
    for ch in rest.chars() {
        match ch {
            '[' | '(' | '{' => depth += 1,
            ']' | ')' | '}' => depth = depth.saturating_sub(1),
            '=' if depth == 0 => return true,
            ',' if depth == 0 => return false,
            _ => {}
        }
    }
    false
}
