//! Decoded-tree translation and the strongly-typed step decode path
//!
//! Algorithm step records arrive with their variables already decoded into
//! JSON trees. Two entry points consume them:
//!
//! - [`from_json`]: structural translation of any JSON tree into a
//!   [`TypedValue`], with no inference beyond the JSON tags themselves.
//! - [`decode_typed`]: the strongly-typed path used for step variables. It
//!   tries a fixed priority list of shapes and fails with a [`DecodeError`]
//!   when none matches. This list is the compatibility surface with the
//!   upstream producer: new shapes are appended at the end, existing
//!   attempts are never replaced.

use crate::value::TypedValue;
use serde_json::Value as Json;
use std::collections::BTreeMap;
use std::fmt;

/// Failure of the strongly-typed decode path for a single variable.
///
/// The only error this crate propagates. Scoped to one step variable: the
/// caller reports the step as unavailable and continues with the rest of
/// the sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    /// Path of the offending variable (the variable name for step records).
    pub path: String,
    /// Short description of the shape that matched no decode attempt.
    pub found: String,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported value shape at '{}': {}",
            self.path, self.found
        )
    }
}

impl std::error::Error for DecodeError {}

/// Translate a decoded JSON tree structurally into a typed value.
///
/// JSON objects become sorted-key objects, arrays become arrays, and
/// primitives map directly. The integer flag mirrors the JSON
/// representation: a number is integer-flagged exactly when serde parsed it
/// as one, never by inspecting a float's magnitude.
pub fn from_json(json: &Json) -> TypedValue {
    match json {
        Json::Null => TypedValue::Null,
        Json::Bool(b) => TypedValue::Bool(*b),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                TypedValue::int(i)
            } else if let Some(u) = n.as_u64() {
                TypedValue::Number {
                    value: u as f64,
                    is_integer: true,
                }
            } else {
                TypedValue::float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Json::String(s) => TypedValue::Str(s.clone()),
        Json::Array(items) => TypedValue::Array(items.iter().map(from_json).collect()),
        Json::Object(map) => TypedValue::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), from_json(v)))
                .collect(),
        ),
    }
}

/// Decode a step variable through the fixed shape priority list.
///
/// Attempts, in order: null, bool, integer, double, string, `Vec<i64>`,
/// `Vec<Vec<i64>>`, `Vec<String>`, `Map<String, i64>`. The first success
/// wins; no match is a [`DecodeError`] naming `path`.
pub fn decode_typed(path: &str, json: &Json) -> Result<TypedValue, DecodeError> {
    match json {
        Json::Null => return Ok(TypedValue::Null),
        Json::Bool(b) => return Ok(TypedValue::Bool(*b)),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(TypedValue::int(i));
            }
            return Ok(TypedValue::float(n.as_f64().unwrap_or(f64::NAN)));
        }
        Json::String(s) => return Ok(TypedValue::Str(s.clone())),
        _ => {}
    }

    if let Ok(ints) = serde_json::from_value::<Vec<i64>>(json.clone()) {
        return Ok(TypedValue::Array(
            ints.into_iter().map(TypedValue::int).collect(),
        ));
    }
    if let Ok(rows) = serde_json::from_value::<Vec<Vec<i64>>>(json.clone()) {
        return Ok(TypedValue::Array(
            rows.into_iter()
                .map(|row| {
                    TypedValue::Array(row.into_iter().map(TypedValue::int).collect())
                })
                .collect(),
        ));
    }
    if let Ok(strings) = serde_json::from_value::<Vec<String>>(json.clone()) {
        return Ok(TypedValue::Array(
            strings.into_iter().map(TypedValue::Str).collect(),
        ));
    }
    if let Ok(map) = serde_json::from_value::<BTreeMap<String, i64>>(json.clone()) {
        return Ok(TypedValue::Object(
            map.into_iter().map(|(k, v)| (k, TypedValue::int(v))).collect(),
        ));
    }

    Err(DecodeError {
        path: path.to_string(),
        found: shape_of(json).to_string(),
    })
}

/// Short JSON shape name for error messages
fn shape_of(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array of mixed or unsupported elements",
        Json::Object(_) => "object with non-integer values",
    }
}
