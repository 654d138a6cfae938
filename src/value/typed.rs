//! Tagged value representation for parsed trace data
//!
//! This module defines the [`TypedValue`] enum, the single value model shared
//! by every parser entry point and consumed by the structure classifier.
//! Values are tagged and type-safe; there is no duck typing anywhere in the
//! pipeline, so every classifier handler is an exhaustive `match`.
//!
//! # Value Types
//!
//! - [`TypedValue::Null`]: absent / `null` / `None` / `nil`
//! - [`TypedValue::Bool`]: boolean
//! - [`TypedValue::Number`]: magnitude plus an integer flag set at parse time
//! - [`TypedValue::Str`]: text
//! - [`TypedValue::Array`]: ordered sequence
//! - [`TypedValue::Object`]: name → value mapping, iterated in sorted key order
//! - [`TypedValue::List`]: linked-list snapshot with stable node ids
//! - [`TypedValue::Tree`]: tree snapshot with stable node ids
//! - [`TypedValue::Trie`]: trie snapshot with character edges
//! - [`TypedValue::Tagged`]: named wrapper for set/stack/queue/heap values
//! - [`TypedValue::ListPointer`] / [`TypedValue::TreePointer`]: node references

use super::snapshots::{ListSnapshot, TreeSnapshot, TrieSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A parsed trace value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum TypedValue {
    #[default]
    Null,
    Bool(bool),
    /// `is_integer` records how the literal was parsed, not what the
    /// magnitude happens to be. `2.0` parsed as a float keeps the flag false.
    Number { value: f64, is_integer: bool },
    Str(String),
    Array(Vec<TypedValue>),
    /// Keys are unique; `BTreeMap` iteration gives the sorted order the
    /// classifier relies on for deterministic precedence.
    Object(BTreeMap<String, TypedValue>),
    List(ListSnapshot),
    Tree(TreeSnapshot),
    Trie(TrieSnapshot),
    /// Wrapper naming the container kind (`"stack"`, `"min-heap"`, ...) of an
    /// otherwise plain sequence value.
    Tagged { kind: String, inner: Box<TypedValue> },
    /// Reference to a list node by its stable id.
    ListPointer(String),
    /// Reference to a tree node by its stable id.
    TreePointer(String),
}

impl TypedValue {
    /// Build an integer-flagged number.
    pub fn int(value: i64) -> Self {
        TypedValue::Number {
            value: value as f64,
            is_integer: true,
        }
    }

    /// Build a float-flagged number.
    pub fn float(value: f64) -> Self {
        TypedValue::Number {
            value,
            is_integer: false,
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, TypedValue::Null)
    }

    /// Get the boolean value, returns None if not a Bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as an integer, returns None unless it was parsed as one
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TypedValue::Number {
                value,
                is_integer: true,
            } => Some(*value as i64),
            _ => None,
        }
    }

    /// Get the numeric magnitude, integer-flagged or not
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedValue::Number { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Get the string value, returns None if not a Str
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the element slice, returns None if not an Array
    pub fn as_array(&self) -> Option<&[TypedValue]> {
        match self {
            TypedValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get the list snapshot, returns None if not a List
    pub fn as_list(&self) -> Option<&ListSnapshot> {
        match self {
            TypedValue::List(list) => Some(list),
            _ => None,
        }
    }

    /// Check if this value is a scalar the matrix heuristics accept as a cell
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            TypedValue::Null
                | TypedValue::Bool(_)
                | TypedValue::Number { .. }
                | TypedValue::Str(_)
        )
    }

    /// Check if this value is a node reference (list or tree)
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            TypedValue::ListPointer(_) | TypedValue::TreePointer(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_flag_survives_accessors() {
        assert_eq!(TypedValue::int(7).as_int(), Some(7));
        assert_eq!(TypedValue::float(7.0).as_int(), None);
        assert_eq!(TypedValue::float(7.5).as_f64(), Some(7.5));
    }

    #[test]
    fn test_primitive_check() {
        assert!(TypedValue::Null.is_primitive());
        assert!(TypedValue::Bool(true).is_primitive());
        assert!(TypedValue::Str("x".to_string()).is_primitive());
        assert!(!TypedValue::Array(vec![]).is_primitive());
        assert!(!TypedValue::Object(Default::default()).is_primitive());
    }

    #[test]
    fn test_pointer_check() {
        assert!(TypedValue::ListPointer("n1".to_string()).is_pointer());
        assert!(TypedValue::TreePointer("t4".to_string()).is_pointer());
        assert!(!TypedValue::Str("n1".to_string()).is_pointer());
    }
}
