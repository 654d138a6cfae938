//! Literal-style rendering of typed values
//!
//! Produces the text the visualizer shows in labels and the parser tests
//! compare against. Rendering honors the `is_integer` flag: an
//! integer-flagged `3` never prints as `3.0`.

use super::snapshots::ListSnapshot;
use super::typed::TypedValue;
use std::fmt;

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Null => write!(f, "null"),
            TypedValue::Bool(b) => write!(f, "{}", b),
            TypedValue::Number { value, is_integer } => {
                if *is_integer {
                    write!(f, "{}", *value as i64)
                } else {
                    write!(f, "{}", value)
                }
            }
            TypedValue::Str(s) => write!(f, "\"{}\"", s),
            TypedValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            TypedValue::Object(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            TypedValue::List(list) => write_list(f, list),
            TypedValue::Tree(tree) => write!(f, "<tree, {} nodes>", tree.len()),
            TypedValue::Trie(trie) => write!(f, "<trie, {} nodes>", trie.len()),
            TypedValue::Tagged { kind, inner } => write!(f, "{}({})", kind, inner),
            TypedValue::ListPointer(id) | TypedValue::TreePointer(id) => {
                write!(f, "&{}", id)
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, list: &ListSnapshot) -> fmt::Result {
    write!(f, "[")?;
    for (i, node) in list.nodes.iter().enumerate() {
        if i > 0 {
            write!(f, " -> ")?;
        }
        write!(f, "{}", node.value)?;
    }
    if let Some(index) = list.cycle {
        write!(f, " -> (cycle to {})", index)?;
    }
    if list.truncated {
        write!(f, " ...")?;
    }
    write!(f, "]")
}
