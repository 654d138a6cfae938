//! Resolved structure representation
//!
//! [`ResolvedStructure`] is the classifier's output: the single abstract
//! data structure (or group of named lists) an event's values best
//! represent. Like the value model it is a closed sum type, so the
//! reconciliation logic and the consuming renderer match exhaustively.

use crate::value::{ListSnapshot, TreeSnapshot, TrieSnapshot, TypedValue};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A list registered under the key name that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedList {
    pub name: String,
    pub list: ListSnapshot,
}

/// The abstract structure chosen for one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResolvedStructure {
    Array(Vec<TypedValue>),
    /// A single linked list.
    List(ListSnapshot),
    /// Two or more independently named lists shown together.
    ListGroup(Vec<NamedList>),
    /// Parallel lists from an array whose elements were lists or null.
    /// `heads` keeps the display value of each slot, `Null` for empty slots.
    ListArray {
        heads: Vec<TypedValue>,
        lists: Vec<NamedList>,
    },
    Tree(TreeSnapshot),
    Trie(TrieSnapshot),
    /// Adjacency list: per node, the ordered neighbor indices.
    Graph(Vec<Vec<usize>>),
    Matrix(Vec<Vec<TypedValue>>),
    Heap {
        items: Vec<TypedValue>,
        min: bool,
    },
    Stack(Vec<TypedValue>),
    Queue(Vec<TypedValue>),
    Set(Vec<TypedValue>),
    /// Key/value entries in sorted key order.
    Dictionary(Vec<(String, TypedValue)>),
    /// A string shown character by character.
    Chars {
        original: String,
        values: Vec<TypedValue>,
    },
}

impl ResolvedStructure {
    /// Node ids a pointer field can land on in this structure.
    ///
    /// List-shaped structures expose their list-node ids and trees their
    /// tree-node ids. Every other kind addresses nothing and always scores
    /// zero coverage.
    pub fn addressable_ids(&self) -> FxHashSet<&str> {
        match self {
            ResolvedStructure::List(list) => list.node_ids().collect(),
            ResolvedStructure::ListGroup(lists) => lists
                .iter()
                .flat_map(|named| named.list.node_ids())
                .collect(),
            ResolvedStructure::ListArray { lists, .. } => lists
                .iter()
                .flat_map(|named| named.list.node_ids())
                .collect(),
            ResolvedStructure::Tree(tree) => tree.node_ids().collect(),
            _ => FxHashSet::default(),
        }
    }

    /// Short kind name for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            ResolvedStructure::Array(_) => "array",
            ResolvedStructure::List(_) => "list",
            ResolvedStructure::ListGroup(_) => "list-group",
            ResolvedStructure::ListArray { .. } => "list-array",
            ResolvedStructure::Tree(_) => "tree",
            ResolvedStructure::Trie(_) => "trie",
            ResolvedStructure::Graph(_) => "graph",
            ResolvedStructure::Matrix(_) => "matrix",
            ResolvedStructure::Heap { .. } => "heap",
            ResolvedStructure::Stack(_) => "stack",
            ResolvedStructure::Queue(_) => "queue",
            ResolvedStructure::Set(_) => "set",
            ResolvedStructure::Dictionary(_) => "dictionary",
            ResolvedStructure::Chars { .. } => "chars",
        }
    }
}
