//! Snapshot node types for linked structures
//!
//! Lists, trees, and tries arrive from the upstream decoder already flattened
//! into node sets with stable ids. The ids are what pointer values refer to,
//! so they must survive cloning and classification untouched.

use super::typed::TypedValue;
use serde::{Deserialize, Serialize};

/// One node of a linked-list snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListNode {
    pub id: String,
    pub value: TypedValue,
}

/// A linked-list snapshot: nodes in traversal order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListSnapshot {
    pub nodes: Vec<ListNode>,
    /// Index the final node links back to, for cyclic lists.
    pub cycle: Option<usize>,
    /// Traversal stopped at the visualization ceiling before the real end.
    pub truncated: bool,
    pub doubly_linked: bool,
}

impl ListSnapshot {
    pub fn new(nodes: Vec<ListNode>) -> Self {
        ListSnapshot {
            nodes,
            cycle: None,
            truncated: false,
            doubly_linked: false,
        }
    }

    /// Build a snapshot from plain values, synthesizing ids `<prefix>0..n`.
    pub fn from_values(prefix: &str, values: Vec<TypedValue>) -> Self {
        let nodes = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| ListNode {
                id: format!("{}{}", prefix, i),
                value,
            })
            .collect();
        ListSnapshot::new(nodes)
    }

    /// Placeholder for a list slot that holds no nodes.
    pub fn empty() -> Self {
        ListSnapshot::new(Vec::new())
    }

    /// Value of the first node, if any
    pub fn head(&self) -> Option<&TypedValue> {
        self.nodes.first().map(|n| &n.value)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate the stable node ids
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// Node values in traversal order
    pub fn values(&self) -> impl Iterator<Item = &TypedValue> {
        self.nodes.iter().map(|n| &n.value)
    }
}

/// One node of a tree snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub value: TypedValue,
    /// Child ids in order; an absent child is simply not listed.
    pub children: Vec<String>,
}

/// A tree snapshot: node set plus the root id
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub nodes: Vec<TreeNode>,
    pub root: Option<String>,
}

impl TreeSnapshot {
    pub fn new(nodes: Vec<TreeNode>, root: Option<String>) -> Self {
        TreeSnapshot { nodes, root }
    }

    /// Get a node by its stable id
    pub fn get(&self, id: &str) -> Option<&TreeNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate the stable node ids
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }
}

/// One node of a trie snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrieNode {
    pub id: String,
    /// Outgoing character edges, in insertion order.
    pub edges: Vec<(char, String)>,
    /// Marks the end of a stored word.
    pub word_end: bool,
}

/// A trie snapshot: node set plus the root id
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrieSnapshot {
    pub nodes: Vec<TrieNode>,
    pub root: Option<String>,
}

impl TrieSnapshot {
    pub fn new(nodes: Vec<TrieNode>, root: Option<String>) -> Self {
        TrieSnapshot { nodes, root }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }
}
