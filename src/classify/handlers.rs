//! Detection handler chain
//!
//! Classifies one event's values into a [`ResolvedStructure`]. Keys are
//! visited in sorted order; for each value the handlers below run in fixed
//! priority and the first one to claim the value wins for that key:
//!
//! 1. list values (registered by key name, possibly several)
//! 2. tagged container wrappers (set/stack/queue/heap)
//! 3. arrays (with the heap/stack/queue name hints, list-array, matrix,
//!    and adjacency sub-decisions)
//! 4. trees
//! 5. tries
//! 6. objects (dictionaries)
//! 7. strings of length two or more (character sequences)
//!
//! The first non-list value that produces a structure becomes the event's
//! fallback; later candidates are still evaluated but never replace it.
//! Registered lists take precedence over the fallback: two or more become
//! a list group, exactly one becomes a single list.

use super::adjacency::{detect_adjacency, detect_matrix};
use super::structure::{NamedList, ResolvedStructure};
use crate::trace::Event;
use crate::value::{ListSnapshot, TypedValue};
use log::debug;
use std::collections::BTreeMap;

/// Classify one event. Pure; identical inputs always resolve identically.
pub fn classify_event(event: &Event) -> Option<ResolvedStructure> {
    classify_values(&event.values)
}

/// Classify a values mapping outside of any event wrapper.
pub fn classify_values(values: &BTreeMap<String, TypedValue>) -> Option<ResolvedStructure> {
    let mut lists: Vec<NamedList> = Vec::new();
    let mut fallback: Option<ResolvedStructure> = None;

    for (name, value) in values {
        if let TypedValue::List(list) = value {
            lists.push(NamedList {
                name: name.clone(),
                list: list.clone(),
            });
            continue;
        }
        let candidate = classify_single(name, value);
        if fallback.is_none() {
            if let Some(structure) = candidate {
                debug!("classifier: '{}' claimed as {}", name, structure.kind_name());
                fallback = Some(structure);
            }
        }
    }

    match lists.len() {
        0 => fallback,
        1 => Some(ResolvedStructure::List(lists.remove(0).list)),
        _ => Some(ResolvedStructure::ListGroup(lists)),
    }
    .map(|structure| {
        debug!("classifier: event resolved as {}", structure.kind_name());
        structure
    })
}

/// Run the non-list handlers against one named value.
fn classify_single(name: &str, value: &TypedValue) -> Option<ResolvedStructure> {
    match value {
        // Lists are handled by the registry in `classify_values`.
        TypedValue::List(_) => None,
        TypedValue::Tagged { kind, inner } => classify_tagged(kind, inner),
        TypedValue::Array(items) => Some(classify_array(name, items)),
        TypedValue::Tree(tree) => Some(ResolvedStructure::Tree(tree.clone())),
        TypedValue::Trie(trie) => Some(ResolvedStructure::Trie(trie.clone())),
        TypedValue::Object(entries) => Some(ResolvedStructure::Dictionary(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )),
        TypedValue::Str(s) if s.chars().count() >= 2 => Some(ResolvedStructure::Chars {
            original: s.clone(),
            values: s.chars().map(|c| TypedValue::Str(c.to_string())).collect(),
        }),
        // Scalars and lone pointers carry no structure of their own.
        _ => None,
    }
}

/// Handler 2: tagged container wrappers.
///
/// Claims only when the inner value is a sequence: an array, or a list
/// whose node values flatten into one.
fn classify_tagged(kind: &str, inner: &TypedValue) -> Option<ResolvedStructure> {
    let items: Vec<TypedValue> = match inner {
        TypedValue::Array(items) => items.clone(),
        TypedValue::List(list) => list.values().cloned().collect(),
        _ => return None,
    };

    match kind.to_lowercase().as_str() {
        "set" => Some(ResolvedStructure::Set(items)),
        "stack" => Some(ResolvedStructure::Stack(items)),
        "queue" => Some(ResolvedStructure::Queue(items)),
        "heap" | "minheap" | "min-heap" | "min_heap" => Some(ResolvedStructure::Heap {
            items,
            min: true,
        }),
        "maxheap" | "max-heap" | "max_heap" => Some(ResolvedStructure::Heap {
            items,
            min: false,
        }),
        _ => None,
    }
}

/// Handler 3: arrays, with the name-hint, list-array, matrix, and
/// adjacency sub-decisions applied in order.
fn classify_array(name: &str, items: &[TypedValue]) -> ResolvedStructure {
    let lowered = name.to_lowercase();

    if lowered.contains("heap") {
        let min = !(lowered.contains("max") && !lowered.contains("min"));
        return ResolvedStructure::Heap {
            items: items.to_vec(),
            min,
        };
    }
    if lowered.contains("stack") {
        return ResolvedStructure::Stack(items.to_vec());
    }
    if lowered.contains("queue") {
        return ResolvedStructure::Queue(items.to_vec());
    }

    if items
        .iter()
        .all(|item| matches!(item, TypedValue::List(_) | TypedValue::Null))
    {
        return list_array(name, items);
    }

    if let Some(rows) = detect_matrix(&lowered, items) {
        return ResolvedStructure::Matrix(rows);
    }
    if let Some(adjacency) = detect_adjacency(items) {
        return ResolvedStructure::Graph(adjacency);
    }

    ResolvedStructure::Array(items.to_vec())
}

/// Sub-decision 3(d): an array whose elements are all lists or null becomes
/// parallel named lists, null slots becoming empty placeholders.
fn list_array(name: &str, items: &[TypedValue]) -> ResolvedStructure {
    let mut heads = Vec::with_capacity(items.len());
    let mut lists = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let list = match item {
            TypedValue::List(list) => list.clone(),
            _ => ListSnapshot::empty(),
        };
        heads.push(list.head().cloned().unwrap_or(TypedValue::Null));
        lists.push(NamedList {
            name: format!("{}[{}]", name, i),
            list,
        });
    }

    ResolvedStructure::ListArray { heads, lists }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{TreeNode, TreeSnapshot};

    fn values(entries: Vec<(&str, TypedValue)>) -> BTreeMap<String, TypedValue> {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    fn ints(xs: &[i64]) -> TypedValue {
        TypedValue::Array(xs.iter().map(|&x| TypedValue::int(x)).collect())
    }

    #[test]
    fn test_single_list_wins_over_fallback() {
        let list = ListSnapshot::from_values("n", vec![TypedValue::int(1)]);
        let resolved = classify_values(&values(vec![
            ("head", TypedValue::List(list.clone())),
            ("nums", ints(&[1, 2, 3])),
        ]))
        .unwrap();
        assert_eq!(resolved, ResolvedStructure::List(list));
    }

    #[test]
    fn test_two_lists_form_a_group() {
        let a = ListSnapshot::from_values("a", vec![TypedValue::int(1)]);
        let b = ListSnapshot::from_values("b", vec![TypedValue::int(2)]);
        let resolved = classify_values(&values(vec![
            ("l1", TypedValue::List(a)),
            ("l2", TypedValue::List(b)),
        ]))
        .unwrap();
        match resolved {
            ResolvedStructure::ListGroup(lists) => {
                assert_eq!(lists.len(), 2);
                assert_eq!(lists[0].name, "l1");
                assert_eq!(lists[1].name, "l2");
            }
            other => panic!("Expected list group, got {:?}", other),
        }
    }

    #[test]
    fn test_first_sorted_key_sets_the_fallback() {
        // Keys iterate sorted: "a" claims before "b" even when inserted
        // in the other order.
        let resolved = classify_values(&values(vec![
            ("b", TypedValue::Str("later".to_string())),
            ("a", ints(&[1, 2])),
        ]))
        .unwrap();
        assert_eq!(
            resolved,
            ResolvedStructure::Array(vec![TypedValue::int(1), TypedValue::int(2)])
        );
    }

    #[test]
    fn test_unclaimed_scalar_leaves_fallback_open() {
        // "a" is a bare number, claimed by nothing; "b" still classifies.
        let resolved = classify_values(&values(vec![
            ("a", TypedValue::int(5)),
            ("b", ints(&[1, 2])),
        ]))
        .unwrap();
        assert!(matches!(resolved, ResolvedStructure::Array(_)));
    }

    #[test]
    fn test_no_structure_at_all() {
        assert_eq!(
            classify_values(&values(vec![
                ("n", TypedValue::int(3)),
                ("c", TypedValue::Str("x".to_string())),
            ])),
            None
        );
    }

    #[test]
    fn test_tagged_containers() {
        let inner = Box::new(ints(&[3, 1, 2]));
        let resolved = classify_values(&values(vec![(
            "seen",
            TypedValue::Tagged {
                kind: "Set".to_string(),
                inner: inner.clone(),
            },
        )]))
        .unwrap();
        assert!(matches!(resolved, ResolvedStructure::Set(_)));

        let resolved = classify_values(&values(vec![(
            "pq",
            TypedValue::Tagged {
                kind: "min_heap".to_string(),
                inner,
            },
        )]))
        .unwrap();
        assert_eq!(
            resolved,
            ResolvedStructure::Heap {
                items: vec![TypedValue::int(3), TypedValue::int(1), TypedValue::int(2)],
                min: true,
            }
        );
    }

    #[test]
    fn test_tagged_with_non_sequence_inner_claims_nothing() {
        assert_eq!(
            classify_values(&values(vec![(
                "s",
                TypedValue::Tagged {
                    kind: "stack".to_string(),
                    inner: Box::new(TypedValue::int(1)),
                },
            )])),
            None
        );
    }

    #[test]
    fn test_heap_name_hints() {
        let resolved = classify_values(&values(vec![("maxHeap", ints(&[9, 4, 7]))])).unwrap();
        assert_eq!(
            resolved,
            ResolvedStructure::Heap {
                items: vec![TypedValue::int(9), TypedValue::int(4), TypedValue::int(7)],
                min: false,
            }
        );
        let resolved = classify_values(&values(vec![("heap", ints(&[1, 2]))])).unwrap();
        assert!(matches!(resolved, ResolvedStructure::Heap { min: true, .. }));
    }

    #[test]
    fn test_stack_and_queue_name_hints() {
        assert!(matches!(
            classify_values(&values(vec![("callStack", ints(&[1]))])).unwrap(),
            ResolvedStructure::Stack(_)
        ));
        assert!(matches!(
            classify_values(&values(vec![("bfs_queue", ints(&[1]))])).unwrap(),
            ResolvedStructure::Queue(_)
        ));
    }

    #[test]
    fn test_list_array_with_null_placeholders() {
        let a = ListSnapshot::from_values("a", vec![TypedValue::int(1), TypedValue::int(4)]);
        let b = ListSnapshot::from_values("b", vec![TypedValue::int(2)]);
        let items = TypedValue::Array(vec![
            TypedValue::List(a),
            TypedValue::Null,
            TypedValue::List(b),
        ]);
        let resolved = classify_values(&values(vec![("lists", items)])).unwrap();
        match resolved {
            ResolvedStructure::ListArray { heads, lists } => {
                assert_eq!(
                    heads,
                    vec![TypedValue::int(1), TypedValue::Null, TypedValue::int(2)]
                );
                assert_eq!(lists.len(), 3);
                assert!(lists[1].list.is_empty());
            }
            other => panic!("Expected list array, got {:?}", other),
        }
    }

    #[test]
    fn test_square_binary_array_is_a_graph() {
        let items = TypedValue::Array(vec![ints(&[0, 1, 1]), ints(&[1, 0, 0]), ints(&[1, 0, 0])]);
        let resolved = classify_values(&values(vec![("edges", items)])).unwrap();
        assert_eq!(
            resolved,
            ResolvedStructure::Graph(vec![vec![1, 2], vec![0], vec![0]])
        );
    }

    #[test]
    fn test_named_grid_is_a_matrix() {
        let items = TypedValue::Array(vec![ints(&[0, 1]), ints(&[1, 0])]);
        let resolved = classify_values(&values(vec![("board", items)])).unwrap();
        assert!(matches!(resolved, ResolvedStructure::Matrix(_)));
    }

    #[test]
    fn test_tree_and_trie_pass_through() {
        let tree = TreeSnapshot::new(
            vec![TreeNode {
                id: "t0".to_string(),
                value: TypedValue::int(1),
                children: vec![],
            }],
            Some("t0".to_string()),
        );
        let resolved =
            classify_values(&values(vec![("root", TypedValue::Tree(tree.clone()))])).unwrap();
        assert_eq!(resolved, ResolvedStructure::Tree(tree));
    }

    #[test]
    fn test_object_becomes_sorted_dictionary() {
        let mut entries = BTreeMap::new();
        entries.insert("b".to_string(), TypedValue::int(2));
        entries.insert("a".to_string(), TypedValue::int(1));
        let resolved =
            classify_values(&values(vec![("counts", TypedValue::Object(entries))])).unwrap();
        assert_eq!(
            resolved,
            ResolvedStructure::Dictionary(vec![
                ("a".to_string(), TypedValue::int(1)),
                ("b".to_string(), TypedValue::int(2)),
            ])
        );
    }

    #[test]
    fn test_short_strings_are_ignored() {
        assert_eq!(
            classify_values(&values(vec![("c", TypedValue::Str("x".to_string()))])),
            None
        );
        let resolved =
            classify_values(&values(vec![("s", TypedValue::Str("ab".to_string()))])).unwrap();
        match resolved {
            ResolvedStructure::Chars { original, values } => {
                assert_eq!(original, "ab");
                assert_eq!(
                    values,
                    vec![
                        TypedValue::Str("a".to_string()),
                        TypedValue::Str("b".to_string()),
                    ]
                );
            }
            other => panic!("Expected chars, got {:?}", other),
        }
    }

    #[test]
    fn test_classification_is_idempotent() {
        let vals = values(vec![
            ("grid", TypedValue::Array(vec![ints(&[1, 2]), ints(&[3, 4])])),
            ("k", TypedValue::int(1)),
        ]);
        assert_eq!(classify_values(&vals), classify_values(&vals));
    }
}
