//! Candidate reconciliation by pointer coverage
//!
//! Up to three events compete to supply the displayed structure: the
//! event the user selected, the test input, and the computed output. When
//! the selected event carries pointer fields, the candidate whose node ids
//! cover the most pointer targets wins; otherwise plain source priority
//! decides.
//!
//! The two priority orders differ on purpose and must stay different:
//! coverage ties break `selected > output > input`, while the no-coverage
//! fallback is `selected > input > output`. Both orders predate this
//! implementation and callers depend on them; see DESIGN.md.

use super::handlers::classify_event;
use super::structure::ResolvedStructure;
use crate::trace::Event;
use crate::value::TypedValue;
use log::debug;
use std::collections::BTreeMap;

/// Where a structure candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    Input,
    Output,
    Selected,
}

impl CandidateSource {
    /// Priority under a pointer-coverage tie: selected > output > input.
    fn tie_break_rank(self) -> u8 {
        match self {
            CandidateSource::Selected => 2,
            CandidateSource::Output => 1,
            CandidateSource::Input => 0,
        }
    }

    /// Priority when no pointer coverage applies: selected > input > output.
    fn fallback_rank(self) -> u8 {
        match self {
            CandidateSource::Selected => 2,
            CandidateSource::Input => 1,
            CandidateSource::Output => 0,
        }
    }
}

/// One classified event competing for display
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub source: CandidateSource,
    pub structure: ResolvedStructure,
}

/// A pointer-valued field found in the selected event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerField {
    /// Dotted/bracketed path to the field, for diagnostics only.
    pub path: String,
    /// Stable node id the pointer refers to.
    pub target: String,
}

/// Pick the structure to display from the present events.
///
/// Returns `None` only when no event classifies at all, a legitimate
/// "nothing to visualize" outcome.
pub fn resolve_structure(
    input: Option<&Event>,
    selected: Option<&Event>,
    output: Option<&Event>,
) -> Option<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::new();
    let sourced = [
        (CandidateSource::Input, input),
        (CandidateSource::Output, output),
        (CandidateSource::Selected, selected),
    ];
    for (source, event) in sourced {
        if let Some(structure) = event.and_then(classify_event) {
            candidates.push(Candidate { source, structure });
        }
    }
    if candidates.is_empty() {
        return None;
    }

    let pointers = selected
        .map(|event| collect_pointer_fields(&event.values))
        .unwrap_or_default();

    if !pointers.is_empty() {
        let best = candidates
            .iter()
            .max_by_key(|candidate| (coverage(candidate, &pointers), candidate.source.tie_break_rank()))
            .cloned();
        if let Some(candidate) = best {
            if coverage(&candidate, &pointers) > 0 {
                debug!(
                    "resolver: {:?} candidate wins with coverage {}",
                    candidate.source,
                    coverage(&candidate, &pointers)
                );
                return Some(candidate);
            }
        }
    }

    candidates
        .into_iter()
        .max_by_key(|candidate| candidate.source.fallback_rank())
}

/// Count pointer fields whose target id the candidate can address.
fn coverage(candidate: &Candidate, pointers: &[PointerField]) -> usize {
    let ids = candidate.structure.addressable_ids();
    pointers
        .iter()
        .filter(|pointer| ids.contains(pointer.target.as_str()))
        .count()
}

/// Recursively collect pointer fields from a values mapping.
///
/// Descends into objects by key (`a.b`) and arrays by index (`a[0]`).
/// The paths are not used for matching, only for diagnostics.
pub fn collect_pointer_fields(values: &BTreeMap<String, TypedValue>) -> Vec<PointerField> {
    let mut fields = Vec::new();
    for (name, value) in values {
        walk(name, value, &mut fields);
    }
    fields
}

fn walk(path: &str, value: &TypedValue, fields: &mut Vec<PointerField>) {
    match value {
        TypedValue::ListPointer(target) | TypedValue::TreePointer(target) => {
            fields.push(PointerField {
                path: path.to_string(),
                target: target.clone(),
            });
        }
        TypedValue::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                walk(&format!("{}[{}]", path, i), item, fields);
            }
        }
        TypedValue::Object(entries) => {
            for (key, item) in entries {
                walk(&format!("{}.{}", path, key), item, fields);
            }
        }
        _ => {}
    }
}
