//! Trace timeline: records, events, and selection
//!
//! One [`CaseRecord`] per test case comes in from the upstream runner; a
//! [`Timeline`] of [`Event`]s goes out, one event per point of interest:
//! the parsed input parameters, each decoded algorithm step, the expected
//! output, and the computed output. The timeline is navigated by the
//! consuming visualizer the way a time-travel debugger navigates
//! snapshots.
//!
//! # Failure Isolation
//!
//! A step whose variables fail the strongly-typed decode is excluded from
//! the event sequence and recorded in [`Timeline::skipped`] with its
//! decode error; the remaining steps still decode. Nothing here aborts a
//! whole record.

use crate::classify::resolve::resolve_structure;
use crate::classify::Candidate;
use crate::parser::decode::{decode_typed, DecodeError};
use crate::parser::literal::parse_literal;
use crate::parser::params::parse_param_line;
use crate::value::TypedValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Provenance of an event within a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Input,
    Step,
    Output,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Input => write!(f, "input"),
            EventKind::Step => write!(f, "step"),
            EventKind::Output => write!(f, "output"),
        }
    }
}

/// A named snapshot of typed values at one point of the trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Composite id: ordinal, kind, and label. The ordinal keeps ids
    /// unique even when kind and label collide.
    pub id: String,
    pub kind: EventKind,
    /// Source line of the step, when the producer recorded one.
    pub line: Option<u32>,
    pub label: String,
    /// Unique keys; `BTreeMap` iteration order is the classifier's
    /// deterministic visit order.
    pub values: BTreeMap<String, TypedValue>,
}

impl Event {
    pub fn new(
        ordinal: usize,
        kind: EventKind,
        label: &str,
        line: Option<u32>,
        values: BTreeMap<String, TypedValue>,
    ) -> Self {
        Event {
            id: format!("{}-{}-{}", ordinal, kind, label),
            kind,
            line,
            label: label.to_string(),
            values,
        }
    }
}

/// One algorithm step as produced by the upstream runner
#[derive(Debug, Clone, Deserialize)]
pub struct StepRecord {
    pub label: String,
    #[serde(default)]
    pub line: Option<u32>,
    /// Variable name → decoded JSON value, fed through the strongly-typed
    /// decode path.
    #[serde(default)]
    pub locals: serde_json::Map<String, serde_json::Value>,
}

/// One test case as produced by the upstream runner
#[derive(Debug, Clone, Deserialize)]
pub struct CaseRecord {
    /// Raw identification, opaque to this crate.
    pub name: String,
    /// Input parameter line, e.g. `"nums = [2,7,11,15], target = 9"`.
    pub input: String,
    /// Expected output literal.
    pub expected: String,
    /// Computed output literal.
    pub actual: String,
    /// Whether computed matched expected.
    pub passed: bool,
    /// Whether the case ran to completion.
    #[serde(default = "default_valid")]
    pub valid: bool,
    #[serde(default)]
    pub steps: Vec<StepRecord>,
}

fn default_valid() -> bool {
    true
}

/// A step excluded from the timeline by a decode failure
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedStep {
    /// Index into [`CaseRecord::steps`].
    pub step_index: usize,
    pub label: String,
    pub error: DecodeError,
}

/// The ordered event sequence of one test case
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    events: Vec<Event>,
    skipped: Vec<SkippedStep>,
}

impl Timeline {
    /// Build the timeline for one record.
    ///
    /// Produces an input event when at least one parameter parsed, one
    /// step event per decodable step in order, an expected-output event,
    /// and a computed-output event labeled with the match outcome.
    pub fn from_record(record: &CaseRecord) -> Self {
        let mut events: Vec<Event> = Vec::new();
        let mut skipped: Vec<SkippedStep> = Vec::new();

        let params = parse_param_line(&record.input);
        if !params.is_empty() {
            events.push(Event::new(
                events.len(),
                EventKind::Input,
                "Input",
                None,
                params.into_iter().collect(),
            ));
        }

        for (step_index, step) in record.steps.iter().enumerate() {
            match decode_step(step) {
                Ok(values) => {
                    events.push(Event::new(
                        events.len(),
                        EventKind::Step,
                        &step.label,
                        step.line,
                        values,
                    ));
                }
                Err(error) => {
                    log::debug!(
                        "timeline: step {} '{}' unavailable: {}",
                        step_index,
                        step.label,
                        error
                    );
                    skipped.push(SkippedStep {
                        step_index,
                        label: step.label.clone(),
                        error,
                    });
                }
            }
        }

        let mut expected_values = BTreeMap::new();
        expected_values.insert("output".to_string(), parse_literal(&record.expected));
        events.push(Event::new(
            events.len(),
            EventKind::Output,
            "Expected",
            None,
            expected_values,
        ));

        let mut actual_values = BTreeMap::new();
        actual_values.insert("output".to_string(), parse_literal(&record.actual));
        let label = if record.passed {
            "Output (match)"
        } else {
            "Output (mismatch)"
        };
        events.push(Event::new(
            events.len(),
            EventKind::Output,
            label,
            None,
            actual_values,
        ));

        Timeline { events, skipped }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Steps excluded by decode failures, in step order
    pub fn skipped(&self) -> &[SkippedStep] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get an event by index
    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    /// The input event, when the record's input line parsed any parameters
    pub fn input_event(&self) -> Option<&Event> {
        self.events.iter().find(|e| e.kind == EventKind::Input)
    }

    /// The computed-output event (the last output event)
    pub fn output_event(&self) -> Option<&Event> {
        self.events.iter().rev().find(|e| e.kind == EventKind::Output)
    }

    /// Resolve the structure to display with the indexed event selected.
    ///
    /// The input event and the computed-output event are the other
    /// candidates. Pure; recomputing on every redraw is the caller's
    /// choice to make.
    pub fn resolve_at(&self, index: usize) -> Option<Candidate> {
        let selected = self.get(index)?;
        resolve_structure(self.input_event(), Some(selected), self.output_event())
    }
}

/// Decode one step's variables, failing on the first unsupported shape.
fn decode_step(step: &StepRecord) -> Result<BTreeMap<String, TypedValue>, DecodeError> {
    let mut values = BTreeMap::new();
    for (name, raw) in &step.locals {
        let value = decode_typed(name, raw)?;
        values.insert(name.clone(), value);
    }
    Ok(values)
}
