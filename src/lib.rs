//! # Introduction
//!
//! tracelens is the parsing and classification core of an execution-trace
//! visualizer. It ingests one test-case record at a time, parses the
//! loosely-typed literal text and decoded step variables into a uniform
//! typed value model, and heuristically decides which abstract data
//! structure each trace event should be drawn as.
//!
//! ## Ingestion pipeline
//!
//! ```text
//! CaseRecord → parsers → Timeline of Events → classifier → candidates → resolver → structure
//! ```
//!
//! 1. [`parser`] — literal text, parameter lines, and decoded JSON into
//!    [`value::TypedValue`]s. Total except for the strongly-typed step
//!    decode path, whose failures are scoped to a single step.
//! 2. [`trace`] — one [`trace::CaseRecord`] becomes a [`trace::Timeline`]
//!    of [`trace::Event`]s: input, steps, expected and computed output.
//! 3. [`classify`] — each event's values resolve to one
//!    [`classify::ResolvedStructure`] through a fixed-priority handler
//!    chain; the input/selected/output candidates are then reconciled by
//!    pointer coverage.
//!
//! Rendering, animation, layout, and theming live in the consuming
//! visualizer; this crate hands over resolved structures and pristine
//! typed values and holds no state between calls. Everything here is
//! synchronous, allocation-bounded by the visualization-size ceiling, and
//! safe to call concurrently on independent inputs.

pub mod classify;
pub mod parser;
pub mod trace;
pub mod value;
