//! Structure classification engine
//!
//! This module decides which abstract data structure an event's values
//! should be drawn as:
//! - [`structure`]: the [`ResolvedStructure`] tagged union
//! - [`handlers`]: the fixed-priority detection handler chain
//! - [`adjacency`]: the matrix vs graph disambiguation heuristics
//! - [`resolve`]: reconciliation of input/selected/output candidates by
//!   pointer coverage
//!
//! # Determinism
//!
//! Classification is a pure function of the event's values. Keys are
//! iterated in sorted order and handlers run in a fixed priority, so the
//! same event always resolves to the same structure. Nothing here holds
//! state between calls; callers own any caching.
//!
//! [`ResolvedStructure`]: structure::ResolvedStructure

pub mod adjacency;
pub mod handlers;
pub mod resolve;
pub mod structure;

pub use handlers::classify_event;
pub use resolve::{resolve_structure, Candidate, CandidateSource};
pub use structure::{NamedList, ResolvedStructure};
