//! Trace input parsers
//!
//! This module turns the three raw input shapes into [`TypedValue`]s:
//! - [`literal`]: free-text literals (`"[2,7,11,15]"`, `"true"`, `"abc"`)
//! - [`params`]: parameter-assignment lines (`"nums = [2,7], target = 9"`)
//! - [`decode`]: already-decoded JSON trees and the strongly-typed step
//!   decode path
//!
//! # Failure Policy
//!
//! The literal and parameter parsers never fail: text that matches no
//! grammar rule falls back to a verbatim string value. Only the
//! strongly-typed decode path can error, and its [`decode::DecodeError`] is
//! scoped to the single step variable being decoded.
//!
//! [`TypedValue`]: crate::value::TypedValue

pub mod decode;
pub mod literal;
pub mod params;
