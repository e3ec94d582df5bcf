//! pysx-util - Shared building blocks for the pysx analyzer.
//!
//! This crate holds the two things every phase agrees on: source positions
//! and the diagnostics the analyzer is allowed to emit. The `Display`
//! implementations in [`diagnostic`] are the output contract of the whole
//! tool, so they live here rather than in any single phase.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, SUCCESS_MESSAGE};
pub use span::Span;
