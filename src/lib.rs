//! Procedural kanji generation by compositing vector fragments
//!
//! The system pairs a radical (a structural sub-component authored with
//! two-slot layout rules) with a full character glyph, resolves each slot's
//! geometry — optionally biased by the relative structural complexity of
//! the two operands — and assembles a single normalized SVG document with
//! correct namespacing, positioning and stroke-width rescaling.

#![forbid(unsafe_code)]

/// Compositing engine: weighing, layout, materialization and assembly
pub mod compose;
/// Corpus data model: fragments, radicals, characters and configuration
pub mod corpus;
/// Input/output operations and error handling
pub mod io;
/// Vector-document tree model with parse and serialize support
pub mod svg;

pub use io::error::{GenerationError, Result};
