//! Compositing engine: weighing, layout, materialization and assembly

/// Output-tree assembly
pub mod assemble;
/// Slot geometry resolution with complexity weighting
pub mod layout;
/// Resolved-slot materialization and stroke rescaling
pub mod materialize;
/// Random radical × character selection
pub mod selector;
/// Structural complexity weighing
pub mod weight;

pub use assemble::assemble;
pub use layout::{resolve, SlotGeometry};
pub use materialize::{materialize, ImagePart};
pub use selector::Selector;
pub use weight::weight;
