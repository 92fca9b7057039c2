//! Structural complexity weighing
//!
//! The weight of a fragment is the number of nodes in its tree carrying the
//! named-element marker. More labeled sub-components approximates greater
//! visual complexity; the layout resolver uses the difference between two
//! fragments' weights to bias slot geometry. This is a pure structural
//! proxy, not a rendering concept.

use crate::io::configuration::ELEMENT_ATTRIBUTE;
use crate::svg::node::Node;

/// Count the named structural elements in a fragment tree
pub fn weight(node: &Node) -> u32 {
    let own = u32::from(node.attribute(ELEMENT_ATTRIBUTE).is_some());
    own + node.elements().map(weight).sum::<u32>()
}
