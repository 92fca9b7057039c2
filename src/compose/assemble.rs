//! Output-tree assembly
//!
//! Builds the root image container for a composition: fixed default canvas
//! geometry, both namespace declarations, a provenance attribute naming the
//! glyphs that went in, and the two materialized parts in slot order.

use crate::compose::materialize::ImagePart;
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_VIEWBOX, DEFAULT_WIDTH, ELEMENT_ATTRIBUTE};
use crate::svg::node::Node;
use crate::svg::write::namespace_declarations;

/// Assemble the final output document from both materialized parts
///
/// The returned tree is ready for serialization with [`crate::svg::write::serialize`].
pub fn assemble(parts: [ImagePart; 2]) -> Node {
    let mut root = Node::new("svg");
    for (prefix, namespace) in namespace_declarations() {
        root.set_attribute(prefix.clone(), namespace.clone());
    }
    root.set_attribute("width", DEFAULT_WIDTH.to_string());
    root.set_attribute("height", DEFAULT_HEIGHT.to_string());
    root.set_attribute("viewBox", DEFAULT_VIEWBOX);

    // Provenance: which glyphs were composited, absent identities omitted
    let provenance: String = parts.iter().filter_map(|part| part.glyph).collect();
    root.set_attribute(ELEMENT_ATTRIBUTE, provenance);

    for part in parts {
        root.push_element(part.node);
    }
    root
}
