//! Vector-document model: an owned XML tree with parse and serialize support

/// Owned XML tree types
pub mod node;
/// Event-based parsing into the tree model
pub mod parse;
/// Indented serialization and namespace registration
pub mod write;

pub use node::{Content, Node};
