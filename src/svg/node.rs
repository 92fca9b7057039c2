//! Owned XML tree model for vector fragments
//!
//! Fragments are small (a root, a handful of groups, a few dozen paths), so
//! an owned tree with ordered attribute pairs is simpler and more predictable
//! than a DOM crate: attribute order survives a parse/serialize round trip
//! and deep copies are plain `Clone`.

/// One child of an element: either a nested element or a text run
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Nested element
    Element(Node),
    /// Character data between tags
    Text(String),
}

/// An XML element with ordered attributes and ordered children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    /// Tag name, including any namespace prefix (e.g. `kvg:g`)
    pub name: String,
    /// Attributes in document order, prefixes kept verbatim
    pub attributes: Vec<(String, String)>,
    /// Child elements and text runs in document order
    pub children: Vec<Content>,
}

impl Node {
    /// Create an element with the given tag name and no attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by exact (prefixed) name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any existing value for the same name
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.attributes.iter_mut().find(|(key, _)| *key == name) {
            entry.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Iterate over child elements, skipping text runs
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|child| match child {
            Content::Element(node) => Some(node),
            Content::Text(_) => None,
        })
    }

    /// Mutable access to the first child element, if any
    pub fn first_element_mut(&mut self) -> Option<&mut Self> {
        self.children.iter_mut().find_map(|child| match child {
            Content::Element(node) => Some(node),
            Content::Text(_) => None,
        })
    }

    /// Append a child element
    pub fn push_element(&mut self, child: Self) {
        self.children.push(Content::Element(child));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attribute_replaces_in_place() {
        let mut node = Node::new("g");
        node.set_attribute("id", "a");
        node.set_attribute("style", "fill:none");
        node.set_attribute("id", "b");

        assert_eq!(node.attribute("id"), Some("b"));
        // Replacement keeps the original position
        assert_eq!(node.attributes[0].0, "id");
        assert_eq!(node.attributes.len(), 2);
    }

    #[test]
    fn elements_skips_text_children() {
        let mut node = Node::new("svg");
        node.children.push(Content::Text("stray".to_owned()));
        node.push_element(Node::new("g"));

        assert_eq!(node.elements().count(), 1);
        assert_eq!(node.first_element_mut().map(|n| n.name.clone()), Some("g".to_owned()));
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let mut original = Node::new("svg");
        original.push_element(Node::new("g"));

        let mut copied = original.clone();
        if let Some(child) = copied.first_element_mut() {
            child.set_attribute("id", "changed");
        }

        let untouched = original.elements().next().map(|n| n.attribute("id"));
        assert_eq!(untouched, Some(None));
    }
}
