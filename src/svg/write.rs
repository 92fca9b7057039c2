//! Document serialization with stable indentation

use crate::io::configuration::{KVG_NAMESPACE, SVG_NAMESPACE};
use crate::svg::node::{Content, Node};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Result;
use std::sync::OnceLock;

/// Number of spaces per indentation level in serialized output
const INDENT_WIDTH: usize = 2;

// Namespace registration is process-wide and happens at most once,
// before the first document is serialized.
static NAMESPACES: OnceLock<Vec<(String, String)>> = OnceLock::new();

/// The process-wide namespace prefix table declared on output documents
///
/// Initialized on first use; repeated calls return the same table.
pub fn namespace_declarations() -> &'static [(String, String)] {
    NAMESPACES.get_or_init(|| {
        vec![
            ("xmlns".to_owned(), SVG_NAMESPACE.to_owned()),
            ("xmlns:kvg".to_owned(), KVG_NAMESPACE.to_owned()),
        ]
    })
}

/// Serialize a document to pretty-printed UTF-8 bytes
///
/// Output starts with a fixed XML declaration and uses two-space
/// indentation so generated images diff cleanly between runs.
///
/// # Errors
///
/// Returns an error if the underlying writer fails; writing into the
/// in-memory buffer only fails on malformed event sequences.
pub fn serialize(root: &Node) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(std::io::Error::other)?;
    write_node(&mut writer, root)?;

    Ok(writer.into_inner())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<()> {
    let mut start = BytesStart::new(node.name.as_str());
    for (key, value) in &node.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if node.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(std::io::Error::other);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(std::io::Error::other)?;
    for child in &node.children {
        match child {
            Content::Element(element) => write_node(writer, element)?,
            Content::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(std::io::Error::other)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(node.name.as_str())))
        .map_err(std::io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::parse::parse_tree;

    #[test]
    fn namespace_table_is_stable_across_calls() {
        let first = namespace_declarations();
        let second = namespace_declarations();
        assert_eq!(first.as_ptr(), second.as_ptr());
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn serialized_output_round_trips() {
        let mut root = Node::new("svg");
        root.set_attribute("xmlns", SVG_NAMESPACE);
        root.set_attribute("viewBox", "0 0 109 109");
        let mut group = Node::new("g");
        group.set_attribute("style", "fill:none;stroke-width:3");
        group.push_element(Node::new("path"));
        root.push_element(group);

        let bytes = serialize(&root).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));

        let reparsed = parse_tree(&text).unwrap();
        assert_eq!(reparsed, root);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut root = Node::new("svg");
        root.set_attribute("data-label", "a&b");

        let text = String::from_utf8(serialize(&root).unwrap()).unwrap();
        assert!(text.contains("a&amp;b"));
    }

    #[test]
    fn childless_elements_are_self_closing() {
        let text = String::from_utf8(serialize(&Node::new("path")).unwrap()).unwrap();
        assert!(text.contains("<path/>"));
    }
}
