//! Fragment parsing with root-element validation

use crate::io::configuration::SVG_NAMESPACE;
use crate::io::error::{file_system_error, GenerationError, Result};
use crate::svg::node::{Content, Node};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// Load a fragment document and return its root element
///
/// The root must be an `svg` element in the SVG namespace; anything else
/// means the file is not a usable fragment and is treated as corrupt input.
///
/// # Errors
///
/// Returns [`GenerationError::FileSystem`] if the file cannot be read and
/// [`GenerationError::MalformedDocument`] if it is not a well-formed SVG
/// document.
pub fn load_document(path: &Path) -> Result<Node> {
    let text =
        std::fs::read_to_string(path).map_err(|err| file_system_error(path, "read", err))?;

    let root = parse_tree(&text).map_err(|reason| GenerationError::MalformedDocument {
        path: path.to_path_buf(),
        reason,
    })?;

    check_root(&root).map_err(|reason| GenerationError::MalformedDocument {
        path: path.to_path_buf(),
        reason,
    })?;

    Ok(root)
}

/// Parse an XML document from text into an owned tree
///
/// Prefixes in element and attribute names are kept verbatim; the caller is
/// responsible for namespace semantics. Comments, processing instructions
/// and the document type declaration are dropped.
///
/// # Errors
///
/// Returns a description of the syntax error if the text is not well-formed
/// XML or contains no root element.
pub fn parse_tree(text: &str) -> std::result::Result<Node, String> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        match reader.read_event().map_err(|err| err.to_string())? {
            Event::Start(start) => {
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let node = element_from_start(&start)?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::End(_) => {
                let node = stack.pop().ok_or_else(|| "unbalanced end tag".to_owned())?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::Text(content) => {
                let value = content.unescape().map_err(|err| err.to_string())?;
                if !value.is_empty() {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(Content::Text(value.into_owned()));
                    }
                }
            }
            Event::CData(data) => {
                let value = String::from_utf8_lossy(&data).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Content::Text(value));
                }
            }
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if !stack.is_empty() {
        return Err("unclosed element at end of document".to_owned());
    }
    root.ok_or_else(|| "document has no root element".to_owned())
}

fn element_from_start(start: &BytesStart<'_>) -> std::result::Result<Node, String> {
    let mut node = Node::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|err| err.to_string())?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|err| err.to_string())?
            .into_owned();
        node.attributes.push((key, value));
    }
    Ok(node)
}

fn attach(
    stack: &mut [Node],
    root: &mut Option<Node>,
    node: Node,
) -> std::result::Result<(), String> {
    if let Some(parent) = stack.last_mut() {
        parent.push_element(node);
    } else if root.is_some() {
        return Err("multiple root elements".to_owned());
    } else {
        *root = Some(node);
    }
    Ok(())
}

fn check_root(root: &Node) -> std::result::Result<(), String> {
    if root.name != "svg" {
        return Err(format!("root element is <{}>, expected <svg>", root.name));
    }
    match root.attribute("xmlns") {
        Some(SVG_NAMESPACE) => Ok(()),
        Some(other) => Err(format!("root namespace is '{other}', expected '{SVG_NAMESPACE}'")),
        None => Err("root element declares no namespace".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = concat!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:kvg="http://kanjivg.tagaini.net">"#,
        r#"<g id="kvg:StrokePaths_04e00" style="fill:none;stroke-width:3">"#,
        r#"<path d="M10,50 L90,50"/>"#,
        "</g></svg>"
    );

    #[test]
    fn parses_nested_structure() {
        let root = parse_tree(MINIMAL).unwrap();
        assert_eq!(root.name, "svg");
        let group = root.elements().next().unwrap();
        assert_eq!(group.attribute("id"), Some("kvg:StrokePaths_04e00"));
        assert_eq!(group.elements().count(), 1);
    }

    #[test]
    fn keeps_prefixed_attribute_names_verbatim() {
        let root = parse_tree(
            r#"<svg xmlns="http://www.w3.org/2000/svg"><g kvg:element="一"/></svg>"#,
        )
        .unwrap();
        let group = root.elements().next().unwrap();
        assert_eq!(group.attribute("kvg:element"), Some("一"));
    }

    #[test]
    fn unescapes_attribute_values() {
        let root =
            parse_tree(r#"<svg xmlns="http://www.w3.org/2000/svg" data-label="a&amp;b"/>"#)
                .unwrap();
        assert_eq!(root.attribute("data-label"), Some("a&b"));
    }

    #[test]
    fn rejects_unbalanced_documents() {
        assert!(parse_tree("<svg><g></svg>").is_err());
        assert!(parse_tree("").is_err());
    }

    #[test]
    fn check_root_rejects_foreign_documents() {
        let root = parse_tree(r#"<html xmlns="http://www.w3.org/1999/xhtml"/>"#).unwrap();
        assert!(check_root(&root).is_err());

        let root = parse_tree("<svg/>").unwrap();
        assert!(check_root(&root).is_err(), "svg without xmlns must fail");

        let root = parse_tree(r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#).unwrap();
        assert!(check_root(&root).is_ok());
    }
}
