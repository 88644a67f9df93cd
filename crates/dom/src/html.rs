//! HTML import and export
//!
//! Parsing goes through `scraper` (html5ever), so the resulting tree has the
//! same shape a browser would build: implied `<html>`, `<head>`, `<body>`
//! and `<tbody>` elements are present even when the source omits them.
//!
//! Serialization writes the arena back out as HTML. Void elements are
//! written without end tags and the contents of `<script>`/`<style>` are
//! left unescaped.

use crate::document::Document;
use crate::error::Result;
use crate::node::{ElementData, NodeData, NodeId};
use scraper::{Html, Node};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Document {
    /// Parse a complete HTML document.
    #[must_use]
    pub fn parse_html(source: &str) -> Self {
        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            tracing::debug!("HTML parsed with {} recoverable errors", html.errors.len());
        }

        let mut doc = Document::new();
        let mut ids = HashMap::new();

        // Pre-order traversal visits every parent before its children.
        for node in html.tree.root().descendants() {
            let id = match node.value() {
                Node::Document | Node::Fragment => {
                    ids.insert(node.id(), doc.root());
                    continue;
                }
                Node::Doctype(doctype) => {
                    doc.create_node(NodeData::Doctype(doctype.name().to_string()))
                }
                Node::Comment(comment) => {
                    doc.create_node(NodeData::Comment(comment.comment.to_string()))
                }
                Node::Text(text) => doc.create_text(text.text.to_string()),
                Node::Element(element) => {
                    let mut data = ElementData::new(element.name());
                    for (name, value) in element.attrs() {
                        data.set_attr(name, value);
                    }
                    doc.create_node(NodeData::Element(data))
                }
                Node::ProcessingInstruction(_) => continue,
            };

            if let Some(parent) = node.parent().and_then(|p| ids.get(&p.id()).copied()) {
                doc.attach_parsed(parent, id);
            }
            ids.insert(node.id(), id);
        }

        doc
    }

    /// Read and parse an HTML file.
    pub fn from_html_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse_html(&contents))
    }

    /// Serialize the whole document.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for child in self.children(self.root()) {
            self.write_node(*child, &mut out);
        }
        out
    }

    /// Serialize the document into a file.
    pub fn write_html_file(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_html())?;
        Ok(())
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        match &node.data {
            NodeData::Document => {
                for child in node.children() {
                    self.write_node(*child, out);
                }
            }
            NodeData::Doctype(name) => {
                out.push_str("<!DOCTYPE ");
                out.push_str(name);
                out.push('>');
            }
            NodeData::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            NodeData::Text(text) => {
                let raw = self
                    .parent(id)
                    .and_then(|parent| self.tag_name(parent))
                    .is_some_and(|tag| RAW_TEXT_ELEMENTS.contains(&tag));
                if raw {
                    out.push_str(text);
                } else {
                    escape_text(text, out);
                }
            }
            NodeData::Element(element) => {
                out.push('<');
                out.push_str(&element.name);
                for (name, value) in &element.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_attr(value, out);
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&element.name.as_str()) {
                    return;
                }
                for child in node.children() {
                    self.write_node(*child, out);
                }
                out.push_str("</");
                out.push_str(&element.name);
                out.push('>');
            }
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builds_implied_structure() {
        let doc = Document::parse_html("<table><tr><td>a</td></tr></table>");
        let tbody = doc
            .descendants(doc.root())
            .find(|id| doc.is_element_named(*id, "tbody"));
        assert!(tbody.is_some(), "html5ever inserts an implied tbody");
    }

    #[test]
    fn test_round_trip_keeps_classes_and_entities() {
        let source = r#"<!DOCTYPE html><html><head></head><body><p class="a b">1 &lt; 2&nbsp;&amp; 3</p><br></body></html>"#;
        let doc = Document::parse_html(source);
        assert_eq!(doc.to_html(), source);
    }

    #[test]
    fn test_script_text_is_not_escaped() {
        let source = "<html><head><script>if (a < b) {}</script></head><body></body></html>";
        let doc = Document::parse_html(source);
        assert!(doc.to_html().contains("if (a < b) {}"));
    }

    #[test]
    fn test_created_elements_serialize() {
        let mut doc = Document::new();
        let span = doc.create_element("span");
        doc.element_mut(span).unwrap().add_class("sorttable_incrind");
        let text = doc.create_text("\u{a0}\u{25B4}");
        doc.append_child(span, text).unwrap();
        let root = doc.root();
        doc.append_child(root, span).unwrap();

        assert_eq!(
            doc.to_html(),
            "<span class=\"sorttable_incrind\">&nbsp;\u{25B4}</span>"
        );
    }
}
