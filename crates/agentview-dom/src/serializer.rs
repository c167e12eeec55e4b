//! Markup tree to HTML text serialization.

use std::fmt::Write;

use crate::node::{Document, Element, MarkupNode};

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serialize a document to HTML text.
#[must_use]
pub fn serialize_document(doc: &Document) -> String {
    let mut out = String::with_capacity(256);
    for node in &doc.nodes {
        serialize_node(node, &mut out);
    }
    out
}

/// Serialize a single node, appending to `out`.
pub fn serialize_node(node: &MarkupNode, out: &mut String) {
    match node {
        MarkupNode::Text(text) => out.push_str(&escape_text(text)),
        MarkupNode::Element(element) => serialize_element(element, out),
    }
}

fn serialize_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);

    // Attribute order is irrelevant in the model; sort for stable output.
    let mut attrs: Vec<_> = element.attrs.iter().collect();
    attrs.sort_by_key(|(name, _)| name.as_str());
    for (name, value) in attrs {
        write!(out, r#" {}="{}""#, name, escape_attr(value)).unwrap();
    }
    out.push('>');

    if VOID_TAGS.contains(&element.tag.as_str()) {
        return;
    }

    for child in &element.children {
        serialize_node(child, out);
    }
    write!(out, "</{}>", element.tag).unwrap();
}

/// Escape text for HTML content.
#[must_use]
pub fn escape_text(text: &str) -> String {
    escape_html(text, false)
}

/// Escape text for HTML attribute values.
#[must_use]
pub fn escape_attr(text: &str) -> String {
    escape_html(text, true)
}

fn escape_html(text: &str, escape_quotes: bool) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if escape_quotes => result.push_str("&quot;"),
            '\'' if escape_quotes => result.push_str("&#x27;"),
            _ => result.push(ch),
        }
    }
    result
}
