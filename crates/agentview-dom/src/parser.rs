//! Markup parser seam and the bundled html5ever adapter.

use html5ever::driver::ParseOpts;
use html5ever::parse_fragment;
use html5ever::tendril::TendrilSink;
use html5ever::{QualName, local_name, namespace_url, ns};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::node::{Document, Element, MarkupNode};

/// The parser could not produce a usable tree from the input.
#[derive(Debug, Clone, thiserror::Error)]
#[error("markup parse error: {message}")]
pub struct ParseError {
    /// Human-readable description of the failure.
    pub message: String,
}

impl ParseError {
    /// Create a parse error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parses markup text into a [`Document`].
///
/// Implementations must accept arbitrary text without panicking: return a
/// tree whenever one can be recovered, and [`ParseError`] only when no
/// usable tree exists. The orchestrator treats an error as a signal to fall
/// back to literal-text rendering.
pub trait MarkupParser {
    /// Parse markup text into a document.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the input cannot yield a usable tree.
    fn parse(&self, text: &str) -> Result<Document, ParseError>;
}

/// HTML parser backed by html5ever fragment parsing.
///
/// Forgiving in the way a browser `DOMParser` is: malformed input is
/// repaired wherever possible, and an error is reported only when non-empty
/// input produces no usable nodes at all. Comments, doctypes, and
/// processing instructions have no representation in [`MarkupNode`] and are
/// skipped; `<template>` subtree content is inert and likewise dropped.
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupParser for HtmlParser {
    fn parse(&self, text: &str) -> Result<Document, ParseError> {
        let parser = parse_fragment(
            RcDom::default(),
            ParseOpts::default(),
            QualName::new(None, ns!(html), local_name!("body")),
            Vec::new(),
        );
        let dom = parser.one(text);

        let nodes = fragment_nodes(&dom);
        if nodes.is_empty() && !text.trim().is_empty() {
            return Err(ParseError::new(
                "no usable nodes produced from non-empty input",
            ));
        }

        Ok(Document::new(nodes))
    }
}

/// Extract the fragment's top-level nodes.
///
/// Fragment parsing wraps the content in a synthetic `<html>` element under
/// the document root; the fragment's own nodes are its children.
fn fragment_nodes(dom: &RcDom) -> Vec<MarkupNode> {
    dom.document
        .children
        .borrow()
        .iter()
        .find(|child| matches!(child.data, NodeData::Element { .. }))
        .map(convert_children)
        .unwrap_or_default()
}

/// Convert an rcdom subtree into the owned node model.
fn convert_node(handle: &Handle) -> Option<MarkupNode> {
    match &handle.data {
        NodeData::Text { contents } => Some(MarkupNode::Text(contents.borrow().to_string())),
        NodeData::Element { name, attrs, .. } => {
            let mut element = Element::new(name.local.to_string());
            for attr in attrs.borrow().iter() {
                element
                    .attrs
                    .insert(attr.name.local.to_string(), attr.value.to_string());
            }
            element.children = convert_children(handle);
            Some(MarkupNode::Element(element))
        }
        NodeData::Document
        | NodeData::Doctype { .. }
        | NodeData::Comment { .. }
        | NodeData::ProcessingInstruction { .. } => None,
    }
}

fn convert_children(handle: &Handle) -> Vec<MarkupNode> {
    handle
        .children
        .borrow()
        .iter()
        .filter_map(convert_node)
        .collect()
}
