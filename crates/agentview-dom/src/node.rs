//! Owned markup tree representation.

use std::collections::HashMap;

/// Node in a parsed markup tree.
///
/// A node is either an element with owned children or a literal text run.
/// Parents exclusively own their children, so the tree is acyclic and every
/// node has at most one parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    /// An element with tag, attributes, and ordered children.
    Element(Element),
    /// A literal text run, rendered verbatim.
    Text(String),
}

impl MarkupNode {
    /// Create a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// The element payload, if this node is an element.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// The text payload, if this node is a text run.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    /// Concatenated text content of this node and all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Number of nodes in this subtree, including self.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Text(_) => 1,
            Self::Element(element) => {
                1 + element
                    .children
                    .iter()
                    .map(MarkupNode::node_count)
                    .sum::<usize>()
            }
        }
    }
}

impl From<Element> for MarkupNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element node: tag name, attributes, and ordered children.
///
/// Tag names are lowercase identifiers in canonical form; the bundled
/// parser produces lowercase names and the sanitizer canonicalizes whatever
/// a custom parser hands it. Attribute insertion order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Element tag name.
    pub tag: String,
    /// Element attributes.
    pub attrs: HashMap<String, String>,
    /// Child nodes, in document order.
    pub children: Vec<MarkupNode>,
}

impl Element {
    /// Create a new element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<MarkupNode>) -> Self {
        self.children = children;
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(MarkupNode::text(text));
        self
    }
}

/// A parsed markup document: an ordered sequence of top-level nodes.
///
/// Created per render call, consumed by the sanitizer, then flushed to the
/// sink and discarded. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level nodes, in document order.
    pub nodes: Vec<MarkupNode>,
}

impl Document {
    /// Create a document from top-level nodes.
    #[must_use]
    pub fn new(nodes: Vec<MarkupNode>) -> Self {
        Self { nodes }
    }

    /// Whether the document holds no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Concatenated text content of the whole document.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.collect_text(&mut out);
        }
        out
    }

    /// Total node count across all top-level subtrees.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(MarkupNode::node_count).sum()
    }
}
