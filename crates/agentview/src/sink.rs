//! Target sinks for rendered content.

use agentview_dom::{MarkupNode, serialize_node};

/// Receives the final sanitized output for display.
///
/// The orchestrator guarantees that `clear` precedes any `append` sequence
/// on both the primary and fallback paths. `append` order is display order.
/// Implementations are not synchronized: concurrent renders into the same
/// sink must be serialized by the caller.
pub trait TargetSink {
    /// Discard any previously appended content. Idempotent.
    fn clear(&mut self);

    /// Append a node after the existing content.
    fn append(&mut self, node: MarkupNode);
}

/// Sink that serializes appended nodes into an HTML string.
///
/// Text is entity-escaped on the way out, so even the literal-text fallback
/// path produces displayable HTML.
#[derive(Debug, Default)]
pub struct HtmlSink {
    html: String,
}

impl HtmlSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The HTML accumulated so far.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Consume the sink, returning the accumulated HTML.
    #[must_use]
    pub fn into_html(self) -> String {
        self.html
    }
}

impl TargetSink for HtmlSink {
    fn clear(&mut self) {
        self.html.clear();
    }

    fn append(&mut self, node: MarkupNode) {
        serialize_node(&node, &mut self.html);
    }
}

/// Sink that retains the appended nodes as-is.
///
/// Useful for hosting integrations that hand the tree to their own display
/// layer, and for inspecting render output in tests.
#[derive(Debug, Default)]
pub struct NodeBufferSink {
    nodes: Vec<MarkupNode>,
}

impl NodeBufferSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The nodes appended so far, in display order.
    #[must_use]
    pub fn nodes(&self) -> &[MarkupNode] {
        &self.nodes
    }

    /// Consume the sink, returning the appended nodes.
    #[must_use]
    pub fn into_nodes(self) -> Vec<MarkupNode> {
        self.nodes
    }
}

impl TargetSink for NodeBufferSink {
    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn append(&mut self, node: MarkupNode) {
        self.nodes.push(node);
    }
}

#[cfg(test)]
mod tests {
    use agentview_dom::Element;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_html_sink_serializes_in_order() {
        let mut sink = HtmlSink::new();
        sink.append(Element::new("h1").with_text("Title").into());
        sink.append(Element::new("p").with_text("body").into());
        assert_eq!(sink.html(), "<h1>Title</h1><p>body</p>");
    }

    #[test]
    fn test_html_sink_escapes_text_nodes() {
        let mut sink = HtmlSink::new();
        sink.append(MarkupNode::text("<script>alert(1)</script>"));
        assert_eq!(sink.html(), "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn test_html_sink_clear_is_idempotent() {
        let mut sink = HtmlSink::new();
        sink.append(MarkupNode::text("x"));
        sink.clear();
        sink.clear();
        assert_eq!(sink.html(), "");
    }

    #[test]
    fn test_node_buffer_sink_retains_nodes() {
        let mut sink = NodeBufferSink::new();
        sink.append(MarkupNode::text("a"));
        sink.append(Element::new("br").into());
        assert_eq!(
            sink.into_nodes(),
            vec![MarkupNode::text("a"), Element::new("br").into()]
        );
    }
}
