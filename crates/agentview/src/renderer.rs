//! Rendering orchestration with literal-text fallback.

use agentview_detect::{ContentKind, classify};
use agentview_dom::{HtmlParser, MarkupNode, MarkupParser, ParseError, unescape_markup};
use agentview_sanitize::{AllowPolicy, sanitize};

use crate::sink::TargetSink;

/// Error returned when the primary render path fails.
///
/// Every variant triggers the same fallback: the sink is cleared and the
/// raw content is appended as a single literal text node, so the sink is
/// always left in a valid, displayable state.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The markup parser could not produce a usable tree.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// A collaborator failed outside the parse contract.
    #[error("render fault: {0}")]
    Fault(String),
}

/// Renders agent-produced content of unknown format into a target sink.
///
/// Composes the pipeline: classify the content, route it (HTML is parsed
/// directly, Markdown is converted first, plain text skips parsing),
/// sanitize the parsed tree against the allow-list policy, and flush the
/// surviving nodes to the sink. Any failure falls back to literal-text
/// rendering of the original content.
///
/// Configuration is explicit and immutable: a renderer owns its parser and
/// policy, and renders into different sinks independently. Concurrent
/// renders into the *same* sink must be serialized by the caller.
///
/// # Example
///
/// ```
/// use agentview::{ContentRenderer, HtmlSink};
///
/// let renderer = ContentRenderer::new();
/// let mut sink = HtmlSink::new();
/// renderer
///     .render("# Title\n**bold**", &mut sink)
///     .expect("markdown renders");
/// assert_eq!(sink.html(), "<h1>Title</h1><br><strong>bold</strong>");
/// ```
pub struct ContentRenderer {
    parser: Box<dyn MarkupParser + Send + Sync>,
    policy: AllowPolicy,
}

impl ContentRenderer {
    /// Create a renderer with the bundled HTML parser and the standard
    /// allow-list policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parser: Box::new(HtmlParser::new()),
            policy: AllowPolicy::standard(),
        }
    }

    /// Replace the sanitization policy.
    #[must_use]
    pub fn with_policy(mut self, policy: AllowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the markup parser.
    #[must_use]
    pub fn with_parser(mut self, parser: impl MarkupParser + Send + Sync + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Render content into the sink.
    ///
    /// The sink is cleared first in every case. On success the sink holds
    /// the sanitized nodes in document order; on failure it holds the
    /// original content as one literal text node. The sink never observes
    /// a partial primary write.
    ///
    /// # Errors
    ///
    /// Returns the error that forced the fallback. The sink is valid and
    /// displayable either way.
    pub fn render(&self, content: &str, sink: &mut dyn TargetSink) -> Result<(), RenderError> {
        sink.clear();
        match self.build_nodes(content) {
            Ok(nodes) => {
                for node in nodes {
                    sink.append(node);
                }
                Ok(())
            }
            Err(error) => {
                tracing::warn!(error = %error, "Falling back to literal text");
                sink.clear();
                sink.append(MarkupNode::text(content));
                Err(error)
            }
        }
    }

    /// Run classification, conversion, parsing, and sanitization, producing
    /// the nodes to append. The sink is untouched here, so a failure can
    /// never leave a partial primary write behind.
    fn build_nodes(&self, content: &str) -> Result<Vec<MarkupNode>, RenderError> {
        let kind = classify(content);
        tracing::debug!(kind = %kind, bytes = content.len(), "Classified content");

        let markup = match kind {
            ContentKind::Text => return Ok(vec![MarkupNode::text(content)]),
            ContentKind::Html => unescape_markup(content),
            ContentKind::Markdown => agentview_markdown::convert(content),
        };

        let parsed = self.parser.parse(&markup)?;
        let sanitized = sanitize(parsed, &self.policy);
        tracing::debug!(nodes = sanitized.node_count(), "Sanitized markup tree");
        Ok(sanitized.nodes)
    }
}

impl Default for ContentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render content into the sink with default configuration.
///
/// Returns whether the primary (non-fallback) path succeeded. The sink is
/// left populated with safe-to-display content regardless of the return
/// value.
pub fn render(content: &str, sink: &mut dyn TargetSink) -> bool {
    ContentRenderer::new().render(content, sink).is_ok()
}

#[cfg(test)]
mod tests {
    use agentview_dom::{Document, Element};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sink::{HtmlSink, NodeBufferSink};

    /// Parser stub that always reports an unusable tree.
    struct FailingParser;

    impl MarkupParser for FailingParser {
        fn parse(&self, _text: &str) -> Result<Document, ParseError> {
            Err(ParseError::new("unusable tree"))
        }
    }

    #[test]
    fn test_text_path_appends_single_literal_node() {
        let renderer = ContentRenderer::new();
        let mut sink = NodeBufferSink::new();
        renderer
            .render("just words, no markup", &mut sink)
            .expect("text renders");
        assert_eq!(sink.nodes(), &[MarkupNode::text("just words, no markup")]);
    }

    #[test]
    fn test_markdown_end_to_end() {
        let renderer = ContentRenderer::new();
        let mut sink = NodeBufferSink::new();
        renderer
            .render("# Title\n**bold**", &mut sink)
            .expect("markdown renders");
        assert_eq!(
            sink.nodes(),
            &[
                Element::new("h1").with_text("Title").into(),
                Element::new("br").into(),
                Element::new("strong").with_text("bold").into(),
            ]
        );
    }

    #[test]
    fn test_html_end_to_end_sanitizes() {
        let renderer = ContentRenderer::new();
        let mut sink = HtmlSink::new();
        let result = renderer.render(
            r#"<div onclick="x()"><script>alert(1)</script><p>safe</p></div>"#,
            &mut sink,
        );
        assert!(result.is_ok());
        assert_eq!(sink.html(), "<div>alert(1)<p>safe</p></div>");
    }

    #[test]
    fn test_html_path_strips_disallowed_attributes() {
        let renderer = ContentRenderer::new();
        let mut sink = HtmlSink::new();
        renderer
            .render(
                r#"<a href="https://example.com" onclick="steal()">x</a>"#,
                &mut sink,
            )
            .expect("html renders");
        assert_eq!(sink.html(), r#"<a href="https://example.com">x</a>"#);
    }

    #[test]
    fn test_html_path_unescapes_embedded_markup() {
        let renderer = ContentRenderer::new();
        let mut sink = HtmlSink::new();
        renderer
            .render("<div>&lt;em&gt;x&lt;/em&gt;</div>", &mut sink)
            .expect("html renders");
        assert_eq!(sink.html(), "<div><em>x</em></div>");
    }

    #[test]
    fn test_fallback_leaves_literal_text_in_sink() {
        let renderer = ContentRenderer::new().with_parser(FailingParser);
        let mut sink = NodeBufferSink::new();
        let result = renderer.render("<div>content</div>", &mut sink);
        assert!(matches!(result, Err(RenderError::Parse(_))));
        assert_eq!(sink.nodes(), &[MarkupNode::text("<div>content</div>")]);
    }

    #[test]
    fn test_fallback_never_leaves_sink_empty() {
        let renderer = ContentRenderer::new().with_parser(FailingParser);
        let mut sink = HtmlSink::new();
        let result = renderer.render("<b>x</b>", &mut sink);
        assert!(result.is_err());
        assert_eq!(sink.html(), "&lt;b&gt;x&lt;/b&gt;");
    }

    #[test]
    fn test_render_clears_previous_sink_content() {
        let renderer = ContentRenderer::new();
        let mut sink = NodeBufferSink::new();
        sink.append(MarkupNode::text("stale"));
        renderer.render("fresh", &mut sink).expect("text renders");
        assert_eq!(sink.nodes(), &[MarkupNode::text("fresh")]);
    }

    #[test]
    fn test_custom_policy_is_honored() {
        let policy = AllowPolicy::new(["em"]);
        let renderer = ContentRenderer::new().with_policy(policy);
        let mut sink = HtmlSink::new();
        renderer
            .render("<p><em>kept</em> unwrapped</p>", &mut sink)
            .expect("html renders");
        assert_eq!(sink.html(), "<em>kept</em> unwrapped");
    }

    #[test]
    fn test_public_entry_point_reports_success() {
        let mut sink = HtmlSink::new();
        assert!(render("plain", &mut sink));
        assert_eq!(sink.html(), "plain");
    }

    #[test]
    fn test_public_entry_point_reports_fallback() {
        // Fragment parsing folds bare html/body wrapper tags into the
        // context element, so this input yields no usable nodes and the
        // bundled parser itself forces the fallback.
        let mut sink = HtmlSink::new();
        assert!(!render("<html></html>", &mut sink));
        assert_eq!(sink.html(), "&lt;html&gt;&lt;/html&gt;");
    }

    #[test]
    fn test_same_renderer_serves_multiple_sinks() {
        let renderer = ContentRenderer::new();
        let mut first = HtmlSink::new();
        let mut second = HtmlSink::new();
        renderer.render("**a**", &mut first).expect("renders");
        renderer.render("plain", &mut second).expect("renders");
        assert_eq!(first.html(), "<strong>a</strong>");
        assert_eq!(second.html(), "plain");
    }
}
