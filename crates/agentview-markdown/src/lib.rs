//! Constrained Markdown to HTML text rewriting.
//!
//! [`convert`] rewrites a small Markdown subset (headings, emphasis, inline
//! code, links, line breaks) into HTML text suitable as parser input. It is
//! purely textual: no nesting validation is attempted, and malformed
//! nesting is tolerated and resolved later by the parser and sanitizer.
//! Full CommonMark is out of scope by design.

use std::sync::LazyLock;

use regex::Regex;

/// Line-anchored heading rules, longest prefix first so `###` is not
/// swallowed by the `#` rule.
static H3_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").expect("invalid h3 regex"));
static H2_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").expect("invalid h2 regex"));
static H1_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").expect("invalid h1 regex"));

static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("invalid bold regex"));
static ITALIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("invalid italic regex"));
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(.*?)`").expect("invalid code regex"));
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("invalid link regex"));

/// Convert constrained Markdown to HTML text.
///
/// Rules are applied to the whole string in a fixed order, each rule's
/// output feeding the next. Headings run before emphasis, so a line like
/// `# **bold heading**` wraps as a heading first and the emphasis rewrite
/// then applies inside it. Total function, no failure mode.
#[must_use]
pub fn convert(markdown: &str) -> String {
    let html = H3_PATTERN.replace_all(markdown, "<h3>$1</h3>");
    let html = H2_PATTERN.replace_all(&html, "<h2>$1</h2>");
    let html = H1_PATTERN.replace_all(&html, "<h1>$1</h1>");
    let html = BOLD_PATTERN.replace_all(&html, "<strong>$1</strong>");
    let html = ITALIC_PATTERN.replace_all(&html, "<em>$1</em>");
    let html = CODE_PATTERN.replace_all(&html, "<code>$1</code>");
    let html = LINK_PATTERN.replace_all(&html, r#"<a href="$2">$1</a>"#);
    html.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(convert("# One"), "<h1>One</h1>");
        assert_eq!(convert("## Two"), "<h2>Two</h2>");
        assert_eq!(convert("### Three"), "<h3>Three</h3>");
    }

    #[test]
    fn test_heading_requires_line_start() {
        assert_eq!(convert("see # not a heading"), "see # not a heading");
    }

    #[test]
    fn test_deeper_headings_pass_through() {
        // Only levels 1-3 are rewritten; deeper markers stay literal.
        assert_eq!(convert("#### Four"), "#### Four");
    }

    #[test]
    fn test_bold() {
        assert_eq!(convert("**bold**"), "<strong>bold</strong>");
        assert_eq!(
            convert("a **b** c **d**"),
            "a <strong>b</strong> c <strong>d</strong>"
        );
    }

    #[test]
    fn test_italic() {
        assert_eq!(convert("*italic*"), "<em>italic</em>");
    }

    #[test]
    fn test_bold_runs_before_italic() {
        assert_eq!(
            convert("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(convert("run `cargo test`"), "run <code>cargo test</code>");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            convert("[docs](https://example.com)"),
            r#"<a href="https://example.com">docs</a>"#
        );
    }

    #[test]
    fn test_link_with_empty_label() {
        assert_eq!(convert("[](x)"), r#"<a href="x"></a>"#);
    }

    #[test]
    fn test_newlines_become_breaks() {
        assert_eq!(convert("one\ntwo\nthree"), "one<br>two<br>three");
    }

    #[test]
    fn test_heading_then_bold_pipeline() {
        assert_eq!(
            convert("# Title\n**bold**"),
            "<h1>Title</h1><br><strong>bold</strong>"
        );
    }

    #[test]
    fn test_emphasis_inside_heading() {
        // Heading wraps the line first; the bold rewrite then applies inside
        // the already-wrapped line.
        assert_eq!(
            convert("# **bold heading**"),
            "<h1><strong>bold heading</strong></h1>"
        );
    }

    #[test]
    fn test_mixed_document() {
        let markdown = "## Status\nbuild `ok`, see [log](https://ci.example.com/1)\n*done*";
        assert_eq!(
            convert(markdown),
            "<h2>Status</h2><br>build <code>ok</code>, see \
             <a href=\"https://ci.example.com/1\">log</a><br><em>done</em>"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(convert("no markup here"), "no markup here");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }
}
