//! Content-type classification for agent-produced text.
//!
//! Agents emit content without any content-type metadata: the same string
//! field may carry raw HTML, Markdown, or plain prose. [`classify`] infers
//! the format from structural signals so the caller can route the content
//! to the right conversion path.
//!
//! Tag evidence always wins over Markdown signals: misclassifying HTML as
//! text would display raw angle brackets, and misclassifying it as Markdown
//! would corrupt it, so even partial tag evidence short-circuits the
//! Markdown checks.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// A single tag-like token: `<name …>`, `</name>`, or `<name …/>`.
///
/// Group 1 is the optional closing slash, group 2 the tag name, group 3
/// whatever sits between the name and `>`.
static TAG_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<\s*(/?)\s*([A-Za-z][A-Za-z0-9]*)([^>]*)>").expect("invalid tag token regex")
});

/// Markdown structural signals, checked as unordered alternatives.
static MARKDOWN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\*\*.*?\*\*",     // **bold**
        r"\*.*?\*",         // *italic*
        r"`.*?`",           // `code`
        r"(?m)^#{1,6}\s",   // # headings
        r"(?m)^\s*[-*+]\s", // - list items
        r"(?m)^\s*\d+\.\s", // 1. numbered lists
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("invalid markdown signal regex"))
    .collect()
});

/// Classification of a piece of agent-produced content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Contains tag markup; route to the HTML parser directly.
    Html,
    /// Contains Markdown signals but no tag markup; convert before parsing.
    Markdown,
    /// No structural markup; insert as a literal text node.
    Text,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

/// Classify raw content as HTML, Markdown, or plain text.
///
/// Total and deterministic; the input is only trimmed for analysis and is
/// never modified. Checks are ordered, first match wins:
///
/// 1. A paired tag (`<name …>` … `</name>`, same name case-insensitively)
///    classifies as [`ContentKind::Html`].
/// 2. Any standalone tag (`<name …>` or `<name …/>`) also classifies as
///    [`ContentKind::Html`].
/// 3. Any Markdown signal (emphasis, inline code, heading, list item)
///    classifies as [`ContentKind::Markdown`].
/// 4. Everything else is [`ContentKind::Text`].
#[must_use]
pub fn classify(content: &str) -> ContentKind {
    let trimmed = content.trim();
    let evidence = scan_tags(trimmed);

    if evidence.paired || evidence.standalone {
        ContentKind::Html
    } else if MARKDOWN_PATTERNS.iter().any(|p| p.is_match(trimmed)) {
        ContentKind::Markdown
    } else {
        ContentKind::Text
    }
}

/// Tag evidence collected by [`scan_tags`].
#[derive(Debug, Default)]
struct TagEvidence {
    /// An end tag matched an earlier start tag of the same name.
    paired: bool,
    /// At least one standalone start tag was seen.
    standalone: bool,
}

/// Scan tag-like tokens in a single linear pass.
///
/// Start-tag names are recorded (ASCII-lowercased); an end tag whose name
/// was previously opened establishes the paired pattern. End tags tolerate
/// only whitespace between the name and `>`. A bounded scan instead of a
/// backtracking pair regex keeps matching linear on adversarial input.
fn scan_tags(text: &str) -> TagEvidence {
    let mut open_names: HashSet<String> = HashSet::new();
    let mut evidence = TagEvidence::default();

    for caps in TAG_TOKEN_PATTERN.captures_iter(text) {
        let name = caps[2].to_ascii_lowercase();
        if caps[1].is_empty() {
            evidence.standalone = true;
            open_names.insert(name);
        } else if caps[3].trim().is_empty() && open_names.contains(&name) {
            evidence.paired = true;
            break;
        }
    }

    evidence
}
