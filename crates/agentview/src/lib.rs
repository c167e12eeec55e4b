//! Safe rendering of agent-produced content.
//!
//! Agents emit content with no content-type metadata: a reply may be raw
//! HTML, Markdown, or plain prose. This crate classifies the content,
//! routes it through the matching conversion path, sanitizes the parsed
//! markup against an allow-list policy, and flushes the result to a
//! [`TargetSink`] — guaranteeing the sink always ends up with safe,
//! displayable content, even when the input is hostile or malformed.
//!
//! # Example
//!
//! ```
//! use agentview::{HtmlSink, render};
//!
//! let mut sink = HtmlSink::new();
//! let ok = render("**bold** and *italic*", &mut sink);
//! assert!(ok);
//! assert_eq!(sink.html(), "<strong>bold</strong> and <em>italic</em>");
//! ```
//!
//! Injected markup cannot execute script or escape the presentation
//! surface: only allow-listed elements and attributes survive, and
//! disallowed wrappers are unwrapped without losing their text content.
//!
//! ```
//! use agentview::{HtmlSink, render};
//!
//! let mut sink = HtmlSink::new();
//! render("<section><b>safe</b></section>", &mut sink);
//! assert_eq!(sink.html(), "<b>safe</b>");
//! ```
//!
//! For custom policies or parsers, build a [`ContentRenderer`] explicitly.

mod renderer;
mod sink;

pub use renderer::{ContentRenderer, RenderError, render};
pub use sink::{HtmlSink, NodeBufferSink, TargetSink};

pub use agentview_detect::{ContentKind, classify};
pub use agentview_dom::{
    Document, Element, HtmlParser, MarkupNode, MarkupParser, ParseError, serialize_document,
};
pub use agentview_markdown::convert as convert_markdown;
pub use agentview_sanitize::{AllowPolicy, sanitize};
