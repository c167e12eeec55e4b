//! Markup tree model and parser seam for safe content rendering.
//!
//! This crate owns the data model the rendering pipeline operates on:
//! [`Document`] as an ordered sequence of top-level [`MarkupNode`] values,
//! where each node is either an [`Element`] (tag, attributes, owned
//! children) or a text node. Trees are exclusively owned and acyclic by
//! construction.
//!
//! Parsing is a trait seam: [`MarkupParser`] turns markup text into a
//! [`Document`], and the bundled [`HtmlParser`] adapts html5ever fragment
//! parsing. Hosting integrations may provide their own implementation.
//!
//! [`serialize_document`] renders a tree back to escaped HTML text, and
//! [`unescape_markup`] reverses the entity escaping some producers apply
//! to markup they emit.

mod entities;
mod node;
mod parser;
mod serializer;

pub use entities::unescape_markup;
pub use node::{Document, Element, MarkupNode};
pub use parser::{HtmlParser, MarkupParser, ParseError};
pub use serializer::{escape_attr, escape_text, serialize_document, serialize_node};
