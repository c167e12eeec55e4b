//! Allow-list markup sanitization.
//!
//! [`sanitize`] rewrites a parsed [`Document`](agentview_dom::Document)
//! so it contains only elements and attributes an [`AllowPolicy`] permits.
//! Everything is rejected by default: an element kind must be explicitly
//! allow-listed to survive, and an allowed element keeps only the
//! attributes allow-listed for its tag.
//!
//! Disallowed elements are unwrapped, not deleted: their children take the
//! element's place in the parent, so no text content is ever lost to
//! sanitization.

mod policy;
mod sanitizer;

pub use policy::AllowPolicy;
pub use sanitizer::sanitize;
