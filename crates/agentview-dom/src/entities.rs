//! Escaped-markup recovery.
//!
//! Some producers entity-escape the HTML they emit, so `<p>` arrives as
//! `&lt;p&gt;`. [`unescape_markup`] reverses the common escapes before
//! parsing so such content still renders structurally.

/// Escape sequences reversed before parsing, applied in order.
const MARKUP_ESCAPES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&#x27;", "'"),
    ("&#39;", "'"),
];

/// Reverse entity escaping on markup text.
///
/// Only the six escapes producers commonly apply are reversed; all other
/// entities are left for the parser to resolve.
#[must_use]
pub fn unescape_markup(text: &str) -> String {
    let mut result = text.to_owned();
    for (escape, replacement) in MARKUP_ESCAPES {
        if result.contains(escape) {
            result = result.replace(escape, replacement);
        }
    }
    result
}
