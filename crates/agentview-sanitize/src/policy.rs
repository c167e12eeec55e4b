//! Sanitization allow-list policy.

use std::collections::{HashMap, HashSet};

/// Tags allowed by the default policy.
const DEFAULT_TAGS: &[&str] = &[
    "p", "div", "span", "h1", "h2", "h3", "h4", "h5", "h6", "strong", "b", "em", "i", "u", "br",
    "hr", "ul", "ol", "li", "blockquote", "code", "pre", "a",
];

/// Allow-list sanitization policy: which tags survive, and which attributes
/// each tag keeps.
///
/// Immutable once built and safe to share by reference across concurrent
/// render calls. Tag and attribute names are stored lowercase; all lookups
/// compare case-insensitively. A tag with no attribute entry keeps no
/// attributes at all.
///
/// An attribute entry for a tag that is not allow-listed is legal and has
/// no effect until a policy also allows the tag — attribute policies may be
/// staged ahead of tag allow-listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "AllowPolicyData")
)]
pub struct AllowPolicy {
    allowed_tags: HashSet<String>,
    allowed_attributes: HashMap<String, HashSet<String>>,
}

impl AllowPolicy {
    /// Create a policy allowing the given tags and no attributes.
    #[must_use]
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed_tags: tags
                .into_iter()
                .map(|tag| tag.as_ref().to_ascii_lowercase())
                .collect(),
            allowed_attributes: HashMap::new(),
        }
    }

    /// The default policy for agent-produced content.
    ///
    /// Allows common block and inline containers, headings, emphasis, line
    /// breaks, rules, lists, blockquotes, code, and anchors. Anchors keep
    /// `href` and `title`. An `img` attribute entry (`src`, `alt`, `title`,
    /// `width`, `height`) is carried but inert: `img` is not in the tag set.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(DEFAULT_TAGS)
            .with_attributes("a", ["href", "title"])
            .with_attributes("img", ["src", "alt", "title", "width", "height"])
    }

    /// Allow the given attributes on a tag, replacing any previous entry.
    #[must_use]
    pub fn with_attributes<I, S>(mut self, tag: &str, attrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_attributes.insert(
            tag.to_ascii_lowercase(),
            attrs
                .into_iter()
                .map(|attr| attr.as_ref().to_ascii_lowercase())
                .collect(),
        );
        self
    }

    /// Additionally allow a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.allowed_tags.insert(tag.to_ascii_lowercase());
        self
    }

    /// Whether elements with this tag survive sanitization.
    #[must_use]
    pub fn allows_tag(&self, tag: &str) -> bool {
        self.allowed_tags.contains(&tag.to_ascii_lowercase())
    }

    /// Whether this attribute survives on an element with this tag.
    #[must_use]
    pub fn allows_attribute(&self, tag: &str, attr: &str) -> bool {
        self.allowed_attributes
            .get(&tag.to_ascii_lowercase())
            .is_some_and(|attrs| attrs.contains(&attr.to_ascii_lowercase()))
    }
}

/// Raw policy shape for deserialization; canonicalized on conversion.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct AllowPolicyData {
    #[serde(default)]
    allowed_tags: Vec<String>,
    #[serde(default)]
    allowed_attributes: HashMap<String, Vec<String>>,
}

#[cfg(feature = "serde")]
impl From<AllowPolicyData> for AllowPolicy {
    fn from(data: AllowPolicyData) -> Self {
        let mut policy = Self::new(data.allowed_tags);
        for (tag, attrs) in data.allowed_attributes {
            policy = policy.with_attributes(&tag, attrs);
        }
        policy
    }
}
