//! Allow-list tree rewrite.

use agentview_dom::{Document, Element, MarkupNode};

use crate::policy::AllowPolicy;

/// Sanitize a document against an allow-list policy.
///
/// Depth-first rewrite of the whole tree:
///
/// - An allowed element is kept with its tag canonicalized to lowercase,
///   its attributes filtered to the tag's allowed set, and its children
///   sanitized recursively.
/// - A disallowed element is unwrapped: its sanitized children are spliced
///   into the parent at the element's former position, preserving sibling
///   order. The children are themselves sanitized, so nested disallowed
///   wrappers unwrap all the way down.
/// - Text nodes are never altered.
///
/// Total over any well-formed tree; each unwrap strictly reduces remaining
/// element depth, so the rewrite terminates in time linear in node and
/// attribute count. The returned document contains no element outside the
/// policy's tag set and no attribute outside the owning tag's allowed set.
#[must_use]
pub fn sanitize(doc: Document, policy: &AllowPolicy) -> Document {
    Document::new(sanitize_nodes(doc.nodes, policy))
}

/// Rewrite a sibling sequence, building a new owned vector.
fn sanitize_nodes(nodes: Vec<MarkupNode>, policy: &AllowPolicy) -> Vec<MarkupNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            MarkupNode::Text(text) => out.push(MarkupNode::Text(text)),
            MarkupNode::Element(element) => {
                let tag = element.tag.to_ascii_lowercase();
                if policy.allows_tag(&tag) {
                    out.push(MarkupNode::Element(sanitize_element(tag, element, policy)));
                } else {
                    // Unwrap: children take the element's place, in order.
                    out.extend(sanitize_nodes(element.children, policy));
                }
            }
        }
    }
    out
}

/// Rebuild an allowed element with filtered attributes and sanitized
/// children.
fn sanitize_element(tag: String, element: Element, policy: &AllowPolicy) -> Element {
    let attrs = element
        .attrs
        .into_iter()
        .map(|(name, value)| (name.to_ascii_lowercase(), value))
        .filter(|(name, _)| policy.allows_attribute(&tag, name))
        .collect();
    let children = sanitize_nodes(element.children, policy);
    Element {
        tag,
        attrs,
        children,
    }
}
