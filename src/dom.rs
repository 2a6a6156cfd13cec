//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. Every stage that needs tree
//! structure parses its input string here, queries or edits the tree, and
//! serializes back to a string before returning.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

/// Elements that never have content or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Heading elements in rank order.
pub const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

// === Parsing and Serialization ===

/// Parse an HTML string into a document.
///
/// The parser is error-tolerant: any input, including fragments and
/// malformed markup, yields a tree with `html`, `head` and `body`.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Serialized contents of the document's `<body>`.
#[must_use]
pub fn body_html(doc: &Document) -> String {
    doc.select("body").inner_html().to_string()
}

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get all attributes as key-value pairs, in source order.
///
/// Returns empty vector if node has no attributes or if selection is empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Check if element is a void element (self-closing)
#[must_use]
pub fn is_void_element(sel: &Selection) -> bool {
    tag_name(sel).is_some_and(|t| VOID_ELEMENTS.contains(&t.as_str()))
}

/// Check if element is one of `h1`..`h6`
#[must_use]
pub fn is_heading(sel: &Selection) -> bool {
    tag_name(sel).is_some_and(|t| HEADINGS.contains(&t.as_str()))
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Markup of a single node: outer HTML for elements, escaped text for text
/// nodes, nothing for comments and other node kinds.
#[must_use]
pub fn node_markup(node: &NodeRef) -> String {
    if node.is_element() {
        Selection::from(*node).html().to_string()
    } else if node.is_text() {
        escape_text(&node.text())
    } else {
        String::new()
    }
}

/// Escape `&`, `<` and `>` the way the serializer does for text content.
#[must_use]
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// === Tree Navigation ===

/// Get direct element children
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

/// Direct element children as individual selections, in document order.
#[must_use]
pub fn element_children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.children()
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Get next element sibling (skipping text nodes)
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// Sibling nodes after the selection, text nodes included, walked lazily.
pub fn following_nodes<'a>(sel: &Selection<'a>) -> impl Iterator<Item = NodeRef<'a>> {
    let first = sel.nodes().first().and_then(NodeRef::next_sibling);
    std::iter::successors(first, NodeRef::next_sibling)
}

/// All child nodes of the selection, text nodes included.
#[must_use]
pub fn child_nodes<'a>(sel: &Selection<'a>) -> Vec<NodeRef<'a>> {
    let mut nodes = Vec::new();
    if let Some(node) = sel.nodes().first() {
        let mut child = node.first_child();
        while let Some(c) = child {
            child = c.next_sibling();
            nodes.push(c);
        }
    }
    nodes
}

// === Tree Manipulation ===

/// Remove elements from tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}
