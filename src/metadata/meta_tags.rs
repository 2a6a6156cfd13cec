//! HTML Meta Tag Extraction
//!
//! Lookups over `<meta>` elements keyed by `name` or `property`. Attribute
//! order inside a tag does not matter once it is parsed, so a tag with
//! `content` before `name` is found the same way as the usual order.

use dom_query::{Document, Selection};

use crate::dom;

/// Attribute a meta tag is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    /// `<meta name="...">`
    Name(&'static str),
    /// `<meta property="...">`
    Property(&'static str),
}

impl MetaKey {
    fn matches(self, meta: &Selection) -> bool {
        let (attr, expected) = match self {
            Self::Name(v) => ("name", v),
            Self::Property(v) => ("property", v),
        };
        dom::get_attribute(meta, attr).is_some_and(|v| v.trim().eq_ignore_ascii_case(expected))
    }
}

/// Order in which keyword sources are consulted.
pub const KEYWORD_SOURCES: &[MetaKey] = &[MetaKey::Name("keywords"), MetaKey::Property("og:keywords")];

/// Order in which description sources are consulted.
pub const DESCRIPTION_SOURCES: &[MetaKey] = &[MetaKey::Name("description")];

/// Trimmed `content` of the first meta tag matching `key` whose content is
/// not blank.
#[must_use]
pub fn meta_content(doc: &Document, key: MetaKey) -> Option<String> {
    doc.select("meta")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|meta| key.matches(meta))
        .filter_map(|meta| dom::get_attribute(&meta, "content"))
        .map(|content| content.trim().to_string())
        .find(|content| !content.is_empty())
}

/// First non-empty value across `sources`, tried in order.
#[must_use]
pub fn first_meta_content(doc: &Document, sources: &[MetaKey]) -> Option<String> {
    sources.iter().find_map(|key| meta_content(doc, *key))
}
