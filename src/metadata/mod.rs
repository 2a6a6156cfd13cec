//! Metadata extraction module.
//!
//! Title, description and keywords are read from the raw document,
//! independently of any sanitization. Absence of a tag is a normal case and
//! yields the default value.

pub mod meta_tags;

use dom_query::{Document, Selection};

use crate::dom;
use crate::result::ExtractedMetadata;
use crate::Options;

pub use meta_tags::{first_meta_content, meta_content, MetaKey, DESCRIPTION_SOURCES, KEYWORD_SOURCES};

/// Extract title, description and keywords from raw HTML.
///
/// # Example
///
/// ```rust
/// use pagelift::{metadata, Options};
///
/// let meta = metadata::extract_metadata("<title> Foo Bar </title>", &Options::default());
/// assert_eq!(meta.title, "Foo Bar");
/// assert_eq!(meta.description, "");
/// ```
#[must_use]
pub fn extract_metadata(html: &str, opts: &Options) -> ExtractedMetadata {
    let doc = dom::parse(html);

    ExtractedMetadata {
        title: examine_title_element(&doc).unwrap_or_else(|| opts.default_title.clone()),
        description: first_meta_content(&doc, DESCRIPTION_SOURCES).unwrap_or_default(),
        keywords: first_meta_content(&doc, KEYWORD_SOURCES).unwrap_or_default(),
    }
}

/// Trimmed text of the first `<title>`.
///
/// The document title in `<head>` is preferred over `<title>` elements that
/// appear later, such as inline SVG titles.
#[must_use]
pub fn examine_title_element(doc: &Document) -> Option<String> {
    let head_title = doc.select("head title");
    let title = if head_title.exists() {
        head_title
    } else {
        doc.select("title")
    };

    let title = Selection::from(*title.nodes().first()?);
    let text = dom::text_content(&title).trim().to_string();
    (!text.is_empty()).then_some(text)
}
