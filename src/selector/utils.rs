//! Utility functions for selector pattern matching
//!
//! Attribute access that returns empty strings instead of `Option`, so rules
//! can be written as flat boolean expressions.

use crate::dom;
use dom_query::Selection;

// === Element Attribute Helpers ===

/// Get element ID attribute (empty string if missing)
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    dom::id(sel).unwrap_or_default()
}

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Combine id and class for single-pass substring checks
///
/// The two values are joined with a space so a hint cannot be formed across
/// the boundary.
#[inline]
#[must_use]
pub fn id_class(sel: &Selection) -> String {
    format!("{} {}", id(sel), class(sel))
}

/// Whether any whitespace-separated class token equals one of `tokens`
/// (case-insensitive).
#[must_use]
pub fn has_class_token(sel: &Selection, tokens: &[&str]) -> bool {
    class(sel)
        .split_whitespace()
        .any(|token| tokens.iter().any(|t| token.eq_ignore_ascii_case(t)))
}

// === Element Type Checks ===

/// Check if element has a specific tag name
#[inline]
#[must_use]
pub fn is_tag(sel: &Selection, expected: &str) -> bool {
    tag(sel) == expected
}

/// Check if element is one of the specified tags
///
/// # Example
///
/// ```rust
/// use pagelift::selector::utils;
/// use pagelift::dom;
///
/// let doc = dom::parse("<section>content</section>");
/// let section = doc.select("section");
///
/// assert!(utils::is_one_of_tags(&section, &["div", "section"]));
/// assert!(!utils::is_one_of_tags(&section, &["dl", "details"]));
/// ```
#[inline]
#[must_use]
pub fn is_one_of_tags(sel: &Selection, tags: &[&str]) -> bool {
    let t = tag(sel);
    tags.contains(&t.as_str())
}

/// Check if element is a `div` or `section`, the containers FAQ and content
/// rules look at.
#[inline]
#[must_use]
pub fn is_container(sel: &Selection) -> bool {
    is_one_of_tags(sel, &["div", "section"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_id_returns_value_or_empty() {
        let doc = dom::parse(r#"<div id="main">text</div>"#);
        assert_eq!(id(&doc.select("div")), "main");

        let doc2 = dom::parse("<div>no id</div>");
        assert_eq!(id(&doc2.select("div")), "");
    }

    #[test]
    fn test_class_returns_value_or_empty() {
        let doc = dom::parse(r#"<div class="content main">text</div>"#);
        assert_eq!(class(&doc.select("div")), "content main");

        let doc2 = dom::parse("<div>no class</div>");
        assert_eq!(class(&doc2.select("div")), "");
    }

    #[test]
    fn test_tag_returns_lowercase_tag_name() {
        let doc = dom::parse("<ARTICLE>content</ARTICLE>");
        assert_eq!(tag(&doc.select("article")), "article");
    }

    #[test]
    fn test_id_class_combines_both_attributes() {
        let doc = dom::parse(r#"<div id="main" class="content">test</div>"#);
        assert_eq!(id_class(&doc.select("div")), "main content");
    }

    #[test]
    fn test_has_class_token_is_exact_per_token() {
        let doc = dom::parse(r#"<div class="Toggle open">x</div><div class="toggle-content">y</div>"#);
        let divs = dom::element_children(&doc.select("body"));
        let (first, last) = (&divs[0], &divs[1]);

        assert!(has_class_token(first, &["toggle"]));
        assert!(!has_class_token(last, &["toggle"]));
        assert!(has_class_token(last, &["toggle-content"]));
    }

    #[test]
    fn test_is_one_of_tags() {
        let doc = dom::parse("<article>content</article>");
        let article = doc.select("article");

        assert!(is_tag(&article, "article"));
        assert!(is_one_of_tags(&article, &["article", "div", "section"]));
        assert!(!is_one_of_tags(&article, &[]));
        assert!(!is_container(&article));
    }
}
