//! Structural sanitizer.
//!
//! Reduces a raw page to a skeleton of content elements so that the
//! main-content locator sees clean boundaries. The output is an intermediate
//! product and is never published.

use crate::dom::{self, Document, Selection};
use crate::patterns::HTML_COMMENT;

/// Elements removed with their whole subtree.
pub const TAGS_TO_REMOVE: &[&str] = &[
    "script", "style", "noscript", "svg", "iframe", "form", "select", "button", "nav", "footer",
    "header",
];

/// Attributes that survive this pass.
pub const KEPT_ATTRIBUTES: &[&str] = &["href", "src"];

/// Elements never pruned as empty.
const PRUNE_EXEMPT: &[&str] = &["html", "head", "body"];

/// Reduce a raw document to its structural skeleton.
///
/// Removes comments, non-content subtrees ([`TAGS_TO_REMOVE`]), empty
/// elements, and every attribute except `href` and `src`. Returns the
/// serialized document; empty input yields an empty string.
///
/// # Example
///
/// ```rust
/// use pagelift::sanitize::structural;
///
/// let out = structural::sanitize(r#"<nav>menu</nav><p class="x" href="/a">text</p><!-- note -->"#);
/// assert!(out.contains(r#"<p href="/a">text</p>"#));
/// assert!(!out.contains("menu"));
/// assert!(!out.contains("note"));
/// ```
#[must_use]
pub fn sanitize(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let without_comments = HTML_COMMENT.replace_all(html, "");
    let doc = dom::parse(&without_comments);

    doc.select(&TAGS_TO_REMOVE.join(", ")).remove();
    prune_empty_elements(&doc);

    for node in doc.select("*").nodes() {
        let sel = Selection::from(*node);
        for (name, _) in dom::get_all_attributes(&sel) {
            if !KEPT_ATTRIBUTES.contains(&name.as_str()) {
                dom::remove_attribute(&sel, &name);
            }
        }
    }

    doc.html().to_string()
}

/// Remove elements with no content and no `href`/`src`.
///
/// Processes in reverse document order (children before parents), so a
/// parent left empty by the removal of its children goes as well.
pub fn prune_empty_elements(doc: &Document) {
    let all_elements = doc.select("*").nodes().to_vec();

    for node in all_elements.into_iter().rev() {
        let sel = Selection::from(node);
        let tag = dom::tag_name(&sel).unwrap_or_default();

        if PRUNE_EXEMPT.contains(&tag.as_str()) || dom::is_void_element(&sel) {
            continue;
        }

        let has_children = dom::children(&sel).exists();
        let has_text = !dom::text_content(&sel).trim().is_empty();
        let has_reference = KEPT_ATTRIBUTES
            .iter()
            .any(|attr| dom::has_attribute(&sel, attr));

        if !has_children && !has_text && !has_reference {
            dom::remove(&sel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(serialized: &str) -> String {
        dom::body_html(&dom::parse(serialized))
    }

    #[test]
    fn removes_non_content_subtrees() {
        let html = r#"<html><head><style>p{}</style><script>x()</script></head><body>
            <header>HEADER</header><nav>NAV</nav>
            <p>Kept text</p>
            <form><input name="q"><button>Go</button></form>
            <select><option>one</option></select>
            <svg><circle/></svg><iframe src="x"></iframe><noscript>NS</noscript>
            <footer>FOOTER</footer>
        </body></html>"#;

        let out = sanitize(html);
        assert!(out.contains("Kept text"));
        for gone in [
            "HEADER", "NAV", "FOOTER", "NS", "<form", "<select", "<svg", "<iframe", "<script", "<style",
            "<button",
        ] {
            assert!(!out.contains(gone), "{gone} should be removed: {out}");
        }
    }

    #[test]
    fn keeps_only_href_and_src() {
        let out = sanitize(
            r#"<div id="a" class="b"><a href="/x" class="c" title="t">link</a><img src="i.png" alt="i"></div>"#,
        );
        assert_eq!(body_of(&out), r#"<div><a href="/x">link</a><img src="i.png"></div>"#);
    }

    #[test]
    fn prunes_empty_elements_bottom_up() {
        let out = sanitize(r#"<div><span></span><p>  </p></div><p>text</p><a href="/only"></a>"#);
        assert_eq!(body_of(&out), r#"<p>text</p><a href="/only"></a>"#);
    }

    #[test]
    fn keeps_void_elements() {
        let out = sanitize("<p>line<br>break</p><hr>");
        assert!(out.contains("<br>"));
        assert!(out.contains("<hr>"));
    }

    #[test]
    fn comments_removed() {
        let out = sanitize("<p>a<!-- hidden\nnote -->b</p>");
        assert_eq!(body_of(&out), "<p>ab</p>");
    }

    #[test]
    fn empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("  \n "), "");
    }
}
