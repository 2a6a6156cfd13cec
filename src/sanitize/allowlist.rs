//! Attribute allowlist filter.
//!
//! The publishing pass: every element keeps only the attributes named for it
//! below, and subtrees that can execute code are removed.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::dom::{self, Selection};
use crate::patterns::{HTML_COMMENT, SERVER_CODE};

/// Elements removed with their whole subtree.
pub const TAGS_TO_REMOVE: &[&str] = &["script", "style", "noscript", "iframe", "form"];

/// Attributes allowed on every element.
pub static BASE_ALLOWED_ATTRIBUTES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "class", "style", "href", "src", "alt", "title", "target", "rel", "id", "name",
    ]
    .into_iter()
    .collect()
});

/// Additional attributes allowed per tag.
pub static TAG_ALLOWED_ATTRIBUTES: LazyLock<HashMap<&'static str, HashSet<&'static str>>> =
    LazyLock::new(|| {
        let anchor: HashSet<&'static str> = ["download"].into_iter().collect();
        let image: HashSet<&'static str> = ["width", "height", "loading", "sizes", "srcset"]
            .into_iter()
            .collect();
        let table: HashSet<&'static str> = ["colspan", "rowspan", "scope", "headers", "align", "valign"]
            .into_iter()
            .collect();

        let mut map = HashMap::new();
        map.insert("a", anchor);
        map.insert("img", image);
        for tag in ["table", "tr", "td", "th", "thead", "tbody", "tfoot"] {
            map.insert(tag, table.clone());
        }
        map
    });

/// Attribute name prefixes dropped regardless of the allowlist.
const FORBIDDEN_PREFIXES: &[&str] = &["on", "data-", "aria-"];

/// Attributes holding URLs whose scheme is checked.
const URL_ATTRIBUTES: &[&str] = &["href", "src", "srcset"];

/// URL schemes that execute script when followed or loaded.
const DANGEROUS_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:text/html"];

/// Re-sanitize content for publishing.
///
/// Strips dangerous subtrees ([`TAGS_TO_REMOVE`]), comments and embedded
/// server-code blocks, then keeps only allowlisted attributes on every
/// remaining element. Quote characters in kept values are escaped by the
/// serializer. Returns the serialized `<body>` contents.
///
/// # Example
///
/// ```rust
/// use pagelift::sanitize::allowlist;
///
/// let out = allowlist::filter(r#"<a href="x" onclick="alert(1)" data-foo="bar">t</a>"#);
/// assert_eq!(out, r#"<a href="x">t</a>"#);
/// ```
#[must_use]
pub fn filter(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let without_code = SERVER_CODE.replace_all(html, "");
    let without_comments = HTML_COMMENT.replace_all(&without_code, "");
    let doc = dom::parse(&without_comments);

    doc.select(&TAGS_TO_REMOVE.join(", ")).remove();

    for node in doc.select("body *").nodes() {
        let sel = Selection::from(*node);
        let tag = dom::tag_name(&sel).unwrap_or_default();

        for (name, value) in dom::get_all_attributes(&sel) {
            if !is_allowed(&tag, &name, &value) {
                dom::remove_attribute(&sel, &name);
            }
        }
    }

    dom::body_html(&doc)
}

/// Whether an attribute survives the publishing pass on `tag`.
#[must_use]
pub fn is_allowed(tag: &str, name: &str, value: &str) -> bool {
    let name = name.to_ascii_lowercase();

    if FORBIDDEN_PREFIXES.iter().any(|prefix| name.starts_with(prefix)) || value.is_empty() {
        return false;
    }

    let listed = BASE_ALLOWED_ATTRIBUTES.contains(name.as_str())
        || TAG_ALLOWED_ATTRIBUTES
            .get(tag)
            .is_some_and(|extra| extra.contains(name.as_str()));

    if !listed {
        return false;
    }

    !(URL_ATTRIBUTES.contains(&name.as_str()) && has_dangerous_scheme(&name, value))
}

/// Whether a URL-holding attribute value would execute script.
///
/// Browsers ignore embedded whitespace and control characters in schemes,
/// so those are dropped before comparing.
fn has_dangerous_scheme(name: &str, value: &str) -> bool {
    let candidates: Vec<&str> = if name == "srcset" {
        value.split(',').collect()
    } else {
        vec![value]
    };

    candidates.into_iter().any(|candidate| {
        let compact = candidate
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .collect::<String>()
            .to_ascii_lowercase();
        DANGEROUS_SCHEMES
            .iter()
            .any(|scheme| compact.starts_with(scheme))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_handlers_and_data_attributes() {
        let out = filter(r#"<a href="x" onclick="alert(1)" data-foo="bar">t</a>"#);
        assert_eq!(out, r#"<a href="x">t</a>"#);
    }

    #[test]
    fn keeps_editorial_attributes() {
        let out = filter(r#"<p class="lead" style="color:red" id="p1" aria-label="x" tabindex="1">text</p>"#);
        assert_eq!(out, r#"<p class="lead" style="color:red" id="p1">text</p>"#);
    }

    #[test]
    fn image_attributes() {
        let out = filter(
            r#"<img src="a.png" width="10" height="20" loading="lazy" srcset="a.png 1x" sizes="10px"><div width="10">x</div>"#,
        );
        assert_eq!(
            out,
            r#"<img src="a.png" width="10" height="20" loading="lazy" srcset="a.png 1x" sizes="10px"><div>x</div>"#
        );
    }

    #[test]
    fn table_attributes() {
        let out = filter(
            r#"<table align="center"><tbody><tr valign="top"><td colspan="2" rowspan="1" bgcolor="red">c</td></tr></tbody></table>"#,
        );
        assert_eq!(
            out,
            r#"<table align="center"><tbody><tr valign="top"><td colspan="2" rowspan="1">c</td></tr></tbody></table>"#
        );
    }

    #[test]
    fn anchor_download_only_on_anchors() {
        let out = filter(
            r#"<a href="/f.pdf" download="f.pdf" target="_blank" rel="noopener">f</a><span download="x">s</span>"#,
        );
        assert_eq!(
            out,
            r#"<a href="/f.pdf" download="f.pdf" target="_blank" rel="noopener">f</a><span>s</span>"#
        );
    }

    #[test]
    fn quotes_in_values_are_escaped() {
        let out = filter(r#"<p title='say "hi"'>q</p>"#);
        assert_eq!(out, r#"<p title="say &quot;hi&quot;">q</p>"#);
    }

    #[test]
    fn removes_dangerous_elements_and_code() {
        let out = filter(
            "<p>a</p><script>evil()</script><style>p{}</style><iframe src=\"x\"></iframe><form><input></form><noscript>n</noscript><?php echo 1; ?><!-- c --><p>b</p>",
        );
        assert_eq!(out, "<p>a</p><p>b</p>");
    }

    #[test]
    fn drops_script_urls() {
        let out = filter(
            r#"<a href="java&#9;script:alert(1)">x</a><a href=" JavaScript:alert(1)">y</a><img src="data:text/html;base64,AAAA"><a href="https://ok">z</a>"#,
        );
        assert_eq!(out, r#"<a>x</a><a>y</a><img><a href="https://ok">z</a>"#);
    }

    #[test]
    fn drops_empty_values() {
        assert_eq!(filter(r#"<p class="">x</p>"#), "<p>x</p>");
    }

    #[test]
    fn empty_input() {
        assert_eq!(filter(""), "");
    }

    #[test]
    fn attribute_rules() {
        assert!(is_allowed("a", "href", "/x"));
        assert!(is_allowed("td", "colspan", "2"));
        assert!(!is_allowed("p", "colspan", "2"));
        assert!(!is_allowed("p", "onload", "x"));
        assert!(!is_allowed("p", "ONCLICK", "x"));
        assert!(!is_allowed("p", "data-id", "1"));
        assert!(!is_allowed("p", "aria-hidden", "true"));
        assert!(!is_allowed("img", "src", "javascript:alert(1)"));
        assert!(is_allowed("img", "src", "data:image/png;base64,AAAA"));
        assert!(!is_allowed("img", "srcset", "a.png 1x, javascript:x 2x"));
    }
}
