//! Rule-based element search.
//!
//! Rules are plain predicate functions over a `Selection`. The locator and the
//! FAQ container search are both expressed as ordered lists of rules, where
//! the first element (in document order) satisfying a rule wins.

use dom_query::Selection;

pub mod utils;

/// Predicate over a single element.
pub type Rule = fn(&Selection) -> bool;

/// Descendants of `root` in document order, outer elements before the
/// elements they contain.
fn descendants<'a>(root: &Selection<'a>) -> impl Iterator<Item = Selection<'a>> {
    root.select("*").nodes().to_vec().into_iter().map(Selection::from)
}

/// First descendant of `root` satisfying `rule`.
///
/// # Example
///
/// ```rust
/// use pagelift::selector::{self, utils};
/// use pagelift::dom;
///
/// let doc = dom::parse(r#"<div><section class="faq">Questions</section></div>"#);
///
/// fn is_faq_section(sel: &dom_query::Selection) -> bool {
///     utils::is_tag(sel, "section") && utils::class(sel).contains("faq")
/// }
///
/// let found = selector::query(&doc.select("html"), is_faq_section);
/// assert!(found.is_some());
/// ```
#[must_use]
pub fn query<'a>(root: &Selection<'a>, rule: Rule) -> Option<Selection<'a>> {
    descendants(root).find(|sel| rule(sel))
}

/// Every descendant of `root` satisfying `rule`, in document order.
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    descendants(root).filter(|sel| rule(sel)).collect()
}
