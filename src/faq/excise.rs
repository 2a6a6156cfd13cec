//! FAQ excision.
//!
//! Pairs are found in the raw document, but they have to be cut out of the
//! located content region, which is a different string. The container search
//! is therefore run again over the content, starting with the strategy that
//! found the FAQ in the raw page.
//!
//! The structural pass strips `class` and `id`, so a rule that matched in the
//! raw page may match a different element in the content, or nothing. A
//! candidate is only removed when its text holds every detected pair and
//! little else. When no strategy yields such a candidate, the smallest
//! element holding all the pairs is tried instead.

use std::iter;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::dom::{self, Selection};
use crate::result::FaqItem;
use crate::selector;

use super::container::ContainerStrategy;
use super::FaqDetection;

/// Text of the detected pairs with all whitespace removed.
///
/// Pair text comes from tag-stripped fragments while element text comes from
/// the tree, and the two only disagree on whitespace.
struct PairText {
    fragments: Vec<String>,
    len: usize,
}

fn squeeze(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

impl PairText {
    fn new(items: &[FaqItem]) -> Self {
        let fragments: Vec<String> = items
            .iter()
            .flat_map(|item| [squeeze(&item.question), squeeze(&item.answer)])
            .filter(|fragment| !fragment.is_empty())
            .collect();
        let len = fragments.iter().map(|f| f.chars().count()).sum();
        Self { fragments, len }
    }

    fn held_by(&self, sel: &Selection) -> bool {
        let text = squeeze(&dom::text_content(sel));
        self.fragments.iter().all(|fragment| text.contains(fragment.as_str()))
    }

    /// Holds every pair, and its other text is no longer than the pairs.
    fn is_removable(&self, sel: &Selection) -> bool {
        if !self.held_by(sel) {
            return false;
        }
        let other = squeeze(&dom::text_content(sel)).chars().count().saturating_sub(self.len);
        other <= self.len
    }
}

/// Innermost element below `body` whose text holds every pair.
fn smallest_holder<'a>(root: &Selection<'a>, pairs: &PairText) -> Option<Selection<'a>> {
    let mut current = root.select("body");
    if !pairs.held_by(&current) {
        return None;
    }

    let mut below_body = false;
    while let Some(child) = dom::element_children(&current)
        .into_iter()
        .find(|child| pairs.held_by(child))
    {
        current = child;
        below_body = true;
    }
    below_body.then_some(current)
}

fn find_target<'a>(root: &Selection<'a>, detected: ContainerStrategy, pairs: &PairText) -> Option<Selection<'a>> {
    iter::once(detected)
        .chain(ContainerStrategy::ORDER.into_iter().filter(|s| *s != detected))
        .flat_map(|strategy| selector::query_all(root, strategy.rule()))
        .find(|candidate| pairs.is_removable(candidate))
        .or_else(|| smallest_holder(root, pairs).filter(|holder| pairs.is_removable(holder)))
}

/// Remove the detected FAQ container from `content`.
///
/// When no element in the content holds the detected pairs (the container may
/// only have existed outside the located region) the content is returned
/// unchanged.
pub fn excise_faq(content: &str, faq: &FaqDetection, diagnostics: &mut dyn Diagnostics) -> String {
    if !faq.result.enabled {
        return content.to_string();
    }

    let pairs = PairText::new(&faq.result.items);
    if pairs.fragments.is_empty() {
        return content.to_string();
    }

    let doc = dom::parse(content);
    let removed = match find_target(&doc.select("html"), faq.strategy, &pairs) {
        Some(container) => {
            dom::remove(&container);
            true
        }
        None => false,
    };
    diagnostics.emit(Diagnostic::FaqExcision { removed });

    if removed {
        dom::body_html(&doc)
    } else {
        content.to_string()
    }
}
