//! FAQ container search (phase A).
//!
//! Strategies are tried in order; within a strategy the first element in
//! document order wins, so an outer container is preferred over one nested
//! inside it.

use serde::Serialize;

use crate::dom::{self, Selection};
use crate::patterns::{is_faq_title, FAQ_CLASS_HINT, FAQ_WIDGET_HINT};
use crate::selector::{self, utils, Rule};

/// Container detection strategies, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerStrategy {
    /// `div`/`section` with a direct heading child titled "FAQ" or similar.
    HeadingTitle,
    /// `div`/`section` with a FAQ-like class.
    ClassToken,
    /// Element whose children are all `<details>` with a `<summary>`.
    DetailsGroup,
    /// `div`/`section` with a FAQ or toggle widget class or id.
    ClassOrId,
    /// `div`/`section` with repeated `h3`/`h4` plus content groups.
    HeadingGroups,
}

impl ContainerStrategy {
    pub const ORDER: [Self; 5] = [
        Self::HeadingTitle,
        Self::ClassToken,
        Self::DetailsGroup,
        Self::ClassOrId,
        Self::HeadingGroups,
    ];

    pub(crate) fn rule(self) -> Rule {
        match self {
            Self::HeadingTitle => has_faq_heading,
            Self::ClassToken => has_faq_class,
            Self::DetailsGroup => is_details_group,
            Self::ClassOrId => has_widget_class_or_id,
            Self::HeadingGroups => has_heading_groups,
        }
    }
}

/// Smallest number of `<details>` children or heading groups that make a
/// container.
const MIN_GROUPS: usize = 2;

/// Headings that open a question group.
const GROUP_HEADINGS: &[&str] = &["h3", "h4"];

fn has_faq_heading(sel: &Selection) -> bool {
    utils::is_container(sel)
        && dom::element_children(sel)
            .iter()
            .any(|child| dom::is_heading(child) && is_faq_title(&dom::text_content(child)))
}

fn has_faq_class(sel: &Selection) -> bool {
    utils::is_container(sel) && FAQ_CLASS_HINT.is_match(&utils::class(sel))
}

fn is_details_group(sel: &Selection) -> bool {
    // Taking the whole body as the container would excise the entire page.
    if utils::is_one_of_tags(sel, &["html", "body"]) {
        return false;
    }

    let children = dom::element_children(sel);
    children.len() >= MIN_GROUPS
        && children.iter().all(|child| {
            utils::is_tag(child, "details")
                && dom::element_children(child)
                    .iter()
                    .any(|c| utils::is_tag(c, "summary"))
        })
}

fn has_widget_class_or_id(sel: &Selection) -> bool {
    utils::is_container(sel) && FAQ_WIDGET_HINT.is_match(&utils::id_class(sel))
}

fn has_heading_groups(sel: &Selection) -> bool {
    if !utils::is_container(sel) {
        return false;
    }

    let groups = dom::element_children(sel)
        .iter()
        .filter(|child| utils::is_one_of_tags(child, GROUP_HEADINGS))
        .filter(|heading| dom::next_element_sibling(heading).is_some_and(|next| !dom::is_heading(&next)))
        .count();

    groups >= MIN_GROUPS
}

/// Find the FAQ container under `root`.
///
/// Pass `doc.select("html")` to search a whole document.
///
/// # Example
///
/// ```rust
/// use pagelift::dom;
/// use pagelift::faq::container::{find_container, ContainerStrategy};
///
/// let doc = dom::parse(r#"<div class="faq"><h3>Q1</h3><p>A1 text</p></div>"#);
/// let (strategy, _) = find_container(&doc.select("html")).unwrap();
/// assert_eq!(strategy, ContainerStrategy::ClassToken);
/// ```
#[must_use]
pub fn find_container<'a>(root: &Selection<'a>) -> Option<(ContainerStrategy, Selection<'a>)> {
    ContainerStrategy::ORDER
        .into_iter()
        .find_map(|strategy| selector::query(root, strategy.rule()).map(|found| (strategy, found)))
}
