//! Question/answer pair extraction (phase B).
//!
//! Each pattern turns the container into candidate pairs of HTML fragments.
//! Patterns are tried in order and the first one that yields a valid pair
//! supplies every item; results of different patterns are never merged.

use serde::Serialize;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::dom::{self, NodeRef, Selection};
use crate::error::FaqRejection;
use crate::patterns::{
    is_faq_title, ACCORDION_CONTENT_CLASSES, ACCORDION_TRIGGER_CLASSES, ANSWER_CLASS, QUESTION_CLASS,
};
use crate::result::FaqItem;
use crate::selector::{self, utils};
use crate::Options;

use super::text::{clean_fragment, validate_pair, Deduplicator};

/// Pair extraction patterns, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairPattern {
    /// `h2`..`h6` followed by sibling content up to the next heading.
    HeadingContent,
    /// `<details>` with its `<summary>`.
    DetailsSummary,
    /// `<dt>` with the `<dd>` run after it.
    DefinitionList,
    /// Question/title class followed by an answer/content class sibling.
    QuestionAnswerClass,
    /// Accordion trigger followed by its panel.
    AccordionPlugin,
}

impl PairPattern {
    pub const ORDER: [Self; 5] = [
        Self::HeadingContent,
        Self::DetailsSummary,
        Self::DefinitionList,
        Self::QuestionAnswerClass,
        Self::AccordionPlugin,
    ];

    /// Candidate `(question, answer)` HTML fragments found in `container`.
    ///
    /// A candidate whose markup has the wrong shape is an `Err` and is
    /// skipped on its own.
    #[must_use]
    pub fn candidates(self, container: &Selection) -> Vec<Candidate> {
        match self {
            Self::HeadingContent => heading_content(container),
            Self::DetailsSummary => details_summary(container),
            Self::DefinitionList => definition_list(container),
            Self::QuestionAnswerClass => question_answer_class(container),
            Self::AccordionPlugin => accordion_plugin(container),
        }
    }
}

/// Question and answer HTML, before cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPair {
    pub question: String,
    pub answer: String,
}

pub type Candidate = Result<RawPair, FaqRejection>;

const PAIR_HEADINGS: &str = "h2, h3, h4, h5, h6";
const ANY_HEADING: &str = "h1, h2, h3, h4, h5, h6";

fn elements<'a>(container: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    container
        .select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

fn markup_of(nodes: &[NodeRef]) -> String {
    nodes.iter().map(dom::node_markup).collect()
}

/// Whether a sibling ends a heading's answer: a heading, or an element that
/// holds one.
fn ends_answer(node: &NodeRef) -> bool {
    if !node.is_element() {
        return false;
    }
    let sel = Selection::from(*node);
    dom::is_heading(&sel) || sel.select(ANY_HEADING).exists()
}

fn heading_content(container: &Selection) -> Vec<Candidate> {
    elements(container, PAIR_HEADINGS)
        .into_iter()
        .filter(|heading| !is_faq_title(&dom::text_content(heading)))
        .map(|heading| {
            let answer: Vec<NodeRef> = dom::following_nodes(&heading)
                .take_while(|node| !ends_answer(node))
                .collect();

            Ok(RawPair {
                question: dom::inner_html(&heading).to_string(),
                answer: markup_of(&answer),
            })
        })
        .collect()
}

fn details_summary(container: &Selection) -> Vec<Candidate> {
    elements(container, "details")
        .into_iter()
        .map(|details| {
            let nodes = dom::child_nodes(&details);
            let summary_at = nodes
                .iter()
                .position(|node| node.node_name().is_some_and(|name| &*name == "summary"))
                .ok_or(FaqRejection::Malformed("details without summary"))?;

            let question = dom::inner_html(&Selection::from(nodes[summary_at])).to_string();
            let answer: String = nodes
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != summary_at)
                .map(|(_, node)| dom::node_markup(node))
                .collect();

            Ok(RawPair { question, answer })
        })
        .collect()
}

fn definition_list(container: &Selection) -> Vec<Candidate> {
    elements(container, "dt")
        .into_iter()
        .map(|term| {
            let mut definitions = Vec::new();
            let mut next = dom::next_element_sibling(&term);
            while let Some(sibling) = next {
                if !utils::is_tag(&sibling, "dd") {
                    break;
                }
                definitions.push(dom::inner_html(&sibling).to_string());
                next = dom::next_element_sibling(&sibling);
            }

            if definitions.is_empty() {
                return Err(FaqRejection::Malformed("dt without dd"));
            }

            Ok(RawPair {
                question: dom::inner_html(&term).to_string(),
                answer: definitions.join(" "),
            })
        })
        .collect()
}

fn is_question(sel: &Selection) -> bool {
    QUESTION_CLASS.is_match(&utils::class(sel))
}

fn is_accordion_trigger(sel: &Selection) -> bool {
    utils::has_class_token(sel, ACCORDION_TRIGGER_CLASSES)
}

fn question_answer_class(container: &Selection) -> Vec<Candidate> {
    selector::query_all(container, is_question)
        .into_iter()
        .filter_map(|question| {
            let answer = dom::next_element_sibling(&question)
                .filter(|sibling| ANSWER_CLASS.is_match(&utils::class(sibling)))?;

            Some(Ok(RawPair {
                question: dom::inner_html(&question).to_string(),
                answer: dom::inner_html(&answer).to_string(),
            }))
        })
        .collect()
}

fn accordion_plugin(container: &Selection) -> Vec<Candidate> {
    selector::query_all(container, is_accordion_trigger)
        .into_iter()
        .map(|trigger| {
            let panel = dom::next_element_sibling(&trigger)
                .filter(|sibling| utils::has_class_token(sibling, ACCORDION_CONTENT_CLASSES))
                .ok_or(FaqRejection::Malformed("accordion trigger without panel"))?;

            Ok(RawPair {
                question: dom::inner_html(&trigger).to_string(),
                answer: dom::inner_html(&panel).to_string(),
            })
        })
        .collect()
}

/// Extract validated, de-duplicated pairs from `container`.
///
/// Returns an empty list when no pattern produced a valid pair.
pub fn extract_pairs(container: &Selection, opts: &Options, diagnostics: &mut dyn Diagnostics) -> Vec<FaqItem> {
    for pattern in PairPattern::ORDER {
        let candidates = pattern.candidates(container);
        let total = candidates.len();
        let mut dedup = Deduplicator::new(opts.fingerprint_len);
        let mut items = Vec::new();

        for candidate in candidates {
            let accepted = candidate.and_then(|raw| {
                let item = validate_pair(clean_fragment(&raw.question), clean_fragment(&raw.answer), opts)?;
                dedup.admit(item)
            });

            match accepted {
                Ok(item) => items.push(item),
                Err(reason) => diagnostics.emit(Diagnostic::FaqPairRejected { pattern, reason }),
            }
        }

        diagnostics.emit(Diagnostic::FaqPatternTried {
            pattern,
            candidates: total,
            accepted: items.len(),
        });

        if !items.is_empty() {
            return items;
        }
    }

    Vec::new()
}
