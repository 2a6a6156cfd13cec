//! FAQ detection.
//!
//! Detection runs over the raw document in two phases: [`container`] finds
//! the region holding the questions, then [`pairs`] turns it into
//! question/answer items. [`excise`] later cuts the same region out of the
//! main content.

pub mod container;
pub mod excise;
pub mod pairs;
pub mod text;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::dom;
use crate::result::FaqResult;
use crate::Options;

pub use container::{find_container, ContainerStrategy};
pub use excise::excise_faq;
pub use pairs::{extract_pairs, PairPattern};

/// A FAQ found in the raw page, with the strategy that located its
/// container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqDetection {
    pub strategy: ContainerStrategy,
    pub result: FaqResult,
}

/// Detect FAQ pairs in raw HTML.
///
/// Returns `None` when no container was found or no pattern produced a valid
/// pair.
///
/// # Example
///
/// ```rust
/// use pagelift::{faq, Options};
/// use pagelift::diagnostics::NoopDiagnostics;
///
/// let html = r#"<div class="faq"><h3>Is it free?</h3><p>Yes, for personal use.</p></div>"#;
/// let found = faq::detect_faq(html, &Options::default(), &mut NoopDiagnostics).unwrap();
/// assert_eq!(found.strategy, faq::ContainerStrategy::ClassToken);
/// assert_eq!(found.result.items[0].question, "Is it free?");
/// ```
pub fn detect_faq(raw: &str, opts: &Options, diagnostics: &mut dyn Diagnostics) -> Option<FaqDetection> {
    let doc = dom::parse(raw);

    let Some((strategy, container)) = find_container(&doc.select("html")) else {
        diagnostics.emit(Diagnostic::FaqContainerMissing);
        return None;
    };
    diagnostics.emit(Diagnostic::FaqContainerFound { strategy });

    let items = extract_pairs(&container, opts, diagnostics);
    (!items.is_empty()).then(|| FaqDetection {
        strategy,
        result: FaqResult::from_items(items),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::FaqItem;

    const SHORT_QUESTION_FAQ: &str =
        r#"<div class="faq"><h3>Q1</h3><p>A1 text longer than ten chars</p></div>"#;

    #[test]
    fn short_question_with_relaxed_bounds() {
        let opts = Options {
            min_question_len: 2,
            ..Options::default()
        };
        let found = detect_faq(SHORT_QUESTION_FAQ, &opts, &mut Vec::new());

        assert_eq!(
            found,
            Some(FaqDetection {
                strategy: ContainerStrategy::ClassToken,
                result: FaqResult {
                    enabled: true,
                    items: vec![FaqItem::new("Q1", "A1 text longer than ten chars")],
                },
            })
        );
    }

    #[test]
    fn short_question_rejected_by_default() {
        let mut events: Vec<Diagnostic> = Vec::new();
        assert!(detect_faq(SHORT_QUESTION_FAQ, &Options::default(), &mut events).is_none());
        assert!(events.iter().any(|e| matches!(
            e,
            Diagnostic::FaqPairRejected {
                reason: crate::FaqRejection::QuestionLength { len: 2, .. },
                ..
            }
        )));
    }

    #[test]
    fn missing_container_is_reported() {
        let mut events: Vec<Diagnostic> = Vec::new();
        assert!(detect_faq("<article><p>No questions.</p></article>", &Options::default(), &mut events).is_none());
        assert_eq!(events, vec![Diagnostic::FaqContainerMissing]);
    }

    #[test]
    fn container_found_event() {
        let mut events: Vec<Diagnostic> = Vec::new();
        let html = "<section><h2>FAQ</h2><h3>Do you ship abroad?</h3><p>Yes, to most countries.</p></section>";
        let found = detect_faq(html, &Options::default(), &mut events).expect("faq");

        assert_eq!(found.strategy, ContainerStrategy::HeadingTitle);
        assert_eq!(found.result.items, vec![FaqItem::new("Do you ship abroad?", "Yes, to most countries.")]);
        assert_eq!(
            events.first(),
            Some(&Diagnostic::FaqContainerFound {
                strategy: ContainerStrategy::HeadingTitle
            })
        );
    }
}
