//! Per-pair text cleanup, validation and de-duplication.

use std::collections::HashSet;

use crate::error::FaqRejection;
use crate::patterns::{BLOCK_CLOSE, CARRIAGE_RETURN, HTML_TAG, LINE_BREAK_TAG, WHITESPACE_NORMALIZE};
use crate::result::FaqItem;
use crate::Options;

/// Entities decoded after tag stripping. `&amp;` comes last so an escaped
/// entity such as `&amp;lt;` decodes once, to `&lt;`.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&amp;", "&"),
];

/// Reduce an HTML fragment to one line of plain text.
///
/// Block boundaries and `<br>` become whitespace so adjacent paragraphs do
/// not run together; all other tags are dropped without a gap.
///
/// # Example
///
/// ```rust
/// use pagelift::faq::text::clean_fragment;
///
/// assert_eq!(clean_fragment("<p>Fish &amp; chips</p><p>  daily</p>"), "Fish & chips daily");
/// ```
#[must_use]
pub fn clean_fragment(html: &str) -> String {
    let text = CARRIAGE_RETURN.replace_all(html, "\n");
    let text = BLOCK_CLOSE.replace_all(&text, "</${1}>\n");
    let text = LINE_BREAK_TAG.replace_all(&text, "\n");
    let text = HTML_TAG.replace_all(&text, "");

    let mut decoded = text.into_owned();
    for (entity, replacement) in ENTITIES {
        decoded = decoded.replace(entity, replacement);
    }

    WHITESPACE_NORMALIZE
        .replace_all(&decoded, " ")
        .trim()
        .to_string()
}

/// Check cleaned question and answer lengths (in characters).
///
/// # Errors
///
/// [`FaqRejection::QuestionLength`] or [`FaqRejection::AnswerLength`] when a
/// side falls outside the configured bounds. Pairs are never truncated.
pub fn validate_pair(question: String, answer: String, opts: &Options) -> Result<FaqItem, FaqRejection> {
    let question_len = question.chars().count();
    if !opts.question_bounds().contains(&question_len) {
        return Err(FaqRejection::QuestionLength {
            len: question_len,
            min: opts.min_question_len,
            max: opts.max_question_len,
        });
    }

    let answer_len = answer.chars().count();
    if !opts.answer_bounds().contains(&answer_len) {
        return Err(FaqRejection::AnswerLength {
            len: answer_len,
            min: opts.min_answer_len,
            max: opts.max_answer_len,
        });
    }

    Ok(FaqItem { question, answer })
}

/// Drops pairs whose fingerprint was already seen.
#[derive(Debug)]
pub struct Deduplicator {
    seen: HashSet<(String, String)>,
    fingerprint_len: usize,
}

impl Deduplicator {
    #[must_use]
    pub fn new(fingerprint_len: usize) -> Self {
        Self {
            seen: HashSet::new(),
            fingerprint_len,
        }
    }

    /// Pass the first pair with a given fingerprint through.
    ///
    /// # Errors
    ///
    /// [`FaqRejection::Duplicate`] for every later pair with that fingerprint.
    pub fn admit(&mut self, item: FaqItem) -> Result<FaqItem, FaqRejection> {
        if self.seen.insert(item.fingerprint(self.fingerprint_len)) {
            Ok(item)
        } else {
            Err(FaqRejection::Duplicate)
        }
    }
}
