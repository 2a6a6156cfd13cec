//! Compiled regex patterns and keyword tables used across the pipeline.
//!
//! All patterns are compiled once on first use with `LazyLock`. Regexes are
//! only applied to flat string passes; structural matching goes through the
//! parsed tree.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Markup Stripping Patterns
// =============================================================================

/// Matches HTML comments, including multi-line ones.
pub static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("HTML_COMMENT regex"));

/// Matches embedded server-side code blocks (`<?php ?>`, `<?= ?>`, `<% %>`).
pub static SERVER_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<\?(?:php|=)?.*?\?>|<%.*?%>").expect("SERVER_CODE regex")
});

/// Matches any tag.
pub static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("HTML_TAG regex"));

// =============================================================================
// Whitespace Patterns
// =============================================================================

/// Matches a closing block-level tag and the whitespace before it.
pub static BLOCK_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s*</(p|div|h[1-6]|ul|ol|li|blockquote|pre|table|tr|td|th|thead|tbody|tfoot|section|article|main|header|footer)\s*>",
    )
    .expect("BLOCK_CLOSE regex")
});

/// Matches `<br>`, `<br/>`, `<br />` and attribute-carrying variants plus
/// trailing whitespace.
pub static LINE_BREAK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\b[^>]*>\s*").expect("LINE_BREAK_TAG regex"));

/// Matches three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

/// Matches carriage-return line endings.
pub static CARRIAGE_RETURN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n?").expect("CARRIAGE_RETURN regex"));

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

// =============================================================================
// Class/ID Hint Patterns
// =============================================================================

/// Matches class/id values of likely main-content containers.
pub static CONTENT_CONTAINER_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(content|main|article|post|entry|text)").expect("CONTENT_CONTAINER_HINT regex")
});

/// Matches class values marking a FAQ container.
pub static FAQ_CLASS_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(faqs?|f-a-q|questions?|q-and-a|qna|accordion)").expect("FAQ_CLASS_HINT regex")
});

/// Matches class/id values of FAQ or toggle widgets.
pub static FAQ_WIDGET_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(faqs?|accordion|toggles?)").expect("FAQ_WIDGET_HINT regex")
});

/// Matches class values of question/title elements inside a FAQ.
pub static QUESTION_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(question|title)").expect("QUESTION_CLASS regex"));

/// Matches class values of answer/content elements inside a FAQ.
pub static ANSWER_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(answer|content)").expect("ANSWER_CLASS regex"));

// =============================================================================
// Keyword Tables
// =============================================================================

/// Heading texts that title a FAQ section (compared case-insensitively).
pub const FAQ_TITLES: &[&str] = &[
    "faq",
    "faqs",
    "frequently asked questions",
    "common questions",
    "questions & answers",
    "q & a",
    "q&a",
];

/// Class tokens of accordion triggers.
pub const ACCORDION_TRIGGER_CLASSES: &[&str] = &["toggle", "accordion-trigger"];

/// Class tokens of accordion panels.
pub const ACCORDION_CONTENT_CLASSES: &[&str] = &["toggle-content", "accordion-content"];

/// Whether `text` is one of [`FAQ_TITLES`], ignoring case, surrounding
/// whitespace and a trailing colon.
#[must_use]
pub fn is_faq_title(text: &str) -> bool {
    let normalized = WHITESPACE_NORMALIZE.replace_all(text.trim(), " ");
    let normalized = normalized.trim_end_matches(':').trim().to_lowercase();
    FAQ_TITLES.contains(&normalized.as_str())
}
