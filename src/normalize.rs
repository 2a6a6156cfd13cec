//! Whitespace normalization of the published fragment.
//!
//! Gives the editor one block per line: a newline after each closing
//! block-level tag, `<br>` turned into a newline, and no more than one blank
//! line in a row.

use crate::patterns::{BLOCK_CLOSE, LINE_BREAK_TAG, MULTIPLE_NEWLINES};

/// Normalize line structure of an HTML fragment.
///
/// # Example
///
/// ```rust
/// use pagelift::normalize;
///
/// assert_eq!(normalize::whitespace("<p>a  </p><p>b<br/>c</p>"), "<p>a</p>\n<p>b\nc</p>");
/// ```
#[must_use]
pub fn whitespace(html: &str) -> String {
    let html = BLOCK_CLOSE.replace_all(html, "</${1}>\n");
    let html = LINE_BREAK_TAG.replace_all(&html, "\n");
    let html = MULTIPLE_NEWLINES.replace_all(&html, "\n\n");
    html.trim().to_string()
}
