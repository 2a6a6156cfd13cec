//! Main-content locator.
//!
//! An ordered list of region matchers is tried against a document; the first
//! whose capture is long enough wins. [`locate_main_content`] then runs the
//! locator over the sanitized and raw documents with progressively blunter
//! fallbacks, replacing the candidate wholesale at each step.

use serde::Serialize;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::dom::{self, Selection};
use crate::patterns::CONTENT_CONTAINER_HINT;
use crate::selector::{self, utils, Rule};
use crate::Options;

/// Region matchers, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionMatcher {
    /// First `<main>` element.
    Main,
    /// First `<article>` element.
    Article,
    /// First `div`/`section` whose class or id hints at content.
    ContentContainer,
    /// The `<body>` element.
    Body,
    /// The whole input, unchanged. Always accepted.
    Whole,
}

impl RegionMatcher {
    pub const ORDER: [Self; 5] = [
        Self::Main,
        Self::Article,
        Self::ContentContainer,
        Self::Body,
        Self::Whole,
    ];

    fn rule(self) -> Option<Rule> {
        match self {
            Self::Main => Some(is_main),
            Self::Article => Some(is_article),
            Self::ContentContainer => Some(is_content_container),
            Self::Body => Some(is_body),
            Self::Whole => None,
        }
    }
}

/// Input and fallback step a region came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPass {
    /// Locator over the structural sanitizer output.
    Sanitized,
    /// Locator over the raw document.
    Raw,
    /// Raw `<body>` contents.
    RawBody,
    /// The complete raw document.
    RawDocument,
}

/// Capture of the first accepted matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedRegion {
    pub matcher: RegionMatcher,
    pub html: String,
}

impl LocatedRegion {
    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        char_len(&self.html)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

fn is_main(sel: &Selection) -> bool {
    utils::is_tag(sel, "main")
}

fn is_article(sel: &Selection) -> bool {
    utils::is_tag(sel, "article")
}

fn is_content_container(sel: &Selection) -> bool {
    utils::is_container(sel) && CONTENT_CONTAINER_HINT.is_match(&utils::id_class(sel))
}

fn is_body(sel: &Selection) -> bool {
    utils::is_tag(sel, "body")
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Find the main content region of `html`.
///
/// Each matcher captures the inner HTML of the first element it selects.
/// Only that first element is considered: when its capture does not exceed
/// `opts.min_region_len` characters the next matcher is tried.
///
/// # Example
///
/// ```rust
/// use pagelift::locator::{locate, RegionMatcher};
/// use pagelift::Options;
///
/// let html = format!("<body><nav>x</nav><main>{}</main></body>", "a".repeat(80));
/// let region = locate(&html, &Options::default());
/// assert_eq!(region.matcher, RegionMatcher::Main);
/// assert_eq!(region.html, "a".repeat(80));
/// ```
#[must_use]
pub fn locate(html: &str, opts: &Options) -> LocatedRegion {
    let doc = dom::parse(html);
    let root = doc.select("html");

    for matcher in RegionMatcher::ORDER {
        let Some(rule) = matcher.rule() else {
            break;
        };

        if let Some(found) = selector::query(&root, rule) {
            let capture = dom::inner_html(&found).to_string();
            if char_len(&capture) > opts.min_region_len {
                return LocatedRegion {
                    matcher,
                    html: capture,
                };
            }
        }
    }

    LocatedRegion {
        matcher: RegionMatcher::Whole,
        html: html.to_string(),
    }
}

/// Select the content region using the sanitized and raw documents.
///
/// 1. Locate over `sanitized`.
/// 2. Under `opts.preferred_content_len`: locate over `raw`, keep the longer.
/// 3. Still under `opts.preferred_content_len`: use the raw `<body>`
///    contents when non-empty.
/// 4. Under `opts.min_content_len`: use the complete raw document.
pub fn locate_main_content(
    sanitized: &str,
    raw: &str,
    opts: &Options,
    diagnostics: &mut dyn Diagnostics,
) -> String {
    let region = locate(sanitized, opts);
    diagnostics.emit(Diagnostic::RegionLocated {
        pass: FallbackPass::Sanitized,
        matcher: region.matcher,
        len: region.len(),
    });
    let mut content = region.html;

    if char_len(&content) < opts.preferred_content_len {
        let alternative = locate(raw, opts);
        diagnostics.emit(Diagnostic::RegionLocated {
            pass: FallbackPass::Raw,
            matcher: alternative.matcher,
            len: alternative.len(),
        });

        if alternative.len() > char_len(&content) {
            content = alternative.html;
            diagnostics.emit(Diagnostic::FallbackApplied {
                pass: FallbackPass::Raw,
                len: char_len(&content),
            });
        }
    }

    if char_len(&content) < opts.preferred_content_len {
        let body = dom::body_html(&dom::parse(raw));
        if !body.is_empty() {
            content = body;
            diagnostics.emit(Diagnostic::FallbackApplied {
                pass: FallbackPass::RawBody,
                len: char_len(&content),
            });
        }
    }

    if char_len(&content) < opts.min_content_len {
        content = raw.to_string();
        diagnostics.emit(Diagnostic::FallbackApplied {
            pass: FallbackPass::RawDocument,
            len: char_len(&content),
        });
    }

    content
}
