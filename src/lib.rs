//! # pagelift
//!
//! Lifts the publishable content out of a fetched web page: title,
//! description and keywords, a sanitized main-content fragment, and any
//! FAQ question/answer pairs (excised from the body so they can be published
//! as structured data instead).
//!
//! ## Quick Start
//!
//! ```rust
//! use pagelift::extract;
//!
//! let html = r#"<html><head><title> My Article </title></head>
//! <body><nav>Menu</nav><main><p onclick="track()">Main content here.</p></main></body></html>"#;
//!
//! let doc = extract("https://example.com/post", html);
//! assert_eq!(doc.title, "My Article");
//! assert!(doc.cleaned_html.contains("Main content here."));
//! assert!(!doc.cleaned_html.contains("onclick"));
//! ```
//!
//! ## Pipeline
//!
//! 1. [`metadata`]: title, description and keywords from the raw page
//! 2. [`sanitize::structural`]: skeleton used only for locating content
//! 3. [`locator`]: main region with multi-pass fallback
//! 4. [`faq`]: container search and pair extraction over the raw page
//! 5. [`faq::excise`]: the container is cut out of the main region
//! 6. [`sanitize::allowlist`]: per-tag attribute allowlist for publishing
//! 7. [`normalize`]: one block per line
//!
//! Extraction from a string never fails. Malformed or unexpected markup
//! degrades to a blunter capture, and [`Diagnostics`] reports which
//! heuristic fired.

mod error;
mod extract;
mod options;
mod result;

pub mod diagnostics;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// FAQ container detection, pair extraction and excision.
pub mod faq;

/// Main-content locator.
pub mod locator;

/// Metadata extraction from HTML meta tags and `<title>`.
pub mod metadata;

/// Whitespace normalization of the published fragment.
pub mod normalize;

/// Compiled patterns and keyword tables.
pub mod patterns;

/// Structural sanitizer and publishing allowlist filter.
pub mod sanitize;

/// Selector infrastructure for first-match rules.
pub mod selector;

// Public API - re-exports
pub use diagnostics::{Diagnostic, Diagnostics, NoopDiagnostics, TracingDiagnostics};
pub use error::{Error, FaqRejection, Result};
pub use options::Options;
pub use result::{
    ExtractRequest, ExtractedDocument, ExtractedMetadata, FaqItem, FaqResult, PublishFields, DEFAULT_TITLE,
};

/// Extracts a publishable document from HTML using default options.
///
/// Diagnostics go to `tracing` at debug level.
///
/// # Example
///
/// ```rust
/// use pagelift::extract;
///
/// let doc = extract("https://example.com", "");
/// assert_eq!(doc.title, "Extracted Content");
/// assert_eq!(doc.content, "");
/// ```
#[must_use]
pub fn extract(url: &str, html: &str) -> ExtractedDocument {
    extract_with_options(url, html, &Options::default())
}

/// Extracts a publishable document from HTML with custom options.
///
/// # Example
///
/// ```rust
/// use pagelift::{extract_with_options, Options};
///
/// let html = r#"<div class="faq"><h3>Q1</h3><p>A1 text longer than ten chars</p></div>"#;
/// let options = Options {
///     min_question_len: 2,
///     ..Options::default()
/// };
/// let doc = extract_with_options("https://example.com", html, &options);
/// assert!(doc.faq_data.enabled);
/// assert!(!doc.cleaned_html.contains("Q1"));
/// ```
#[must_use]
pub fn extract_with_options(url: &str, html: &str, options: &Options) -> ExtractedDocument {
    extract_with_diagnostics(url, html, options, &mut TracingDiagnostics)
}

/// Extracts a publishable document, reporting pipeline events to
/// `diagnostics`.
///
/// The output is identical whichever sink is passed.
pub fn extract_with_diagnostics(
    url: &str,
    html: &str,
    options: &Options,
    diagnostics: &mut dyn Diagnostics,
) -> ExtractedDocument {
    extract::run(url, html, options, diagnostics)
}

/// Extracts from page bytes, detecting the character encoding first.
///
/// A byte-order mark or `<meta charset>` declaration selects the encoding;
/// UTF-8 is assumed otherwise. Malformed sequences become U+FFFD.
///
/// # Example
///
/// ```rust
/// use pagelift::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head></html>";
/// assert_eq!(extract_bytes("https://example.com", html).title, "Caf\u{e9}");
/// ```
#[must_use]
pub fn extract_bytes(url: &str, html: &[u8]) -> ExtractedDocument {
    let html = encoding::transcode_to_utf8(html);
    extract(url, &html)
}

/// Extracts from a request as received from the fetching layer.
///
/// # Errors
///
/// Returns [`Error::MissingHtml`] when the request carries no HTML. An empty
/// string is valid input and yields an empty document.
pub fn extract_request(request: &ExtractRequest) -> Result<ExtractedDocument> {
    let html = request.html.as_deref().ok_or_else(|| Error::MissingHtml {
        url: request.url.clone(),
    })?;
    Ok(extract(&request.url, html))
}

/// Extracts from a JSON request body (`{"url": ..., "html": ...}`).
///
/// # Errors
///
/// Returns [`Error::InvalidRequest`] when the body is not a valid request and
/// [`Error::MissingHtml`] when it has no `html` field.
///
/// # Example
///
/// ```rust
/// use pagelift::{extract_request_json, Error};
///
/// let doc = extract_request_json(r#"{"url": "https://example.com", "html": "<title>Hi</title>"}"#)?;
/// assert_eq!(doc.title, "Hi");
///
/// let missing = extract_request_json(r#"{"url": "https://example.com"}"#);
/// assert!(matches!(missing, Err(Error::MissingHtml { .. })));
/// # Ok::<(), pagelift::Error>(())
/// ```
pub fn extract_request_json(body: &str) -> Result<ExtractedDocument> {
    let request: ExtractRequest = serde_json::from_str(body)?;
    extract_request(&request)
}
