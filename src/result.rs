//! Result types for extraction input and output.
//!
//! The serialized field names of [`ExtractedDocument`] are part of the
//! contract with downstream consumers and must not change.

use serde::{Deserialize, Serialize};

/// Title used when a document has no `<title>` element.
pub const DEFAULT_TITLE: &str = "Extracted Content";

/// An extraction request as received from the surrounding service.
///
/// `html` is optional so an absent body can be rejected explicitly instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractRequest {
    /// Source URL, carried through untouched.
    #[serde(default)]
    pub url: String,

    /// Fully fetched document body.
    #[serde(default)]
    pub html: Option<String>,
}

impl ExtractRequest {
    /// Builds a request from an already-fetched page.
    #[must_use]
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: Some(html.into()),
        }
    }
}

/// Page-level metadata pulled from the raw document.
///
/// Every field is always populated; missing tags produce defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    /// Trimmed `<title>` text, or [`DEFAULT_TITLE`].
    pub title: String,

    /// Trimmed meta description, or empty.
    pub description: String,

    /// Raw keyword list as found in the meta tag, or empty.
    pub keywords: String,
}

impl Default for ExtractedMetadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
            keywords: String::new(),
        }
    }
}

/// One question/answer pair, both plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// De-duplication key: the first `len` characters of the question and of
    /// the answer.
    #[must_use]
    pub fn fingerprint(&self, len: usize) -> (String, String) {
        (
            self.question.chars().take(len).collect(),
            self.answer.chars().take(len).collect(),
        )
    }
}

/// FAQ pairs found in the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqResult {
    /// Whether any valid pair was extracted.
    pub enabled: bool,

    /// Pairs in extraction order.
    pub items: Vec<FaqItem>,
}

impl FaqResult {
    /// The result used when no FAQ container or no valid pair was found.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Wraps extracted items; `enabled` is set only when there are some.
    #[must_use]
    pub fn from_items(items: Vec<FaqItem>) -> Self {
        Self {
            enabled: !items.is_empty(),
            items,
        }
    }
}

/// Final output of the pipeline.
///
/// `content` and `cleaned_html` always hold the same fragment; both are kept
/// for consumers that read one or the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDocument {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub content: String,
    pub original_url: String,
    pub cleaned_html: String,
    pub faq_data: FaqResult,
}

impl ExtractedDocument {
    pub(crate) fn assemble(
        metadata: ExtractedMetadata,
        content: String,
        original_url: &str,
        faq_data: FaqResult,
    ) -> Self {
        Self {
            title: metadata.title,
            description: metadata.description,
            keywords: metadata.keywords,
            cleaned_html: content.clone(),
            content,
            original_url: original_url.to_string(),
            faq_data,
        }
    }
}

/// Field projection handed to the CMS publisher.
///
/// Mirrors how the publisher maps an [`ExtractedDocument`] onto SEO metadata
/// and the page body. Performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishFields {
    pub title: String,
    pub body: String,
    pub meta_description: String,
    /// First comma-separated keyword, trimmed.
    pub focus_keyword: String,
    pub meta_keywords: String,
    pub original_url: String,
    pub faq: Vec<FaqItem>,
}

impl From<&ExtractedDocument> for PublishFields {
    fn from(doc: &ExtractedDocument) -> Self {
        let focus_keyword = doc
            .keywords
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        Self {
            title: doc.title.clone(),
            body: doc.cleaned_html.clone(),
            meta_description: doc.description.clone(),
            focus_keyword,
            meta_keywords: doc.keywords.clone(),
            original_url: doc.original_url.clone(),
            faq: if doc.faq_data.enabled {
                doc.faq_data.items.clone()
            } else {
                Vec::new()
            },
        }
    }
}
