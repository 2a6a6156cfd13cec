//! Configuration options for content extraction.
//!
//! The `Options` struct carries every threshold the pipeline uses, so the
//! heuristics can be tuned without touching the stages themselves.

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use pagelift::Options;
///
/// let options = Options {
///     detect_faq: false,
///     ..Options::default()
/// };
/// assert_eq!(options.min_region_len, 50);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum length (chars) a locator capture must exceed to be accepted.
    ///
    /// Default: `50`
    pub min_region_len: usize,

    /// Content shorter than this triggers the raw-document and `<body>` passes.
    ///
    /// Default: `500`
    pub preferred_content_len: usize,

    /// Content shorter than this falls back to the complete raw document.
    ///
    /// Default: `100`
    pub min_content_len: usize,

    /// Run the FAQ detector over the raw document.
    ///
    /// Default: `true`
    pub detect_faq: bool,

    /// Remove the detected FAQ container from the main content.
    ///
    /// Only applies when a FAQ was detected.
    ///
    /// Default: `true`
    pub excise_faq: bool,

    /// Minimum question length in characters.
    ///
    /// Default: `5`
    pub min_question_len: usize,

    /// Maximum question length in characters.
    ///
    /// Default: `200`
    pub max_question_len: usize,

    /// Minimum answer length in characters.
    ///
    /// Default: `10`
    pub min_answer_len: usize,

    /// Maximum answer length in characters.
    ///
    /// Default: `2000`
    pub max_answer_len: usize,

    /// Number of leading characters of question and answer used as the
    /// de-duplication fingerprint.
    ///
    /// Default: `50`
    pub fingerprint_len: usize,

    /// Title used when the document has no usable `<title>`.
    ///
    /// Default: `"Extracted Content"`
    pub default_title: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_region_len: 50,
            preferred_content_len: 500,
            min_content_len: 100,
            detect_faq: true,
            excise_faq: true,
            min_question_len: 5,
            max_question_len: 200,
            min_answer_len: 10,
            max_answer_len: 2000,
            fingerprint_len: 50,
            default_title: crate::result::DEFAULT_TITLE.to_string(),
        }
    }
}

impl Options {
    /// Accepted question length range.
    #[must_use]
    pub fn question_bounds(&self) -> std::ops::RangeInclusive<usize> {
        self.min_question_len..=self.max_question_len
    }

    /// Accepted answer length range.
    #[must_use]
    pub fn answer_bounds(&self) -> std::ops::RangeInclusive<usize> {
        self.min_answer_len..=self.max_answer_len
    }
}
