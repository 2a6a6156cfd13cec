//! Error types for pagelift.
//!
//! Extraction over a `&str` never fails: malformed markup degrades through the
//! fallback chains instead. These errors only surface at the request boundary
//! and for rejected FAQ candidates.

/// Error type for request-level operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request carried no HTML to extract from.
    #[error("No HTML provided for {url:?}")]
    MissingHtml {
        /// Source URL carried by the request.
        url: String,
    },

    /// The request body could not be parsed.
    #[error("Invalid extraction request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}

/// Result type alias for request-level operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reason a FAQ candidate pair was discarded.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum FaqRejection {
    /// Question text length outside the configured bounds.
    #[error("question length {len} outside {min}..={max}")]
    QuestionLength { len: usize, min: usize, max: usize },

    /// Answer text length outside the configured bounds.
    #[error("answer length {len} outside {min}..={max}")]
    AnswerLength { len: usize, min: usize, max: usize },

    /// Same fingerprint as an earlier pair.
    #[error("duplicate of an earlier pair")]
    Duplicate,

    /// The candidate's markup did not have the expected shape.
    #[error("malformed candidate: {0}")]
    Malformed(&'static str),
}
