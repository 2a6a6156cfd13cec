//! Structured diagnostic events emitted by the pipeline.
//!
//! Diagnostics describe which heuristic fired and why, so extraction on a
//! given site can be tuned. They are never needed for correctness: the
//! pipeline produces identical output whichever sink is attached.
//!
//! # Example
//!
//! ```rust
//! use pagelift::{extract_with_diagnostics, Diagnostic, Options};
//!
//! let mut events: Vec<Diagnostic> = Vec::new();
//! let html = "<html><body><main><p>Some main content that is long enough to count as a region.</p></main></body></html>";
//! let _doc = extract_with_diagnostics("https://example.com", html, &Options::default(), &mut events);
//! assert!(!events.is_empty());
//! ```

use serde::Serialize;

use crate::error::FaqRejection;
use crate::faq::container::ContainerStrategy;
use crate::faq::pairs::PairPattern;
use crate::locator::{FallbackPass, RegionMatcher};

/// A single pipeline event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A locator matcher produced an accepted region.
    RegionLocated {
        pass: FallbackPass,
        matcher: RegionMatcher,
        len: usize,
    },

    /// A fallback pass replaced the current content.
    FallbackApplied { pass: FallbackPass, len: usize },

    /// Phase A found a FAQ container.
    FaqContainerFound { strategy: ContainerStrategy },

    /// No FAQ container strategy matched.
    FaqContainerMissing,

    /// A pair pattern was evaluated inside the container.
    FaqPatternTried {
        pattern: PairPattern,
        candidates: usize,
        accepted: usize,
    },

    /// A candidate pair was dropped.
    FaqPairRejected {
        pattern: PairPattern,
        reason: FaqRejection,
    },

    /// Result of trying to cut the FAQ container out of the content.
    FaqExcision { removed: bool },
}

/// Receiver for pipeline events.
pub trait Diagnostics {
    fn emit(&mut self, event: Diagnostic);
}

/// Collects events in order.
impl Diagnostics for Vec<Diagnostic> {
    fn emit(&mut self, event: Diagnostic) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn emit(&mut self, _event: Diagnostic) {}
}

/// Forwards events to `tracing` at debug level.
///
/// This is the sink used by [`crate::extract`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&mut self, event: Diagnostic) {
        match event {
            Diagnostic::RegionLocated { pass, matcher, len } => {
                tracing::debug!(?pass, ?matcher, len, "region located");
            }
            Diagnostic::FallbackApplied { pass, len } => {
                tracing::debug!(?pass, len, "content fallback applied");
            }
            Diagnostic::FaqContainerFound { strategy } => {
                tracing::debug!(?strategy, "faq container found");
            }
            Diagnostic::FaqContainerMissing => {
                tracing::debug!("no faq container");
            }
            Diagnostic::FaqPatternTried {
                pattern,
                candidates,
                accepted,
            } => {
                tracing::debug!(?pattern, candidates, accepted, "faq pattern tried");
            }
            Diagnostic::FaqPairRejected { pattern, reason } => {
                tracing::debug!(?pattern, %reason, "faq pair rejected");
            }
            Diagnostic::FaqExcision { removed } => {
                tracing::debug!(removed, "faq excision");
            }
        }
    }
}
