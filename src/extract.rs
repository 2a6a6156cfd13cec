//! Extraction pipeline.
//!
//! Composes the stages in fixed order. Every stage takes and returns owned
//! strings; parsed trees never outlive the stage that built them.

use crate::diagnostics::Diagnostics;
use crate::faq;
use crate::locator::locate_main_content;
use crate::metadata::extract_metadata;
use crate::normalize;
use crate::result::{ExtractedDocument, FaqResult};
use crate::sanitize::{allowlist, structural};
use crate::Options;

/// Run the full pipeline over `html`.
///
/// Never fails: missing elements fall back to defaults and unusable regions
/// fall back to blunter captures.
pub(crate) fn run(url: &str, html: &str, opts: &Options, diagnostics: &mut dyn Diagnostics) -> ExtractedDocument {
    let metadata = extract_metadata(html, opts);

    let sanitized = structural::sanitize(html);
    let content = locate_main_content(&sanitized, html, opts, diagnostics);

    let detection = if opts.detect_faq {
        faq::detect_faq(html, opts, diagnostics)
    } else {
        None
    };

    let content = match &detection {
        Some(found) if opts.excise_faq => faq::excise_faq(&content, found, diagnostics),
        _ => content,
    };

    let faq_data = detection.map_or_else(FaqResult::disabled, |found| found.result);

    let content = normalize::whitespace(&allowlist::filter(&content));

    tracing::debug!(
        url,
        content_len = content.len(),
        faq_items = faq_data.items.len(),
        "extraction finished"
    );

    ExtractedDocument::assemble(metadata, content, url, faq_data)
}
