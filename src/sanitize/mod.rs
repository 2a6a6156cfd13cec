//! HTML Sanitization
//!
//! Two cleaning passes with different goals:
//!
//! - [`structural::sanitize`] is aggressive and lossy. It exists only to give
//!   the main-content locator clean structural boundaries and is never
//!   published.
//! - [`allowlist::filter`] is the publishing pass. It keeps editorial
//!   formatting (classes, styles, links, image sizing, table layout) while
//!   removing script-injection vectors.

pub mod allowlist;
pub mod structural;
