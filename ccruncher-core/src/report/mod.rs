//! Turns a [`CcLog`](crate::index::CcLog) into something a person can read.
//!
//! A report groups requests under the app they targeted, and entries under their
//! request, so each request reads as a small timeline.

mod document;
mod error;
mod format;
mod pretty;
mod render;

#[cfg(test)]
mod tests;

pub use document::{AppReport, Report, RequestReport};
pub use error::RenderError;
pub use format::ReportFormat;
pub use render::{render_entries, render_report};
