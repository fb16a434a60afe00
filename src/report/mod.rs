//! The result summary and the wages report document.
//!
//! [`summary_lines`] is the short label/value view shown after a
//! calculation. [`WagesReport`] is the full two-page document, rendered as
//! text or, with the `pdf` feature, as a PDF.

mod document;
#[cfg(feature = "pdf")]
mod pdf;
mod summary;

pub use document::{ClosingDetails, ReportHeader, SCHEDULE_COLUMNS, WagesReport};
#[cfg(feature = "pdf")]
pub use pdf::render_pdf;
pub use summary::{SummaryLine, format_hours, format_money, summary_lines};
