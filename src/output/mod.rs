//! Report rendering and output writers.
//!
//! This module handles:
//! - Currency formatting of money values
//! - Rendering summaries (currency JSON, machine JSON, text)
//! - Writing reports to disk

pub mod currency;
pub mod report;
pub mod writer;

// Re-export main functions
pub use currency::format_currency;
pub use report::{render_report, CurrencyReport, OutputFormat, ReportContext, SummaryReport};
pub use writer::{validate_output_path, write_report};
