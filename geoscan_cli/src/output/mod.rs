//! Report writers
//!
//! The CSV report is streamed row by row to its file; the HTML report is
//! rendered from a Handlebars template once all records are known.

mod formatters;
mod template_helpers;

pub use formatters::{CsvFormatter, CsvReportWriter, HTML_TEMPLATE, HtmlReport};

use anyhow::Result;
use geoscan_core::{HTML_EXTENSION, Record};
use std::path::{Path, PathBuf};

/// Trait for report formatters
pub trait OutputFormatter {
    /// Render the whole record sequence as one document
    fn format_batch(&self, records: &[Record]) -> Result<String>;
}

/// HTML report path derived from the CSV report path
///
/// A single trailing `.csv` (exact case) is replaced; any other name simply
/// gets `.html` appended, so `report` becomes `report.html`.
pub fn derive_html_path(csv_path: &Path) -> PathBuf {
    let raw = csv_path.to_string_lossy();
    let stem = raw.strip_suffix(".csv").unwrap_or(&raw);
    PathBuf::from(format!("{stem}.{HTML_EXTENSION}"))
}
