//! Scan command orchestrator
//!
//! Runs discovery, extraction and both report stages in order. Discovery
//! completes before any report file is created, so a bad image root leaves
//! nothing behind. Once the CSV file exists, later output failures are
//! logged and the run still produces the HTML report.

use crate::error::{CliError, CliResult, ErrorContext};
use crate::file_discovery::{FileDiscoveryOptions, discover_files};
use crate::output::{CsvReportWriter, HtmlReport, derive_html_path};
use geoscan_core::{
    DEFAULT_CSV_OUTPUT, DEFAULT_IMAGES_DIR, ExifDecoder, Extraction, Extractor, MetadataDecoder,
    Record, ScanSummary,
};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Options for one scan run
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory walked for images
    pub images_root: PathBuf,
    /// CSV report path; the HTML path is derived from it
    pub csv_path: PathBuf,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            images_root: PathBuf::from(DEFAULT_IMAGES_DIR),
            csv_path: PathBuf::from(DEFAULT_CSV_OUTPUT),
        }
    }
}

impl ScanOptions {
    /// Options scanning the default images directory into `csv_path`
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            ..Self::default()
        }
    }

    pub fn with_images_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.images_root = root.into();
        self
    }
}

/// Result of a completed scan
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Records in discovery order
    pub records: Vec<Record>,
    pub summary: ScanSummary,
    pub csv_path: PathBuf,
    /// `false` when flushing the CSV report failed
    pub csv_written: bool,
    /// `None` when the HTML stage failed
    pub html_path: Option<PathBuf>,
}

/// Orchestrator for the scan command
pub struct ScanOrchestrator<D = ExifDecoder> {
    options: ScanOptions,
    extractor: Extractor<D>,
}

impl ScanOrchestrator<ExifDecoder> {
    /// Create a scan orchestrator using the EXIF decoder
    pub fn new(options: ScanOptions) -> Self {
        Self::with_extractor(options, Extractor::new())
    }
}

impl<D: MetadataDecoder> ScanOrchestrator<D> {
    pub fn with_extractor(options: ScanOptions, extractor: Extractor<D>) -> Self {
        Self { options, extractor }
    }

    /// Run the whole scan
    pub fn run(&self) -> CliResult<ScanOutcome> {
        let start = Instant::now();
        let root = &self.options.images_root;
        let csv_path = &self.options.csv_path;

        debug!("Discovering images under {}", root.display());
        let files = discover_files(root, FileDiscoveryOptions::default())?;
        debug!("Discovered {} image file(s)", files.len());

        let mut writer =
            CsvReportWriter::create(csv_path).map_err(|e| CliError::from_io_error(e, csv_path))?;
        writer
            .write_header()
            .map_err(|e| csv_failure("Failed to write CSV header", csv_path, e))?;

        let paths: Vec<PathBuf> = files.into_iter().map(|file| file.path).collect();
        let Extraction {
            records,
            mut summary,
        } = self.extractor.extract_all(&paths);

        for record in &records {
            if let Err(e) = writer.write_record(record) {
                warn!("{}: failed to write CSV row: {e}", record.path);
                summary.row_write_failures += 1;
            }
        }

        let csv_written = match writer.finish() {
            Ok(path) => {
                println!("CSV file '{}' generated successfully.", path.display());
                true
            }
            Err(e) => {
                error!("Failed to finish CSV report {}: {e}", csv_path.display());
                false
            }
        };

        let html_path = self.write_html(csv_path, &records);

        info!("{} in {:.2?}", summary.describe(), start.elapsed());

        Ok(ScanOutcome {
            records,
            summary,
            csv_path: csv_path.clone(),
            csv_written,
            html_path,
        })
    }

    /// HTML stage; a failure here never affects the finished CSV
    fn write_html(&self, csv_path: &Path, records: &[Record]) -> Option<PathBuf> {
        let html_path = derive_html_path(csv_path);

        let written = HtmlReport::new().and_then(|report| report.write_to(&html_path, records));
        match written {
            Ok(()) => {
                println!("HTML file '{}' generated successfully.", html_path.display());
                Some(html_path)
            }
            Err(e) => {
                error!("Failed to generate HTML report {}: {e:#}", html_path.display());
                None
            }
        }
    }
}

fn csv_failure(message: &str, path: &Path, error: csv::Error) -> CliError {
    CliError::general(message)
        .with_context("path", &path.display().to_string())
        .with_source(Box::new(error))
}
