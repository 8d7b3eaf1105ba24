//! GeoScan Core Library
//!
//! Domain layer of the GeoScan tool: reads image files, decodes the GPS
//! position stored in their EXIF metadata and collects the results as
//! [`Record`]s ready for reporting.

pub mod collector;
pub mod error;
pub mod extractor;
pub mod metadata;
pub mod record;

// Re-export main types
pub use collector::{RecordCollector, ScanSummary};
pub use error::{ExtractError, ExtractErrorKind, ReadError, ReadFailure};
pub use extractor::{Extraction, Extractor};
pub use metadata::{ExifDecoder, MetadataDecoder};
pub use record::{GeoPoint, Record, format_coordinate};

/// Directory scanned for images, relative to the working directory
pub const DEFAULT_IMAGES_DIR: &str = "images";

/// Default CSV report path
pub const DEFAULT_CSV_OUTPUT: &str = "output.csv";

/// Extension given to the HTML report derived from the CSV path
pub const HTML_EXTENSION: &str = "html";

/// Column headers of the tabular report
pub const REPORT_HEADERS: [&str; 3] = ["path", "latitude", "longitude"];
