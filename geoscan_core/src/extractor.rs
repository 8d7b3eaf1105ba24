//! Per-file GPS extraction
//!
//! Every failure is local to one file: it is logged, counted and skipped, and
//! the scan continues with the next path.

use crate::collector::{RecordCollector, ScanSummary};
use crate::error::{ExtractError, ReadError};
use crate::metadata::{ExifDecoder, MetadataDecoder};
use crate::record::Record;
use log::{debug, warn};
use std::path::Path;

/// Reads image files and turns them into records through a [`MetadataDecoder`]
#[derive(Debug, Clone, Default)]
pub struct Extractor<D = ExifDecoder> {
    decoder: D,
}

/// Records and statistics produced by [`Extractor::extract_all`]
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub records: Vec<Record>,
    pub summary: ScanSummary,
}

impl Extractor<ExifDecoder> {
    /// Extractor using the EXIF decoder
    pub fn new() -> Self {
        Self::with_decoder(ExifDecoder::new())
    }
}

impl<D: MetadataDecoder> Extractor<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    /// Read `path` and decode its GPS position
    pub fn try_extract(&self, path: &Path) -> Result<Record, ExtractError> {
        let bytes = std::fs::read(path)
            .map_err(|e| ExtractError::Read(ReadError::new(path, e)))?;

        let point = self.decoder.decode(&bytes)?;
        Ok(Record::from_point(path, point))
    }

    /// Extract every path in order, skipping the ones that fail
    pub fn extract_all<I, P>(&self, paths: I) -> Extraction
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut summary = ScanSummary::default();
        let mut collector = RecordCollector::new();

        paths
            .into_iter()
            .filter_map(|path| {
                let path = path.as_ref();
                summary.files_scanned += 1;
                match self.try_extract(path) {
                    Ok(record) => {
                        debug!(
                            "{}: latitude {}, longitude {}",
                            record.path, record.latitude, record.longitude
                        );
                        Some(record)
                    }
                    Err(e) => {
                        warn!("{}: {e}", path.display());
                        summary.record_skip(e.kind());
                        None
                    }
                }
            })
            .for_each(|record| collector.push(record));

        summary.records = collector.len();
        Extraction {
            records: collector.finish(),
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractErrorKind;
    use crate::record::GeoPoint;
    use geoscan_test_utils::{ExifImageBuilder, ImageContainer};
    use std::path::PathBuf;
    use std::fs;
    use tempfile::TempDir;

    /// Decoder that treats the file content as `lat,lon` text
    struct TextDecoder;

    impl MetadataDecoder for TextDecoder {
        fn decode(&self, bytes: &[u8]) -> Result<GeoPoint, ExtractError> {
            let text = std::str::from_utf8(bytes).map_err(|_| ExtractError::NoMetadata)?;
            let (lat, lon) = text.split_once(',').ok_or(ExtractError::NoGps)?;
            let lat = lat.parse().map_err(|_| ExtractError::decode("latitude"))?;
            let lon = lon.parse().map_err(|_| ExtractError::decode("longitude"))?;
            Ok(GeoPoint::new(lat, lon))
        }
    }

    #[test]
    fn test_try_extract_reports_read_failure() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.jpg");

        let err = Extractor::new().try_extract(&missing).unwrap_err();
        assert_eq!(err.kind(), ExtractErrorKind::Read);
        assert!(err.to_string().contains("missing.jpg"));
    }

    #[test]
    fn test_try_extract_real_jpeg() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.jpg");
        let bytes = ExifImageBuilder::new()
            .with_coordinates(51.5074, 0.1278)
            .build(ImageContainer::Jpeg);
        fs::write(&path, bytes).unwrap();

        let record = Extractor::new().try_extract(&path).unwrap();
        assert_eq!(record.path, path.to_string_lossy());
        assert_eq!(record.latitude, "51.5074");
        assert_eq!(record.longitude, "0.1278");
    }

    #[test]
    fn test_extract_all_keeps_order_and_counts_skips() {
        let dir = TempDir::new().unwrap();
        let files = [
            ("c.jpg", "3.5,4.25"),
            ("a.jpg", "not coordinates"),
            ("b.jpg", "1,x"),
            ("d.jpg", "-1.5,2"),
        ];
        let mut paths = Vec::new();
        for (name, content) in files {
            let path = dir.path().join(name);
            fs::write(&path, content).unwrap();
            paths.push(path);
        }
        paths.push(dir.path().join("gone.jpg"));

        let extraction = Extractor::with_decoder(TextDecoder).extract_all(&paths);

        let coordinates: Vec<_> = extraction
            .records
            .iter()
            .map(|r| (r.latitude.as_str(), r.longitude.as_str()))
            .collect();
        assert_eq!(coordinates, [("3.5", "4.25"), ("-1.5", "2")]);

        let summary = extraction.summary;
        assert_eq!(summary.files_scanned, 5);
        assert_eq!(summary.records, 2);
        assert_eq!(summary.skipped[&ExtractErrorKind::NoGps], 1);
        assert_eq!(summary.skipped[&ExtractErrorKind::Decode], 1);
        assert_eq!(summary.skipped[&ExtractErrorKind::Read], 1);
        assert_eq!(
            summary.files_scanned,
            summary.records + summary.skipped_total()
        );
    }

    #[test]
    fn test_extract_all_empty_input() {
        let extraction = Extractor::new().extract_all(Vec::<PathBuf>::new());
        assert!(extraction.records.is_empty());
        assert_eq!(extraction.summary, ScanSummary::default());
    }
}
