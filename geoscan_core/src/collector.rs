//! Append-only record collection and run statistics

use crate::error::ExtractErrorKind;
use crate::record::Record;
use std::collections::BTreeMap;

/// Ordered, append-only sink for records produced during a scan
///
/// The full sequence is only handed out by [`RecordCollector::finish`], which
/// consumes the collector, so nothing can append after the reports are built.
#[derive(Debug, Default)]
pub struct RecordCollector {
    records: Vec<Record>,
}

impl RecordCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end of the sequence
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finalize the collection, yielding records in insertion order
    pub fn finish(self) -> Vec<Record> {
        self.records
    }
}

/// Counters describing one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files handed to the extractor
    pub files_scanned: usize,
    /// Files that produced a record
    pub records: usize,
    /// Skipped files grouped by failure kind
    pub skipped: BTreeMap<ExtractErrorKind, usize>,
    /// Records that could not be written to the CSV report
    pub row_write_failures: usize,
}

impl ScanSummary {
    /// Count a skipped file
    pub fn record_skip(&mut self, kind: ExtractErrorKind) {
        *self.skipped.entry(kind).or_default() += 1;
    }

    /// Total number of skipped files
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    /// One-line human readable rendering
    pub fn describe(&self) -> String {
        let mut line = format!(
            "scanned {} file(s), extracted {} record(s), skipped {}",
            self.files_scanned,
            self.records,
            self.skipped_total()
        );

        if !self.skipped.is_empty() {
            let reasons: Vec<String> = self
                .skipped
                .iter()
                .map(|(kind, count)| format!("{}: {count}", kind.label()))
                .collect();
            line.push_str(&format!(" ({})", reasons.join(", ")));
        }

        if self.row_write_failures > 0 {
            line.push_str(&format!(
                ", {} row(s) failed to write",
                self.row_write_failures
            ));
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str) -> Record {
        Record {
            path: path.to_string(),
            latitude: "1".to_string(),
            longitude: "2".to_string(),
        }
    }

    #[test]
    fn test_collector_preserves_insertion_order() {
        let mut collector = RecordCollector::new();
        assert!(collector.is_empty());

        collector.push(record("images/b.jpg"));
        collector.push(record("images/a.jpg"));
        collector.push(record("images/c.jpg"));
        assert_eq!(collector.len(), 3);

        let paths: Vec<_> = collector.finish().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, ["images/b.jpg", "images/a.jpg", "images/c.jpg"]);
    }

    #[test]
    fn test_summary_counts_skips_by_kind() {
        let mut summary = ScanSummary {
            files_scanned: 4,
            records: 1,
            ..Default::default()
        };
        summary.record_skip(ExtractErrorKind::NoGps);
        summary.record_skip(ExtractErrorKind::NoGps);
        summary.record_skip(ExtractErrorKind::NoMetadata);

        assert_eq!(summary.skipped_total(), 3);
        assert_eq!(summary.skipped[&ExtractErrorKind::NoGps], 2);

        let text = summary.describe();
        assert!(text.contains("scanned 4 file(s)"));
        assert!(text.contains("no GPS info: 2"));
        assert!(text.contains("no metadata: 1"));
        assert!(!text.contains("failed to write"));
    }

    #[test]
    fn test_summary_mentions_row_failures() {
        let summary = ScanSummary {
            row_write_failures: 2,
            ..Default::default()
        };
        assert!(summary.describe().contains("2 row(s) failed to write"));
    }
}
