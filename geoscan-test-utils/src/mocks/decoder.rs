//! Mock metadata decoder for testing

use geoscan_core::{ExtractError, GeoPoint, MetadataDecoder};
use std::cell::RefCell;
use std::collections::HashMap;

/// Scripted result for a given file content
#[derive(Debug, Clone, PartialEq)]
pub enum MockOutcome {
    Point(GeoPoint),
    NoMetadata,
    Parse(String),
    NoGps,
    Decode(String),
}

impl MockOutcome {
    fn to_result(&self) -> Result<GeoPoint, ExtractError> {
        match self {
            Self::Point(point) => Ok(*point),
            Self::NoMetadata => Err(ExtractError::NoMetadata),
            Self::Parse(reason) => Err(ExtractError::parse(reason.clone())),
            Self::NoGps => Err(ExtractError::NoGps),
            Self::Decode(reason) => Err(ExtractError::decode(reason.clone())),
        }
    }
}

/// Decoder returning scripted outcomes keyed by file content
///
/// Unknown content decodes as [`MockOutcome::NoMetadata`]. Every call is
/// recorded so tests can assert how often each file was decoded.
#[derive(Debug, Default)]
pub struct MockDecoder {
    outcomes: HashMap<Vec<u8>, MockOutcome>,
    calls: RefCell<Vec<Vec<u8>>>,
}

impl MockDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome for files whose content equals `content`
    pub fn with_outcome(mut self, content: &[u8], outcome: MockOutcome) -> Self {
        self.outcomes.insert(content.to_vec(), outcome);
        self
    }

    /// Script a successful decode
    pub fn with_point(self, content: &[u8], latitude: f64, longitude: f64) -> Self {
        self.with_outcome(content, MockOutcome::Point(GeoPoint::new(latitude, longitude)))
    }

    /// Number of decode calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Number of decode calls made for `content`
    pub fn calls_for(&self, content: &[u8]) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.as_slice() == content)
            .count()
    }
}

impl MetadataDecoder for MockDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<GeoPoint, ExtractError> {
        self.calls.borrow_mut().push(bytes.to_vec());
        self.outcomes
            .get(bytes)
            .map(MockOutcome::to_result)
            .unwrap_or(Err(ExtractError::NoMetadata))
    }
}
