//! Per-image extraction errors
//!
//! Every variant is recoverable: the scan logs it and moves on to the next file.

use super::read::ReadError;
use thiserror::Error;

/// Reasons a single image did not produce a GPS record
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The file could not be read from disk
    #[error("failed to read image file {0}")]
    Read(#[source] ReadError),

    /// No embedded EXIF/TIFF block was found in the file bytes
    #[error("no EXIF metadata block found")]
    NoMetadata,

    /// The EXIF block is corrupt, truncated or otherwise unparseable
    #[error("failed to parse EXIF metadata: {reason}")]
    Parse { reason: String },

    /// The EXIF block has no GPS IFD
    #[error("no GPS info present in EXIF metadata")]
    NoGps,

    /// The GPS IFD exists but latitude/longitude could not be decoded
    #[error("failed to decode GPS coordinates: {reason}")]
    Decode { reason: String },
}

/// Coarse classification of [`ExtractError`], used for run summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExtractErrorKind {
    Read,
    NoMetadata,
    Parse,
    NoGps,
    Decode,
}

impl ExtractError {
    /// Create a parse error from the decoder's failure
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    /// Create a coordinate decode error
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ExtractErrorKind {
        match self {
            Self::Read(_) => ExtractErrorKind::Read,
            Self::NoMetadata => ExtractErrorKind::NoMetadata,
            Self::Parse { .. } => ExtractErrorKind::Parse,
            Self::NoGps => ExtractErrorKind::NoGps,
            Self::Decode { .. } => ExtractErrorKind::Decode,
        }
    }
}

impl From<exif::Error> for ExtractError {
    fn from(err: exif::Error) -> Self {
        match err {
            exif::Error::NotFound(_) => Self::NoMetadata,
            other => Self::parse(other.to_string()),
        }
    }
}

impl ExtractErrorKind {
    /// Short label used in summaries
    pub fn label(self) -> &'static str {
        match self {
            Self::Read => "unreadable",
            Self::NoMetadata => "no metadata",
            Self::Parse => "corrupt metadata",
            Self::NoGps => "no GPS info",
            Self::Decode => "undecodable GPS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_kind_classification() {
        let read = ExtractError::Read(ReadError::new(
            Path::new("images/a.jpg"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        ));
        assert_eq!(read.kind(), ExtractErrorKind::Read);
        assert_eq!(ExtractError::NoMetadata.kind(), ExtractErrorKind::NoMetadata);
        assert_eq!(ExtractError::parse("bad").kind(), ExtractErrorKind::Parse);
        assert_eq!(ExtractError::NoGps.kind(), ExtractErrorKind::NoGps);
        assert_eq!(ExtractError::decode("bad").kind(), ExtractErrorKind::Decode);
    }

    #[test]
    fn test_exif_not_found_maps_to_no_metadata() {
        let err: ExtractError = exif::Error::NotFound("No Exif data found").into();
        assert!(matches!(err, ExtractError::NoMetadata));
    }

    #[test]
    fn test_exif_format_error_maps_to_parse() {
        let err: ExtractError = exif::Error::InvalidFormat("Broken TIFF header").into();
        match err {
            ExtractError::Parse { reason } => assert!(reason.contains("Broken TIFF header")),
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ExtractError::NoGps.to_string(),
            "no GPS info present in EXIF metadata"
        );
        assert!(
            ExtractError::decode("latitude is missing")
                .to_string()
                .contains("latitude is missing")
        );
    }
}
