//! Embedded metadata decoding
//!
//! The binary EXIF/TIFF format is handled by `kamadak-exif`. This module only
//! locates the metadata block, asks the library to parse it and reads the GPS
//! tags back out as decimal degrees.

pub mod exif_decoder;
pub mod gps;

pub use exif_decoder::{ExifDecoder, GpsInfo, RawMetadata, TagTree};

use crate::error::ExtractError;
use crate::record::GeoPoint;

/// Turns raw file bytes into a GPS position
pub trait MetadataDecoder {
    /// Decode the position embedded in `bytes`
    fn decode(&self, bytes: &[u8]) -> Result<GeoPoint, ExtractError>;
}

impl<D: MetadataDecoder + ?Sized> MetadataDecoder for &D {
    fn decode(&self, bytes: &[u8]) -> Result<GeoPoint, ExtractError> {
        (**self).decode(bytes)
    }
}
