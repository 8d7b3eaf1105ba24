//! EXIF decoder built on `kamadak-exif`

use super::MetadataDecoder;
use super::gps::{hemisphere_sign, rational_triple_to_degrees};
use crate::error::ExtractError;
use crate::record::GeoPoint;
use exif::{Context, Exif, In, Tag};
use log::trace;
use std::io::Cursor;

const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];
const TIFF_HEADER_LE: [u8; 4] = *b"II*\0";
const TIFF_HEADER_BE: [u8; 4] = *b"MM\0*";

/// A TIFF-structured EXIF block cut out of an image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMetadata(Vec<u8>);

impl RawMetadata {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

/// Parsed tag index of an EXIF block
pub struct TagTree {
    exif: Exif,
}

/// View over the GPS IFD of the primary image
pub struct GpsInfo<'a> {
    exif: &'a Exif,
}

/// Production [`MetadataDecoder`] backed by `kamadak-exif`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifDecoder;

impl ExifDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Locate the embedded EXIF block
    ///
    /// JPEG files are walked segment by segment for the APP1 `Exif` payload.
    /// Anything else (or a JPEG without that segment) is searched for a TIFF
    /// header, which also finds PNG `eXIf` chunks and GIF application data.
    pub fn find_metadata_block(&self, bytes: &[u8]) -> Result<RawMetadata, ExtractError> {
        if bytes.starts_with(&JPEG_SOI) {
            match exif::get_exif_attr_from_jpeg(&mut Cursor::new(bytes)) {
                Ok(block) => return Ok(RawMetadata(block)),
                Err(e) => trace!("JPEG segment scan found no Exif payload: {e}"),
            }
        }

        find_tiff_header(bytes)
            .map(|offset| {
                trace!("TIFF header found at byte offset {offset}");
                RawMetadata(bytes[offset..].to_vec())
            })
            .ok_or(ExtractError::NoMetadata)
    }

    /// Parse a metadata block into a tag tree
    pub fn parse_tags(&self, block: RawMetadata) -> Result<TagTree, ExtractError> {
        let exif = exif::Reader::new().read_raw(block.into_inner())?;

        trace!("parsed {} EXIF field(s)", exif.fields().len());
        Ok(TagTree { exif })
    }
}

impl MetadataDecoder for ExifDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<GeoPoint, ExtractError> {
        let block = self.find_metadata_block(bytes)?;
        let tags = self.parse_tags(block)?;
        tags.gps_info()?.coordinates()
    }
}

impl TagTree {
    /// The GPS sub-IFD of the primary image, if it carries any tags
    pub fn gps_info(&self) -> Result<GpsInfo<'_>, ExtractError> {
        let has_gps = self
            .exif
            .fields()
            .any(|field| field.ifd_num == In::PRIMARY && field.tag.context() == Context::Gps);

        if has_gps {
            Ok(GpsInfo { exif: &self.exif })
        } else {
            Err(ExtractError::NoGps)
        }
    }
}

impl GpsInfo<'_> {
    /// Signed latitude/longitude in decimal degrees
    pub fn coordinates(&self) -> Result<GeoPoint, ExtractError> {
        let latitude = self.axis(Tag::GPSLatitude, Tag::GPSLatitudeRef, b'N', b'S')?;
        let longitude = self.axis(Tag::GPSLongitude, Tag::GPSLongitudeRef, b'E', b'W')?;

        Ok(GeoPoint::new(latitude, longitude))
    }

    fn axis(
        &self,
        tag: Tag,
        reference: Tag,
        positive: u8,
        negative: u8,
    ) -> Result<f64, ExtractError> {
        let field = self
            .exif
            .get_field(tag, In::PRIMARY)
            .ok_or_else(|| ExtractError::decode(format!("{tag} is missing")))?;
        let magnitude = rational_triple_to_degrees(&field.value)
            .map_err(|reason| ExtractError::decode(format!("{tag}: {reason}")))?;

        let reference_field = self
            .exif
            .get_field(reference, In::PRIMARY)
            .ok_or_else(|| ExtractError::decode(format!("{reference} is missing")))?;
        let sign = hemisphere_sign(&reference_field.value, positive, negative)
            .map_err(|reason| ExtractError::decode(format!("{reference}: {reason}")))?;

        Ok(sign * magnitude)
    }
}

/// Offset of the first TIFF byte-order header in `bytes`
fn find_tiff_header(bytes: &[u8]) -> Option<usize> {
    bytes
        .windows(TIFF_HEADER_LE.len())
        .position(|window| window == TIFF_HEADER_LE || window == TIFF_HEADER_BE)
}
