//! Synthetic image builders carrying EXIF GPS tags
//!
//! Produces the smallest byte streams that real EXIF readers accept: a TIFF
//! header, IFD0 with an optional GPS IFD pointer, and the GPS IFD itself,
//! wrapped in the requested container.

const TAG_ORIENTATION: u16 = 0x0112;
const TAG_GPS_IFD_POINTER: u16 = 0x8825;
const TAG_GPS_LATITUDE_REF: u16 = 0x0001;
const TAG_GPS_LATITUDE: u16 = 0x0002;
const TAG_GPS_LONGITUDE_REF: u16 = 0x0003;
const TAG_GPS_LONGITUDE: u16 = 0x0004;

const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

/// Fixed denominator used to store decimal degrees as a rational
const DEGREE_SCALE: u32 = 10_000_000;

/// Byte order of the generated TIFF structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    LittleEndian,
    BigEndian,
}

/// File container wrapping the EXIF block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageContainer {
    /// JPEG with an APP1 `Exif` segment
    Jpeg,
    /// PNG with an `eXIf` chunk
    Png,
    /// GIF89a with the block in a comment extension
    Gif,
    /// Bare TIFF bytes
    Raw,
}

/// Builder for image bytes with optional GPS metadata
#[derive(Debug, Clone, Default)]
pub struct ExifImageBuilder {
    byte_order: ByteOrder,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

struct IfdEntry {
    tag: u16,
    kind: u16,
    count: u32,
    /// Inline value, left-justified in the 4-byte slot
    inline: [u8; 4],
    /// Out-of-line payload, placed in the data area
    payload: Option<Vec<u8>>,
}

impl ExifImageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store both coordinates (signed decimal degrees, up to 7 decimals)
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Store a latitude without a longitude, producing an undecodable GPS IFD
    pub fn with_latitude_only(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = None;
        self
    }

    pub fn byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Image bytes without any metadata block
    pub fn plain(container: ImageContainer) -> Vec<u8> {
        match container {
            ImageContainer::Jpeg => vec![0xFF, 0xD8, 0xFF, 0xD9],
            ImageContainer::Png => png_bytes(None),
            ImageContainer::Gif => gif_bytes(None),
            ImageContainer::Raw => Vec::new(),
        }
    }

    /// Build the image bytes
    pub fn build(&self, container: ImageContainer) -> Vec<u8> {
        let tiff = self.build_tiff();
        match container {
            ImageContainer::Jpeg => jpeg_bytes(&tiff),
            ImageContainer::Png => png_bytes(Some(&tiff)),
            ImageContainer::Gif => gif_bytes(Some(&tiff)),
            ImageContainer::Raw => tiff,
        }
    }

    /// Build the bare TIFF/EXIF block
    pub fn build_tiff(&self) -> Vec<u8> {
        let gps_entries = self.gps_entries();

        let mut ifd0 = vec![IfdEntry {
            tag: TAG_ORIENTATION,
            kind: TYPE_SHORT,
            count: 1,
            inline: self.short_slot(1),
            payload: None,
        }];

        let ifd0_offset = 8u32;
        let ifd0_size = ifd_size(ifd0.len() + usize::from(!gps_entries.is_empty()));
        let gps_offset = ifd0_offset + ifd0_size;

        if !gps_entries.is_empty() {
            ifd0.push(IfdEntry {
                tag: TAG_GPS_IFD_POINTER,
                kind: TYPE_LONG,
                count: 1,
                inline: self.u32_bytes(gps_offset),
                payload: None,
            });
        }

        let mut out = Vec::new();
        match self.byte_order {
            ByteOrder::LittleEndian => out.extend_from_slice(b"II"),
            ByteOrder::BigEndian => out.extend_from_slice(b"MM"),
        }
        out.extend_from_slice(&self.u16_bytes(42));
        out.extend_from_slice(&self.u32_bytes(ifd0_offset));

        self.write_ifd(&mut out, &ifd0, ifd0_offset + ifd0_size);
        if !gps_entries.is_empty() {
            let data_offset = gps_offset + ifd_size(gps_entries.len());
            self.write_ifd(&mut out, &gps_entries, data_offset);
        }

        out
    }

    fn gps_entries(&self) -> Vec<IfdEntry> {
        let mut entries = Vec::new();
        if let Some(latitude) = self.latitude {
            let letter = if latitude < 0.0 { b'S' } else { b'N' };
            entries.push(self.reference_entry(TAG_GPS_LATITUDE_REF, letter));
            entries.push(self.coordinate_entry(TAG_GPS_LATITUDE, latitude));
        }
        if let Some(longitude) = self.longitude {
            let letter = if longitude < 0.0 { b'W' } else { b'E' };
            entries.push(self.reference_entry(TAG_GPS_LONGITUDE_REF, letter));
            entries.push(self.coordinate_entry(TAG_GPS_LONGITUDE, longitude));
        }
        entries
    }

    fn reference_entry(&self, tag: u16, letter: u8) -> IfdEntry {
        IfdEntry {
            tag,
            kind: TYPE_ASCII,
            count: 2,
            inline: [letter, 0, 0, 0],
            payload: None,
        }
    }

    fn coordinate_entry(&self, tag: u16, value: f64) -> IfdEntry {
        let degrees = (value.abs() * f64::from(DEGREE_SCALE)).round() as u32;
        let mut payload = Vec::with_capacity(24);
        for (num, denom) in [(degrees, DEGREE_SCALE), (0, 1), (0, 1)] {
            payload.extend_from_slice(&self.u32_bytes(num));
            payload.extend_from_slice(&self.u32_bytes(denom));
        }

        IfdEntry {
            tag,
            kind: TYPE_RATIONAL,
            count: 3,
            inline: [0; 4],
            payload: Some(payload),
        }
    }

    /// Append an IFD whose out-of-line data immediately follows it
    fn write_ifd(&self, out: &mut Vec<u8>, entries: &[IfdEntry], data_offset: u32) {
        let mut data = Vec::new();

        out.extend_from_slice(&self.u16_bytes(entries.len() as u16));
        for entry in entries {
            out.extend_from_slice(&self.u16_bytes(entry.tag));
            out.extend_from_slice(&self.u16_bytes(entry.kind));
            out.extend_from_slice(&self.u32_bytes(entry.count));
            match &entry.payload {
                Some(payload) => {
                    let offset = data_offset + data.len() as u32;
                    out.extend_from_slice(&self.u32_bytes(offset));
                    data.extend_from_slice(payload);
                }
                None => out.extend_from_slice(&entry.inline),
            }
        }
        // No next IFD
        out.extend_from_slice(&self.u32_bytes(0));
        out.extend_from_slice(&data);
    }

    fn short_slot(&self, value: u16) -> [u8; 4] {
        let [a, b] = self.u16_bytes(value);
        [a, b, 0, 0]
    }

    fn u16_bytes(&self, value: u16) -> [u8; 2] {
        match self.byte_order {
            ByteOrder::LittleEndian => value.to_le_bytes(),
            ByteOrder::BigEndian => value.to_be_bytes(),
        }
    }

    fn u32_bytes(&self, value: u32) -> [u8; 4] {
        match self.byte_order {
            ByteOrder::LittleEndian => value.to_le_bytes(),
            ByteOrder::BigEndian => value.to_be_bytes(),
        }
    }
}

fn ifd_size(entries: usize) -> u32 {
    (2 + entries * 12 + 4) as u32
}

fn jpeg_bytes(tiff: &[u8]) -> Vec<u8> {
    let segment_len = (2 + 6 + tiff.len()) as u16;

    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

fn png_bytes(tiff: Option<&[u8]>) -> Vec<u8> {
    let mut out = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    // 1x1 truecolor, 8 bits per channel
    let ihdr = [0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0];
    push_png_chunk(&mut out, b"IHDR", &ihdr);
    if let Some(tiff) = tiff {
        push_png_chunk(&mut out, b"eXIf", tiff);
    }
    push_png_chunk(&mut out, b"IEND", &[]);
    out
}

fn push_png_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(kind);
    hasher.update(data);

    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    out.extend_from_slice(&hasher.finalize().to_be_bytes());
}

fn gif_bytes(tiff: Option<&[u8]>) -> Vec<u8> {
    let mut out = b"GIF89a".to_vec();
    // Logical screen descriptor: 1x1, no global color table
    out.extend_from_slice(&[1, 0, 1, 0, 0, 0, 0]);

    if let Some(tiff) = tiff {
        assert!(
            tiff.len() <= u8::MAX as usize,
            "EXIF block must fit a single GIF sub-block"
        );
        out.extend_from_slice(&[0x21, 0xFE, tiff.len() as u8]);
        out.extend_from_slice(tiff);
        out.push(0x00);
    }

    out.push(0x3B);
    out
}
