//! Builders for test images and scan fixtures

pub mod exif_image;
pub mod fixture_dir;

pub use exif_image::{ByteOrder, ExifImageBuilder, ImageContainer};
pub use fixture_dir::ImageFixtureDir;
