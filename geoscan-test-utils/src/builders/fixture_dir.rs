//! Temporary working directories laid out like a real scan target

use super::exif_image::{ExifImageBuilder, ImageContainer};
use geoscan_core::DEFAULT_IMAGES_DIR;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary working directory holding an `images/` tree
///
/// The directory is removed when the value is dropped.
pub struct ImageFixtureDir {
    root: TempDir,
}

impl ImageFixtureDir {
    /// Create a working directory with an empty `images/` folder
    pub fn new() -> io::Result<Self> {
        let fixture = Self::without_images_dir()?;
        fs::create_dir(fixture.images_dir())?;
        Ok(fixture)
    }

    /// Create a working directory with no `images/` folder at all
    pub fn without_images_dir() -> io::Result<Self> {
        Ok(Self {
            root: TempDir::new()?,
        })
    }

    /// The working directory
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// The `images/` folder inside the working directory
    pub fn images_dir(&self) -> PathBuf {
        self.root().join(DEFAULT_IMAGES_DIR)
    }

    /// Write `contents` to `images/<relative>`, creating parent folders
    pub fn add_file(&self, relative: &str, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.images_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Add a JPEG carrying the given GPS position
    pub fn add_gps_jpeg(
        &self,
        relative: &str,
        latitude: f64,
        longitude: f64,
    ) -> io::Result<PathBuf> {
        let bytes = ExifImageBuilder::new()
            .with_coordinates(latitude, longitude)
            .build(ImageContainer::Jpeg);
        self.add_file(relative, &bytes)
    }

    /// Add an image of the given container type with no metadata
    pub fn add_plain_image(
        &self,
        relative: &str,
        container: ImageContainer,
    ) -> io::Result<PathBuf> {
        self.add_file(relative, &ExifImageBuilder::plain(container))
    }

    /// Path of a file in the working directory (outside `images/`)
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }
}
