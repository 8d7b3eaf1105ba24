//! File discovery module for finding image files
//!
//! This module walks a directory tree and reports every file whose name
//! carries one of the supported image extensions.

mod extensions;
mod walker;

pub use extensions::{SUPPORTED_IMAGE_EXTENSIONS, extension_of, is_supported_image_ext};
pub use walker::{FileDiscovery, FileDiscoveryOptions, discover_files};

use std::path::PathBuf;

/// Result of file discovery
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Path to the discovered file, prefixed with the walk root
    pub path: PathBuf,
    /// Size of the file in bytes
    pub size: u64,
}

/// Error type for file discovery operations
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to walk {}: {source}", path.display())]
    RootWalk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Result type for file discovery operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;
