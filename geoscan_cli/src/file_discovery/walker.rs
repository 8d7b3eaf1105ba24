//! Directory walker module for file discovery
//!
//! Provides streaming image discovery using walkdir. Entries are visited in
//! file-name order so repeated scans of the same tree yield the same sequence.

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use super::{DiscoveredFile, DiscoveryError, Result, extensions::is_supported_image_ext};

/// Options for file discovery
#[derive(Debug, Clone)]
pub struct FileDiscoveryOptions {
    /// Process directories recursively
    pub recursive: bool,
    /// Follow symbolic links
    pub follow_links: bool,
    /// Maximum depth for recursive search (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for FileDiscoveryOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            follow_links: false,
            max_depth: None,
        }
    }
}

impl FileDiscoveryOptions {
    /// Create new options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set recursive processing
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum depth for recursive search
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }
}

/// File discovery iterator for streaming image enumeration
pub struct FileDiscovery {
    /// Walker for directory traversal
    walker: walkdir::IntoIter,
    /// Set once the root itself failed, so the iterator stops afterwards
    failed: bool,
}

impl FileDiscovery {
    /// Create a new file discovery iterator rooted at `path`
    pub fn new(path: &Path, options: FileDiscoveryOptions) -> Result<Self> {
        if !path.exists() {
            return Err(DiscoveryError::PathNotFound(path.to_path_buf()));
        }

        if !path.is_dir() {
            return Err(DiscoveryError::NotADirectory(path.to_path_buf()));
        }

        let mut walker = WalkDir::new(path)
            .follow_links(options.follow_links)
            .sort_by_file_name();

        if !options.recursive {
            walker = walker.max_depth(1);
        } else if let Some(depth) = options.max_depth {
            walker = walker.max_depth(depth);
        }

        Ok(Self {
            walker: walker.into_iter(),
            failed: false,
        })
    }

    /// Check if an entry is an image we should yield
    fn should_include_entry(entry: &DirEntry) -> bool {
        // Directories are never reported; symlinks and other non-directories
        // are kept and fail later at read time if they are broken.
        if entry.file_type().is_dir() {
            return false;
        }

        is_supported_image_ext(&entry.path().to_string_lossy())
    }
}

impl Iterator for FileDiscovery {
    type Item = Result<DiscoveredFile>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            match self.walker.next()? {
                Ok(entry) => {
                    if !Self::should_include_entry(&entry) {
                        continue;
                    }

                    let size = match entry.metadata() {
                        Ok(metadata) => metadata.len(),
                        Err(e) => {
                            // The file is still worth attempting; reading it
                            // reports the real problem.
                            log::warn!("Failed to read metadata for {:?}: {}", entry.path(), e);
                            0
                        }
                    };

                    return Some(Ok(DiscoveredFile {
                        path: entry.path().to_path_buf(),
                        size,
                    }));
                }
                Err(e) if e.depth() == 0 => {
                    self.failed = true;
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_default();
                    return Some(Err(DiscoveryError::RootWalk {
                        path,
                        source: e,
                    }));
                }
                Err(e) => {
                    // Log walk errors but continue
                    log::warn!("Walk error: {e}");
                    continue;
                }
            }
        }
    }
}

/// Convenience function to discover files in a directory
pub fn discover_files(path: &Path, options: FileDiscoveryOptions) -> Result<Vec<DiscoveredFile>> {
    FileDiscovery::new(path, options)?.collect()
}
