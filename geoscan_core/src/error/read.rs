//! Failures reading an image file from disk

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An image file that could not be read
#[derive(Error, Debug)]
#[error("{} ({})", path.display(), reason_text(*reason, source))]
pub struct ReadError {
    /// Broad reason, used for user-facing wording
    pub reason: ReadFailure,
    /// File the scan tried to open
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Broad classes of read failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFailure {
    /// The entry disappeared or is a dangling symlink
    Missing,
    PermissionDenied,
    /// Anything else the OS reported
    Other,
}

impl From<io::ErrorKind> for ReadFailure {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::Missing,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Other,
        }
    }
}

impl ReadError {
    /// Wrap the OS error raised while reading `path`
    pub fn new(path: &Path, source: io::Error) -> Self {
        Self {
            reason: source.kind().into(),
            path: path.to_path_buf(),
            source,
        }
    }
}

fn reason_text(reason: ReadFailure, source: &io::Error) -> String {
    match reason {
        ReadFailure::Missing => "file vanished or is a broken link".to_string(),
        ReadFailure::PermissionDenied => "permission denied".to_string(),
        ReadFailure::Other => source.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_reason_from_kind() {
        let missing = ReadError::new(
            Path::new("images/gone.jpg"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(missing.reason, ReadFailure::Missing);
        assert_eq!(
            missing.to_string(),
            "images/gone.jpg (file vanished or is a broken link)"
        );

        let locked = ReadError::new(
            Path::new("images/locked.png"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(locked.reason, ReadFailure::PermissionDenied);
        assert!(locked.to_string().ends_with("(permission denied)"));
    }

    #[test]
    fn test_other_failure_keeps_os_message() {
        let error = ReadError::new(Path::new("images/a.gif"), io::Error::other("short read"));

        assert_eq!(error.reason, ReadFailure::Other);
        assert_eq!(error.to_string(), "images/a.gif (short read)");
        assert_eq!(error.source().unwrap().to_string(), "short read");
    }
}
