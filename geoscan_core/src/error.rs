//! Error types for the GeoScan core library
//!
//! Every error here is scoped to a single image: the scan records it and
//! carries on with the next file.

pub mod extract;
pub mod read;

pub use self::extract::{ExtractError, ExtractErrorKind};
pub use self::read::{ReadError, ReadFailure};

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;
    use std::path::Path;

    #[test]
    fn test_read_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ExtractError::Read(ReadError::new(Path::new("images/locked.jpg"), io_error));

        let source = error.source().unwrap();
        assert!(source.to_string().contains("images/locked.jpg"));
        assert_eq!(source.source().unwrap().to_string(), "denied");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<ExtractError>();
        assert_sync::<ExtractError>();
    }
}
