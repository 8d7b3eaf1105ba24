//! Test utilities for GeoScan
//!
//! This crate provides image builders, scan fixtures and a mock metadata
//! decoder for testing GeoScan functionality.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::{ByteOrder, ExifImageBuilder, ImageContainer, ImageFixtureDir};
pub use mocks::{MockDecoder, MockOutcome};
