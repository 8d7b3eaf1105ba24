//! Mock implementations for testing

pub mod decoder;

pub use decoder::{MockDecoder, MockOutcome};
