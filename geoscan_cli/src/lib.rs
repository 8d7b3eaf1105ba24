//! GeoScan CLI library
//!
//! Exposes the command line pieces of GeoScan (argument parsing, image
//! discovery, report writers and the scan orchestrator) for integration
//! testing and reuse.

pub mod cli;
pub mod error;
pub mod file_discovery;
pub mod orchestrators;
pub mod output;
pub mod terminal;

pub use cli::Cli;
pub use error::{CliError, CliResult, ExitCode};
pub use orchestrators::{ScanOptions, ScanOrchestrator, ScanOutcome};
