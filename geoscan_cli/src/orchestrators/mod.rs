//! Command orchestrators for business logic
//!
//! This module provides orchestrators that coordinate between the CLI layer
//! and the core library services.

pub mod scan_orchestrator;

pub use scan_orchestrator::{ScanOptions, ScanOrchestrator, ScanOutcome};
