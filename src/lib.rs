//! Increment runner
//!
//! Drives an external increment test executable against a service under
//! test, one increment at a time, and aggregates the results.

pub mod cli;
pub mod commands;
pub mod common;
pub mod orchestrator;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use orchestrator::{Orchestrator, RunSettings, RunSummary};
