//! Test run orchestration
//!
//! Spawns the external increment test executable once per increment, each
//! run bounded by a timeout, and folds the outcomes into a [`RunSummary`].

mod increment;
mod launcher;
mod runner;
mod settings;

pub use increment::{increment_args, test_case_name, IncrementRun, Outcome};
pub use launcher::{Completion, Launcher, ProcessLauncher};
pub use runner::{ensure_test_binary, Orchestrator, RunSummary, STRICT_FAILURE_EXIT_CODE};
pub use settings::{RunSettings, DEFAULT_INCREMENTS, DEFAULT_PORT, DEFAULT_TIMEOUT};
