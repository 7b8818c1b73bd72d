//! The increment loop
//!
//! Increments run strictly one after another in ascending order. A non-zero
//! exit or a timeout marks the run as failing and moves on; a spawn or wait
//! error marks it failing and stops the loop.

use std::path::Path;

use colored::Colorize;

use crate::common::{Error, Result};

use super::increment::{increment_args, IncrementRun, Outcome};
use super::launcher::{Completion, Launcher, ProcessLauncher};
use super::settings::RunSettings;

/// Exit code used in strict mode when any increment failed
pub const STRICT_FAILURE_EXIT_CODE: u8 = 3;

/// Aggregate result of a run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Spawn attempts made, including one that failed to spawn
    pub attempted: u32,
    pub passed: u32,
    /// Non-zero exits and signal terminations
    pub failed: u32,
    pub timed_out: u32,
    /// Set by the first failing increment and never cleared
    pub has_failures: bool,
    /// The loop stopped early on a spawn or wait error
    pub aborted: bool,
}

impl RunSummary {
    /// Fold one increment into the summary
    pub fn record(&mut self, run: &IncrementRun) {
        self.attempted += 1;
        match run.outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed { .. } => self.failed += 1,
            Outcome::TimedOut => self.timed_out += 1,
            Outcome::SpawnError(_) => self.aborted = true,
        }
        if run.outcome.is_failure() {
            self.has_failures = true;
        }
    }

    /// Process exit code for a completed run
    ///
    /// Failing tests only change the exit code in strict mode.
    pub fn exit_code(&self, strict: bool) -> u8 {
        if strict && self.has_failures {
            STRICT_FAILURE_EXIT_CODE
        } else {
            0
        }
    }
}

/// Check that the test executable exists and is a regular file
pub fn ensure_test_binary(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::TestBinaryNotFound(path.to_path_buf()))
    }
}

/// Drives the test executable through every increment
pub struct Orchestrator<L = ProcessLauncher> {
    settings: RunSettings,
    launcher: L,
}

impl Orchestrator<ProcessLauncher> {
    /// Orchestrator that spawns real processes
    pub fn with_processes(settings: RunSettings) -> Self {
        Self::new(settings, ProcessLauncher)
    }
}

impl<L: Launcher> Orchestrator<L> {
    pub fn new(settings: RunSettings, launcher: L) -> Self {
        Self { settings, launcher }
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Run every increment and print the summary
    ///
    /// Only a missing test executable is returned as an error; everything
    /// that happens inside the loop ends up in the summary.
    pub async fn run(&self) -> Result<RunSummary> {
        ensure_test_binary(&self.settings.test_bin_path)?;
        tracing::debug!(settings = ?self.settings, "Starting increment run");

        let mut summary = RunSummary::default();
        for index in 1..=self.settings.increments {
            let run = self.run_increment(index).await;
            summary.record(&run);
            if run.outcome.is_fatal() {
                tracing::debug!(index, "Stopping after fatal increment error");
                break;
            }
        }

        print_summary(&summary);
        Ok(summary)
    }

    /// Run a single increment
    async fn run_increment(&self, index: u32) -> IncrementRun {
        let program = &self.settings.test_bin_path;
        let args = increment_args(&self.settings, index);

        println!(
            "\n{} {}/{}: {} {}",
            "Running increment".cyan().bold(),
            index,
            self.settings.increments,
            program.display(),
            args.join(" ").dimmed()
        );

        let outcome = match self
            .launcher
            .launch(program, &args, self.settings.timeout)
            .await
        {
            Ok(Completion::Exited(code)) => Outcome::from_exit_code(code),
            Ok(Completion::TimedOut) => Outcome::TimedOut,
            Err(e) => Outcome::SpawnError(e.to_string()),
        };

        let run = IncrementRun {
            index,
            args,
            outcome,
        };
        tracing::debug!(index, exit_code = ?run.exit_code(), "Increment finished");
        self.print_outcome(&run);
        run
    }

    fn print_outcome(&self, run: &IncrementRun) {
        match &run.outcome {
            Outcome::Passed => {
                println!("  {} Increment {} {}", "✓".green(), run.index, run.outcome);
            }
            Outcome::Failed { .. } => {
                println!("  {} Increment {} {}", "✗".red(), run.index, run.outcome);
            }
            Outcome::TimedOut => {
                println!(
                    "  {} Increment {} did not finish within {} seconds and was killed",
                    "✗".red(),
                    run.index,
                    self.settings.timeout.as_secs()
                );
            }
            Outcome::SpawnError(e) => {
                println!(
                    "  {} Increment {} could not run: {}",
                    "✗".red(),
                    run.index,
                    e
                );
            }
        }
    }
}

fn print_summary(summary: &RunSummary) {
    let counts = format!(
        "{} run, {} passed, {} failed, {} timed out",
        summary.attempted, summary.passed, summary.failed, summary.timed_out
    );

    if summary.has_failures {
        println!("\n{} {}", "There are failing tests".red().bold(), counts.dimmed());
        if summary.aborted {
            println!("  {}", "Remaining increments were skipped".yellow());
        }
    } else {
        println!(
            "\n{} {}",
            "All tests completed successfully".green().bold(),
            counts.dimmed()
        );
    }
}
