//! Launching the test executable
//!
//! The [`Launcher`] trait is the seam between the increment loop and the OS.
//! [`ProcessLauncher`] is the real implementation on top of tokio's process
//! support; tests substitute scripted launchers.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

use crate::common::{Error, Result};

/// How a launched process finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The process exited; `None` when it was terminated by a signal
    Exited(Option<i32>),
    /// The process outlived the timeout and was killed
    TimedOut,
}

/// Runs one process to completion or timeout
#[async_trait]
pub trait Launcher: Send + Sync {
    /// Run `program` with `args`, waiting at most `limit`
    ///
    /// Errors are reserved for failures to spawn or wait on the process.
    async fn launch(&self, program: &Path, args: &[String], limit: Duration) -> Result<Completion>;
}

/// Spawns real child processes that share this process's stdout and stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

#[async_trait]
impl Launcher for ProcessLauncher {
    async fn launch(&self, program: &Path, args: &[String], limit: Duration) -> Result<Completion> {
        let mut child = Command::new(program)
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::spawn_failed(program, e))?;

        tracing::debug!(
            pid = ?child.id(),
            program = %program.display(),
            "Spawned test process"
        );

        match timeout(limit, child.wait()).await {
            Ok(Ok(status)) => {
                tracing::debug!(?status, "Test process exited");
                Ok(Completion::Exited(status.code()))
            }
            Ok(Err(e)) => Err(Error::wait_failed(program, e)),
            Err(_) => {
                // kill() also reaps the child
                if let Err(e) = child.kill().await {
                    tracing::warn!(
                        program = %program.display(),
                        error = %e,
                        "Failed to kill timed out test process"
                    );
                }
                Ok(Completion::TimedOut)
            }
        }
    }
}
