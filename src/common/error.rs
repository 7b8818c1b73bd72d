//! Error types for the increment runner
//!
//! Only [`Error::TestBinaryNotFound`] has its own exit code; everything else
//! that escapes the increment loop is treated as an unexpected error.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the increment runner
#[derive(Error, Debug)]
pub enum Error {
    // === Setup Errors ===
    #[error("Test binary '{}' not found", .0.display())]
    TestBinaryNotFound(PathBuf),

    // === Process Errors ===
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed while waiting for '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },
}

impl Error {
    /// Create a spawn error for the given program
    pub fn spawn_failed(program: &Path, source: io::Error) -> Self {
        Self::Spawn {
            program: program.display().to_string(),
            source,
        }
    }

    /// Create a wait error for the given program
    pub fn wait_failed(program: &Path, source: io::Error) -> Self {
        Self::Wait {
            program: program.display().to_string(),
            source,
        }
    }

    /// Process exit code this error maps to when it ends the run
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::TestBinaryNotFound(_) => 1,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_exit_code() {
        let err = Error::TestBinaryNotFound(PathBuf::from("/nope/tests"));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Test binary '/nope/tests' not found");
    }

    #[test]
    fn test_other_errors_exit_code() {
        assert_eq!(Error::Config("bad".to_string()).exit_code(), 2);
        let err = Error::spawn_failed(
            Path::new("tests"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Failed to spawn 'tests': denied");
    }
}
