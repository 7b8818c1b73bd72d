//! Resolved run settings

use std::path::PathBuf;
use std::time::Duration;

/// Default number of increments
pub const DEFAULT_INCREMENTS: u32 = 9;

/// Default service port
pub const DEFAULT_PORT: u16 = 8080;

/// Default per-increment timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything one run needs, fixed before the first increment starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// External test executable
    pub test_bin_path: PathBuf,
    /// Number of increments, always at least 1
    pub increments: u32,
    /// Service binary, passed through to the test executable
    pub bin_path: PathBuf,
    /// Service source root, passed through to the test executable
    pub src_path: PathBuf,
    /// Service port, passed through to the test executable
    pub port: u16,
    /// Service cache file, passed through to the test executable
    pub file_storage_path: PathBuf,
    /// Time one increment may run before it is killed
    pub timeout: Duration,
    /// Exit non-zero when any increment fails
    pub strict: bool,
}
