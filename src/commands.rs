//! CLI argument definitions
//!
//! Flag names keep the underscore spelling the increment scripts have always
//! used (`--test_bin_path`, not `--test-bin-path`).

use clap::Args;
use std::path::PathBuf;

/// Flags for a run; anything left unset falls back to the config file, then
/// to a default derived from the host
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Path to the increment test executable [default: shortenertestbeta on PATH]
    #[arg(long = "test_bin_path", value_name = "PATH")]
    pub test_bin_path: Option<PathBuf>,

    /// Number of increments to run [default: 9]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub increments: Option<u32>,

    /// Path to the service binary [default: <src_path>/cmd/shortener/shortener]
    #[arg(long = "bin_path", value_name = "PATH")]
    pub bin_path: Option<PathBuf>,

    /// Path to the service sources [default: current directory]
    #[arg(long = "src_path", value_name = "PATH")]
    pub src_path: Option<PathBuf>,

    /// Port the service listens on [default: 8080]
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Path to the service's URL cache file [default: <temp dir>/cache.json]
    #[arg(long = "file_storage_path", value_name = "PATH")]
    pub file_storage_path: Option<PathBuf>,

    /// Exit with code 3 when any increment fails
    #[arg(long)]
    pub strict: bool,
}
