//! Host-derived default paths
//!
//! Nothing here is a hardcoded absolute path: defaults are resolved from the
//! current directory, `PATH`, the system temp dir and the platform config dir.

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

/// Name used for the config directory
const APP_NAME: &str = "increment-runner";

/// Environment variable that points at an explicit config file
pub const CONFIG_ENV: &str = "INCREMENT_RUNNER_CONFIG";

/// Base name of the external increment test executable
pub const TEST_BINARY_NAME: &str = "shortenertestbeta";

/// Base name of the service binary built from the source tree
const SERVICE_BINARY_NAME: &str = "shortener";

/// File name of the service's cache file
const CACHE_FILE_NAME: &str = "cache.json";

/// Default test executable
///
/// Looks the binary up on `PATH` first, then falls back to the current
/// directory with the platform executable suffix.
pub fn default_test_bin_path() -> PathBuf {
    which::which(TEST_BINARY_NAME)
        .unwrap_or_else(|_| PathBuf::from(format!("{}{}", TEST_BINARY_NAME, EXE_SUFFIX)))
}

/// Default service source root: the current working directory
pub fn default_src_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Default service binary, `<src>/cmd/shortener/shortener[.exe]`
pub fn default_bin_path(src_path: &Path) -> PathBuf {
    src_path
        .join("cmd")
        .join(SERVICE_BINARY_NAME)
        .join(format!("{}{}", SERVICE_BINARY_NAME, EXE_SUFFIX))
}

/// Default cache file in the system temp dir
pub fn default_file_storage_path() -> PathBuf {
    std::env::temp_dir().join(CACHE_FILE_NAME)
}

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/increment-runner/`
/// - macOS: `~/Library/Application Support/increment-runner/`
/// - Windows: `%APPDATA%\increment-runner\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
///
/// `INCREMENT_RUNNER_CONFIG` wins over the platform location.
pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(explicit));
    }
    config_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_path_follows_source_root() {
        let bin = default_bin_path(Path::new("/work/shortener-src"));
        let expected = Path::new("/work/shortener-src")
            .join("cmd")
            .join("shortener")
            .join(format!("shortener{}", EXE_SUFFIX));
        assert_eq!(bin, expected);
    }

    #[test]
    fn test_file_storage_in_temp_dir() {
        let path = default_file_storage_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert_eq!(path.file_name().unwrap(), "cache.json");
    }

    #[test]
    fn test_test_bin_path_is_valid() {
        let path = default_test_bin_path();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(TEST_BINARY_NAME));
    }
}
