//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::{config_path, CONFIG_ENV};
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Run defaults, each overridable from the command line
    #[serde(default)]
    pub run: RunDefaults,

    /// Timeout settings
    #[serde(default)]
    pub timeouts: Timeouts,
}

/// Values that fill in command-line flags left unset
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RunDefaults {
    pub test_bin_path: Option<PathBuf>,
    pub increments: Option<u32>,
    pub bin_path: Option<PathBuf>,
    pub src_path: Option<PathBuf>,
    pub port: Option<u16>,
    pub file_storage_path: Option<PathBuf>,
    /// Exit non-zero when any increment fails
    #[serde(default)]
    pub strict: bool,
}

/// Timeout settings in seconds
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Timeouts {
    /// Time one increment may run before it is killed
    #[serde(default = "default_increment")]
    pub increment_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            increment_secs: default_increment(),
        }
    }
}

fn default_increment() -> u64 {
    10
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if the platform config file doesn't
    /// exist. A file named by `INCREMENT_RUNNER_CONFIG` must exist.
    pub fn load() -> Result<Self> {
        let required = std::env::var_os(CONFIG_ENV).is_some();
        match config_path() {
            Some(path) if required || path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.run.increments == Some(0) {
            return Err(super::Error::Config(
                "run.increments must be at least 1".to_string(),
            ));
        }
        if self.timeouts.increment_secs == 0 {
            return Err(super::Error::Config(
                "timeouts.increment_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.timeouts.increment_secs, 10);
        assert!(config.run.increments.is_none());
        assert!(!config.run.strict);
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
[run]
test_bin_path = "/opt/tests/shortenertestbeta"
increments = 12
port = 9090
file_storage_path = "/var/tmp/urls.json"
strict = true

[timeouts]
increment_secs = 30
"#,
        )
        .unwrap();

        assert_eq!(
            config.run.test_bin_path,
            Some(PathBuf::from("/opt/tests/shortenertestbeta"))
        );
        assert_eq!(config.run.increments, Some(12));
        assert_eq!(config.run.port, Some(9090));
        assert!(config.run.strict);
        assert!(config.run.bin_path.is_none());
        assert_eq!(config.timeouts.increment_secs, 30);
    }

    #[test]
    fn test_zero_increments_rejected() {
        let err = Config::parse("[run]\nincrements = 0\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::parse("[timeouts]\nincrement_secs = 0\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::parse("[run]\nincremnts = 3\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
