//! A single increment: its arguments and how it ended

use std::fmt;

use super::settings::RunSettings;

/// How one increment ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exited with code 0
    Passed,
    /// Exited non-zero, or was terminated by a signal (`code` is `None`)
    Failed { code: Option<i32> },
    /// Did not finish within the timeout and was killed
    TimedOut,
    /// The process could not be spawned or waited on; ends the run
    SpawnError(String),
}

impl Outcome {
    /// Build the outcome of a process that exited on its own
    pub fn from_exit_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => Outcome::Passed,
            code => Outcome::Failed { code },
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Outcome::Passed)
    }

    /// Whether the loop must stop after this increment
    pub fn is_fatal(&self) -> bool {
        matches!(self, Outcome::SpawnError(_))
    }
}

/// Record of one increment, folded into the summary and then dropped
#[derive(Debug, Clone)]
pub struct IncrementRun {
    /// 1-based increment index
    pub index: u32,
    /// Arguments the test executable was started with
    pub args: Vec<String>,
    pub outcome: Outcome,
}

impl IncrementRun {
    /// Exit code of the process, if it exited on its own
    pub fn exit_code(&self) -> Option<i32> {
        match self.outcome {
            Outcome::Passed => Some(0),
            Outcome::Failed { code } => code,
            Outcome::TimedOut | Outcome::SpawnError(_) => None,
        }
    }
}

/// Name of the test case that covers increment `index`
pub fn test_case_name(index: u32) -> String {
    format!("TestIteration{}", index)
}

/// Arguments for increment `index` (1-based)
///
/// The test executable takes Go-test style flags: `--test.v`, an anchored
/// `--test.run` filter selecting exactly one case, and single-dash service
/// flags.
pub fn increment_args(settings: &RunSettings, index: u32) -> Vec<String> {
    vec![
        "--test.v".to_string(),
        format!("--test.run=^{}$", test_case_name(index)),
        format!("-binary-path={}", settings.bin_path.display()),
        format!("-source-path={}", settings.src_path.display()),
        format!("-server-port={}", settings.port),
        format!(
            "-file-storage-path={}",
            settings.file_storage_path.display()
        ),
    ]
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => write!(f, "exited with code 0"),
            Outcome::Failed { code: Some(code) } => write!(f, "exited with code {}", code),
            Outcome::Failed { code: None } => write!(f, "terminated by signal"),
            Outcome::TimedOut => write!(f, "timed out"),
            Outcome::SpawnError(e) => write!(f, "error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn settings() -> RunSettings {
        RunSettings {
            test_bin_path: PathBuf::from("/opt/shortenertestbeta"),
            increments: 3,
            bin_path: PathBuf::from("/src/cmd/shortener/shortener"),
            src_path: PathBuf::from("/src"),
            port: 8080,
            file_storage_path: PathBuf::from("/tmp/cache.json"),
            timeout: Duration::from_secs(10),
            strict: false,
        }
    }

    #[test]
    fn test_increment_args() {
        let args = increment_args(&settings(), 2);
        assert_eq!(
            args,
            vec![
                "--test.v",
                "--test.run=^TestIteration2$",
                "-binary-path=/src/cmd/shortener/shortener",
                "-source-path=/src",
                "-server-port=8080",
                "-file-storage-path=/tmp/cache.json",
            ]
        );
    }

    #[test]
    fn test_filter_is_anchored_per_index() {
        let settings = settings();
        for index in 1..=12 {
            let args = increment_args(&settings, index);
            assert_eq!(args[1], format!("--test.run=^TestIteration{}$", index));
        }
    }

    #[test]
    fn test_outcome_from_exit_code() {
        assert_eq!(Outcome::from_exit_code(Some(0)), Outcome::Passed);
        assert_eq!(
            Outcome::from_exit_code(Some(1)),
            Outcome::Failed { code: Some(1) }
        );
        assert_eq!(
            Outcome::from_exit_code(None),
            Outcome::Failed { code: None }
        );
    }

    #[test]
    fn test_outcome_classification() {
        assert!(!Outcome::Passed.is_failure());
        assert!(Outcome::TimedOut.is_failure());
        assert!(!Outcome::TimedOut.is_fatal());
        assert!(!Outcome::Failed { code: Some(2) }.is_fatal());
        assert!(Outcome::SpawnError("denied".to_string()).is_fatal());
    }

    #[test]
    fn test_exit_code_absent_without_exit() {
        let run = IncrementRun {
            index: 1,
            args: Vec::new(),
            outcome: Outcome::TimedOut,
        };
        assert_eq!(run.exit_code(), None);

        let run = IncrementRun {
            index: 2,
            args: Vec::new(),
            outcome: Outcome::Failed { code: Some(3) },
        };
        assert_eq!(run.exit_code(), Some(3));
    }
}
