//! CLI command handling
//!
//! Merges flags, the config file and host defaults into [`RunSettings`], then
//! hands them to the orchestrator.

use std::time::Duration;

use crate::commands::RunArgs;
use crate::common::config::Config;
use crate::common::{paths, Result};
use crate::orchestrator::{Orchestrator, RunSettings, DEFAULT_INCREMENTS, DEFAULT_PORT};

/// Run all increments and return the process exit code
pub async fn dispatch(args: RunArgs) -> Result<u8> {
    let config = Config::load()?;
    let settings = resolve_settings(args, config);
    let strict = settings.strict;

    let summary = Orchestrator::with_processes(settings).run().await?;
    Ok(summary.exit_code(strict))
}

/// Resolve settings: flag, then config file, then host default
pub fn resolve_settings(args: RunArgs, config: Config) -> RunSettings {
    let run = config.run;

    let src_path = args
        .src_path
        .or(run.src_path)
        .unwrap_or_else(paths::default_src_path);
    let bin_path = args
        .bin_path
        .or(run.bin_path)
        .unwrap_or_else(|| paths::default_bin_path(&src_path));

    RunSettings {
        test_bin_path: args
            .test_bin_path
            .or(run.test_bin_path)
            .unwrap_or_else(paths::default_test_bin_path),
        increments: args
            .increments
            .or(run.increments)
            .unwrap_or(DEFAULT_INCREMENTS),
        bin_path,
        src_path,
        port: args.port.or(run.port).unwrap_or(DEFAULT_PORT),
        file_storage_path: args
            .file_storage_path
            .or(run.file_storage_path)
            .unwrap_or_else(paths::default_file_storage_path),
        timeout: Duration::from_secs(config.timeouts.increment_secs),
        strict: args.strict || run.strict,
    }
}
