//! Increment runner - runs an increment test executable stage by stage
//!
//! Spawns the test executable once per increment against the service under
//! test, with a timeout per increment, and reports the combined result.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use increment_runner::commands::RunArgs;
use increment_runner::{cli, common::logging};

#[derive(Parser)]
#[command(name = "increment-runner", about = "Run increment tests one stage at a time")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: RunArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init_cli();

    let cli = Cli::parse();

    match cli::dispatch(cli.args).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::from(e.exit_code())
        }
    }
}
