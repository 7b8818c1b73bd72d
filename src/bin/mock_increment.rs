//! Mock increment test executable for integration testing
//!
//! Accepts the same flags as the real increment test binary and behaves
//! according to environment variables:
//!
//! - `MOCK_INCREMENT_LOG`: file that gets one tab-separated line of
//!   arguments per invocation
//! - `MOCK_INCREMENT_FAIL`: comma-separated increments that exit with code 1
//! - `MOCK_INCREMENT_HANG`: comma-separated increments that never finish
//! - `MOCK_INCREMENT_REMOVE_SELF`: increment after which this executable
//!   deletes itself, so the next spawn fails

use std::fs::OpenOptions;
use std::io::Write;
use std::time::Duration;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Ok(log) = std::env::var("MOCK_INCREMENT_LOG") {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log)
            .expect("open mock log");
        writeln!(file, "{}", args.join("\t")).expect("write mock log");
    }

    let Some(index) = args.iter().find_map(|arg| parse_filter(arg)) else {
        eprintln!("mock_increment: missing --test.run filter");
        std::process::exit(2);
    };

    println!("=== RUN   TestIteration{}", index);

    if listed("MOCK_INCREMENT_REMOVE_SELF", index) {
        let exe = std::env::current_exe().expect("current exe");
        std::fs::remove_file(exe).expect("remove mock executable");
    }

    if listed("MOCK_INCREMENT_HANG", index) {
        std::thread::sleep(Duration::from_secs(120));
    }

    if listed("MOCK_INCREMENT_FAIL", index) {
        println!("--- FAIL: TestIteration{}", index);
        std::process::exit(1);
    }

    println!("--- PASS: TestIteration{}", index);
}

/// Extract `N` from `--test.run=^TestIterationN$`
fn parse_filter(arg: &str) -> Option<u32> {
    arg.strip_prefix("--test.run=^TestIteration")?
        .strip_suffix('$')?
        .parse()
        .ok()
}

fn listed(var: &str, index: u32) -> bool {
    std::env::var(var)
        .map(|value| {
            value
                .split(',')
                .filter_map(|n| n.trim().parse::<u32>().ok())
                .any(|n| n == index)
        })
        .unwrap_or(false)
}
