//! Reads a question payload from stdin and writes the assembled record to stdout.
//!
//! Accepts either the full GraphQL response or the bare question object.
//! Diagnostics go to stderr; set `RUST_LOG=debug` to see them.

use std::io::{self, Read};
use std::process::ExitCode;

use rs_problem_extract::{assemble, ProblemSource};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut payload = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut payload) {
        error!(error = %err, "failed to read stdin");
        return ExitCode::FAILURE;
    }

    let source = match ProblemSource::from_json(&payload) {
        Ok(source) => source,
        Err(err) => {
            error!(error = %err, "invalid question payload");
            return ExitCode::FAILURE;
        }
    };

    match assemble(source).to_json_pretty() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "failed to serialize problem");
            ExitCode::FAILURE
        }
    }
}
