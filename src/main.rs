//! lifelab CLI - headless Game of Life runner.

use std::process::ExitCode;

use lifelab::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
