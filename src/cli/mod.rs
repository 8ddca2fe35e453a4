//! CLI module for lifelab.
//!
//! All CLI logic lives here, extracted from main.rs to enable full test
//! coverage. The entry point `run_cli` is called from main.rs with parsed
//! arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::run_cli;
pub use output::{print_help, print_patterns, print_run_report, print_version};
