//! CLI output formatting.
//!
//! All output formatting functions for the CLI, extracted to enable testing
//! of output generation.

use crate::engine::{LifeEngine, Pattern};

/// Print version information.
pub fn print_version() {
    println!("lifelab {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"lifelab - Deterministic Game of Life laboratory

USAGE:
    lifelab <COMMAND> [OPTIONS]

COMMANDS:
    run [config.yaml]           Run a headless simulation
        -g, --generations <N>   Number of generations to run
        --seed <N>              Override the configured seed
        --stream                Print every frame, not just the last

    patterns                    List built-in patterns

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    lifelab run
    lifelab run universe.yaml --generations 500
    lifelab run --seed 12345 --stream

The interactive viewer is a separate binary:
    life_tui [config.yaml]
"
    );
}

/// Print the names and sizes of built-in patterns.
pub fn print_patterns() {
    println!("Built-in patterns:");
    for name in Pattern::builtin_names() {
        if let Some(pattern) = Pattern::builtin(name) {
            println!(
                "  {:<10} {}x{}, {} live cells",
                name,
                pattern.width(),
                pattern.height(),
                pattern.cells().len()
            );
        }
    }
}

/// Print a summary of a finished headless run.
pub fn print_run_report(engine: &LifeEngine, requested_frames: u64) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Universe:   {}x{}", engine.universe().width(), engine.universe().height());
    println!("Seed:       {}", engine.config().reproducibility.seed);
    println!("Generation: {}", engine.generation().count());
    println!("Population: {}", engine.universe().population());
    match engine.halted() {
        Some(reason) => println!("Halted:     {reason}"),
        None => println!("Halted:     no (ran {requested_frames} frames)"),
    }
}
