//! CLI command handlers.
//!
//! Execution logic for each CLI command, extracted to enable comprehensive
//! testing of command behavior.

use std::path::Path;
use std::process::ExitCode;

use crate::config::LifeConfig;
use crate::driver::{RenderLoop, TextSurface, WriterSurface};
use crate::engine::LifeEngine;
use crate::error::LifeResult;

use super::output::{print_help, print_patterns, print_run_report, print_version};
use super::{Args, Command};

/// Default generation count for a headless run with no bound.
const DEFAULT_HEADLESS_GENERATIONS: u64 = 100;

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            config_path,
            generations,
            seed_override,
            stream,
        } => run_simulation(config_path.as_deref(), generations, seed_override, stream),
        Command::Patterns => {
            print_patterns();
            ExitCode::SUCCESS
        }
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Run a headless simulation.
///
/// The loop is bounded: an explicit `--generations`, the config's
/// `max_generations`, or the default bound, in that order. No frame is
/// presented if the config cannot be loaded or the engine cannot be built.
#[must_use]
pub fn run_simulation(
    config_path: Option<&Path>,
    generations: Option<u64>,
    seed_override: Option<u64>,
    stream: bool,
) -> ExitCode {
    match run_simulation_inner(config_path, generations, seed_override, stream) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run_simulation_inner(
    config_path: Option<&Path>,
    generations: Option<u64>,
    seed_override: Option<u64>,
    stream: bool,
) -> LifeResult<()> {
    let mut config = match config_path {
        Some(path) => LifeConfig::load(path)?,
        None => LifeConfig::default(),
    };

    if let Some(seed) = seed_override {
        config.reproducibility.seed = seed;
    }

    let frames = generations
        .or(config.run.max_generations)
        .unwrap_or(DEFAULT_HEADLESS_GENERATIONS);

    let engine = LifeEngine::new(config)?;

    if stream {
        let stdout = std::io::stdout().lock();
        let mut render_loop = RenderLoop::new(engine, WriterSurface::new(stdout));
        render_loop.run_frames(frames)?;
        let (engine, _) = render_loop.into_parts();
        print_run_report(&engine, frames);
    } else {
        let mut render_loop = RenderLoop::new(engine, TextSurface::new());
        render_loop.run_frames(frames)?;
        let (engine, surface) = render_loop.into_parts();
        if let Some(frame) = surface.last_frame() {
            println!("{frame}\n");
        }
        print_run_report(&engine, frames);
    }

    Ok(())
}
