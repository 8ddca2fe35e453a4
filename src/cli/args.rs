//! CLI argument parsing.
//!
//! Extracted to enable comprehensive testing of argument parsing logic.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a headless simulation
    Run {
        /// Path to the configuration YAML file; `None` uses defaults.
        config_path: Option<PathBuf>,
        /// Generation bound override.
        generations: Option<u64>,
        /// Optional seed override.
        seed_override: Option<u64>,
        /// Stream every frame instead of only the final snapshot.
        stream: bool,
    },
    /// List built-in patterns
    Patterns,
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(args),
            "patterns" => Command::Patterns,
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'run' command arguments.
    fn parse_run_command(args: &[String]) -> Command {
        let mut config_path = None;
        let mut generations = None;
        let mut seed_override = None;
        let mut stream = false;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--generations" | "-g" => {
                    if i + 1 < args.len() {
                        if let Ok(n) = args[i + 1].parse() {
                            generations = Some(n);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--seed" => {
                    if i + 1 < args.len() {
                        if let Ok(seed) = args[i + 1].parse() {
                            seed_override = Some(seed);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--stream" => {
                    stream = true;
                    i += 1;
                }
                other if !other.starts_with('-') && config_path.is_none() => {
                    config_path = Some(PathBuf::from(other));
                    i += 1;
                }
                _ => i += 1,
            }
        }

        Command::Run {
            config_path,
            generations,
            seed_override,
            stream,
        }
    }
}
