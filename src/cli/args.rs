//! CLI argument parsing.
//!
//! Hand-rolled parser over an iterator of strings so it can be tested without
//! touching `std::env::args()`.

use std::path::PathBuf;

use crate::solver::Strategy;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Solve an instance file.
    Run {
        /// Path to the instance YAML file.
        instance_path: PathBuf,
        /// Optional override of the instance's iteration count.
        iterations: Option<usize>,
        /// Optional single strategy instead of the instance's list.
        strategy: Option<Strategy>,
        /// Print each explored permutation count and full routes.
        verbose: bool,
    },
    /// Solve the bundled ten-city benchmark.
    Demo {
        /// Optional override of the iteration count.
        iterations: Option<usize>,
        /// Optional single strategy instead of all three.
        strategy: Option<Strategy>,
        /// Print each explored permutation count and full routes.
        verbose: bool,
    },
    /// Validate an instance file without solving it.
    Validate {
        /// Path to the instance YAML file.
        instance_path: PathBuf,
    },
    /// Show help.
    Help,
    /// Show version.
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
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

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(args),
            "demo" => Self::parse_demo_command(args),
            "validate" => Self::parse_validate_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    fn parse_run_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'run' command requires an instance path");
            return Command::Help;
        }

        let (iterations, strategy, verbose) = Self::parse_solve_options(&args[3..]);
        Command::Run {
            instance_path: PathBuf::from(&args[2]),
            iterations,
            strategy,
            verbose,
        }
    }

    fn parse_demo_command(args: &[String]) -> Command {
        let (iterations, strategy, verbose) = Self::parse_solve_options(&args[2..]);
        Command::Demo {
            iterations,
            strategy,
            verbose,
        }
    }

    fn parse_validate_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'validate' command requires an instance path");
            return Command::Help;
        }

        Command::Validate {
            instance_path: PathBuf::from(&args[2]),
        }
    }

    /// Shared option tail for `run` and `demo`.
    fn parse_solve_options(rest: &[String]) -> (Option<usize>, Option<Strategy>, bool) {
        let mut iterations = None;
        let mut strategy = None;
        let mut verbose = false;

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "--iterations" => {
                    if i + 1 < rest.len() {
                        if let Ok(n) = rest[i + 1].parse() {
                            iterations = Some(n);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--strategy" => {
                    if i + 1 < rest.len() {
                        match rest[i + 1].parse() {
                            Ok(s) => strategy = Some(s),
                            Err(e) => eprintln!("{e}"),
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "-v" | "--verbose" => {
                    verbose = true;
                    i += 1;
                }
                other => {
                    eprintln!("Ignoring unknown option: {other}");
                    i += 1;
                }
            }
        }

        (iterations, strategy, verbose)
    }
}
