//! CLI command handlers.

use std::path::Path;
use std::process::ExitCode;

use crate::harness::run_strategies;
use crate::instance::Instance;
use crate::solver::Strategy;

use super::output::{print_help, print_summaries, print_version};
use super::{Args, Command};

/// Main CLI entry point: dispatch to the handler for the parsed command.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            instance_path,
            iterations,
            strategy,
            verbose,
        } => match Instance::from_yaml_file(&instance_path) {
            Ok(instance) => solve_instance(&instance, iterations, strategy, verbose),
            Err(e) => {
                eprintln!("Error loading {}: {e}", instance_path.display());
                ExitCode::from(1)
            }
        },
        Command::Demo {
            iterations,
            strategy,
            verbose,
        } => solve_instance(&Instance::canada10(), iterations, strategy, verbose),
        Command::Validate { instance_path } => validate_instance(&instance_path),
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

/// Run the harness over one instance and print the results.
fn solve_instance(
    instance: &Instance,
    iterations: Option<usize>,
    strategy: Option<Strategy>,
    verbose: bool,
) -> ExitCode {
    let iterations = iterations.unwrap_or(instance.harness.iterations);
    let strategies: Vec<Strategy> = match strategy {
        Some(s) => vec![s],
        None => instance.harness.strategies.clone(),
    };

    match run_strategies(instance, &strategies, iterations) {
        Ok(summaries) => {
            print_summaries(instance, &summaries, verbose);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Validate an instance file without solving it.
fn validate_instance(path: &Path) -> ExitCode {
    match Instance::from_yaml_file(path) {
        Ok(instance) => {
            println!(
                "OK: {} ({} cities, anchor {})",
                instance.meta.id,
                instance.city_count(),
                instance.anchor
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid instance {}: {e}", path.display());
            ExitCode::from(1)
        }
    }
}
