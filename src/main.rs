//! tourbench CLI - closed-tour solvers over pairwise cost matrices.

use std::process::ExitCode;

use tourbench::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
