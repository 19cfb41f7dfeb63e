//! Timing and repetition harness.
//!
//! Runs each selected strategy against one instance a configurable number of
//! times, wall-clock timing every run, and averages the elapsed time. The
//! search result is identical across repetitions (the computation is
//! deterministic and pure), so only the last report per strategy is kept.

use std::time::{Duration, Instant};

use crate::error::{TourError, TourResult};
use crate::instance::Instance;
use crate::solver::{solve, SearchReport, Strategy};

/// Outcome of repeatedly running one strategy.
#[derive(Debug, Clone)]
pub struct StrategySummary {
    /// The strategy that was run.
    pub strategy: Strategy,
    /// Report from the final repetition.
    pub report: SearchReport,
    /// Number of repetitions.
    pub runs: usize,
    /// Total wall-clock time across all repetitions.
    pub total_elapsed: Duration,
}

impl StrategySummary {
    /// Mean wall-clock time per repetition.
    #[must_use]
    pub fn mean_elapsed(&self) -> Duration {
        if self.runs == 0 {
            Duration::ZERO
        } else {
            self.total_elapsed / u32::try_from(self.runs).unwrap_or(u32::MAX)
        }
    }
}

/// Run `strategies` against `instance`, `iterations` times each.
///
/// # Errors
///
/// Returns a configuration error for a zero iteration count, a precondition
/// error for a malformed instance, or any error raised by a strategy run.
pub fn run_strategies(
    instance: &Instance,
    strategies: &[Strategy],
    iterations: usize,
) -> TourResult<Vec<StrategySummary>> {
    if iterations == 0 {
        return Err(TourError::config("iterations must be at least 1"));
    }

    let matrix = instance.cost_matrix()?;
    let anchor = instance.anchor;

    let mut summaries = Vec::with_capacity(strategies.len());
    for &strategy in strategies {
        let mut total_elapsed = Duration::ZERO;
        let mut last_report = None;

        for _ in 0..iterations {
            let started = Instant::now();
            let report = solve(&matrix, anchor, strategy)?;
            total_elapsed += started.elapsed();
            last_report = Some(report);
        }

        let report = last_report.ok_or(TourError::NoSolution)?;
        summaries.push(StrategySummary {
            strategy,
            report,
            runs: iterations,
            total_elapsed,
        });
    }

    Ok(summaries)
}
