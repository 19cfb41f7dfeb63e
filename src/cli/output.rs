//! CLI output formatting.
//!
//! All console formatting lives here so the command handlers stay testable.

use crate::harness::StrategySummary;
use crate::instance::Instance;
use crate::solver::Strategy;
use crate::tour::Tour;

/// Print version information.
pub fn print_version() {
    println!("tourbench {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"tourbench - closed-tour solvers over pairwise cost matrices

USAGE:
    tourbench <COMMAND> [OPTIONS]

COMMANDS:
    run <instance.yaml>     Solve an instance file
        --iterations <N>    Override the instance's repetition count
        --strategy <S>      Run a single strategy (exhaustive, bounded, greedy)
        -v, --verbose       Print full routes and permutation counts

    demo                    Solve the bundled ten-city Canadian benchmark
        (same options as run)

    validate <instance.yaml> Check an instance file without solving it

    help                    Show this help message
    version                 Show version information

EXAMPLES:
    tourbench demo
    tourbench run instances/canada10.yaml --iterations 10
    tourbench run instances/canada10.yaml --strategy bounded -v
"
    );
}

/// Render a tour as city names joined by arrows.
#[must_use]
pub fn format_route(instance: &Instance, tour: &Tour) -> String {
    tour.stops()
        .iter()
        .map(|&stop| instance.city_name(stop).unwrap_or("?"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Print the harness results for one instance.
pub fn print_summaries(instance: &Instance, summaries: &[StrategySummary], verbose: bool) {
    println!("Instance: {} ({})", instance.meta.id, instance.meta.description);
    println!(
        "Cities: {}, anchor: {}",
        instance.city_count(),
        instance.city_name(instance.anchor).unwrap_or("?")
    );
    println!("----------------------------------------------------------------");

    for summary in summaries {
        println!("{}:", summary.strategy);
        if verbose || summary.strategy != Strategy::Greedy {
            println!("  complete permutations: {}", summary.report.explored.len());
        }
        println!("  route: {}", format_route(instance, &summary.report.best_tour));
        println!(
            "  cost: {} {}",
            summary.report.best_cost, instance.meta.units
        );
        if verbose {
            println!("  stops: {}", summary.report.best_tour);
        }
        println!(
            "  time: {:.3} ms avg over {} run(s)",
            summary.mean_elapsed().as_secs_f64() * 1000.0,
            summary.runs
        );
    }

    if let Some(optimal) = instance.meta.optimal_known {
        println!("----------------------------------------------------------------");
        println!("Known optimal: {} {}", optimal, instance.meta.units);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_route_uses_city_names() {
        let instance = Instance::canada10();
        let tour = Tour::from_stops(vec![9, 0, 9]);
        assert_eq!(
            format_route(&instance, &tour),
            "Halifax -> Vancouver -> Halifax"
        );
    }

    #[test]
    fn test_format_route_unknown_index() {
        let instance = Instance::canada10().truncated(2);
        let tour = Tour::from_stops(vec![0, 7, 0]);
        assert_eq!(
            format_route(&instance, &tour),
            "Vancouver -> ? -> Vancouver"
        );
    }
}
