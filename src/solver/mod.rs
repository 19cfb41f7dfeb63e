//! Tour-search strategies.
//!
//! Three strategies solve the same input, an `N`x`N` cost matrix, a city
//! list, and an anchor index that starts and ends the closed circuit:
//!
//! - [`exhaustive`]: enumerate every permutation of the non-anchor cities,
//!   then score each closed circuit and keep the cheapest.
//! - [`bounded`]: depth-first search with branch-and-bound pruning against a
//!   running incumbent; exact optimum, fewer completed permutations.
//! - [`greedy`]: nearest-neighbour construction; fast, no optimality
//!   guarantee, included as a baseline.
//!
//! All run state (incumbent, results collection, visitation) is owned by the
//! run itself and returned to the caller; nothing is process-wide, so
//! independent runs cannot contaminate each other. A single run is
//! synchronous and holds the matrix immutably for its whole duration.

pub mod bounded;
pub mod exhaustive;
pub mod greedy;

pub use bounded::BoundedSearch;
pub use exhaustive::ExhaustiveSearch;
pub use greedy::NearestNeighbour;

use serde::{Deserialize, Serialize};

use crate::error::{TourError, TourResult};
use crate::matrix::CostMatrix;
use crate::tour::Tour;

/// Solving strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Enumerate and score every permutation.
    Exhaustive,
    /// Branch-and-bound pruned search.
    Bounded,
    /// Nearest-neighbour heuristic.
    Greedy,
}

impl Strategy {
    /// All strategies in harness order: exhaustive first, then the heuristic
    /// baseline, then the pruned exact search.
    pub const ALL: [Self; 3] = [Self::Exhaustive, Self::Greedy, Self::Bounded];
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Exhaustive => "exhaustive",
            Self::Bounded => "bounded",
            Self::Greedy => "greedy",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Strategy {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exhaustive" => Ok(Self::Exhaustive),
            "bounded" => Ok(Self::Bounded),
            "greedy" => Ok(Self::Greedy),
            other => Err(TourError::config(format!(
                "unknown strategy '{other}' (expected exhaustive, bounded or greedy)"
            ))),
        }
    }
}

/// The best complete tour found so far during a search.
///
/// Replacement follows a strict-improvement rule: a candidate with a cost
/// equal to the current best does not replace it, so the first tour found
/// wins ties.
#[derive(Debug, Clone)]
pub struct Incumbent {
    best_cost: u64,
    best_tour: Option<Tour>,
}

impl Incumbent {
    /// Create an empty incumbent with an unbeatable cost.
    #[must_use]
    pub fn new() -> Self {
        Self {
            best_cost: u64::MAX,
            best_tour: None,
        }
    }

    /// Cost of the best tour so far, `u64::MAX` if none was recorded.
    #[must_use]
    pub fn best_cost(&self) -> u64 {
        self.best_cost
    }

    /// Offer a completed tour; it is adopted only on strict improvement.
    /// Returns whether the incumbent was replaced.
    pub fn offer(&mut self, tour: Tour, cost: u64) -> bool {
        if cost < self.best_cost {
            self.best_cost = cost;
            self.best_tour = Some(tour);
            true
        } else {
            false
        }
    }

    /// Consume the incumbent into `(best_tour, best_cost)`.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::NoSolution`] if no complete tour was ever offered.
    pub fn into_best(self) -> TourResult<(Tour, u64)> {
        match self.best_tour {
            Some(tour) => Ok((tour, self.best_cost)),
            None => Err(TourError::NoSolution),
        }
    }
}

impl Default for Incumbent {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    /// Cheapest closed tour found, anchor at both ends.
    pub best_tour: Tour,
    /// Its cost.
    pub best_cost: u64,
    /// Every complete tour the run recorded. All `k!` permutations in
    /// exhaustive mode; only the tours that survived pruning in bounded mode;
    /// empty for the greedy heuristic, which performs no search.
    pub explored: Vec<Tour>,
}

/// Solve with the selected strategy.
///
/// # Errors
///
/// Returns a precondition error for an out-of-range anchor or an empty
/// matrix, or [`TourError::NoSolution`] if the search recorded no tour.
pub fn solve(matrix: &CostMatrix, anchor: usize, strategy: Strategy) -> TourResult<SearchReport> {
    match strategy {
        Strategy::Exhaustive => ExhaustiveSearch::new(matrix, anchor)?.run(),
        Strategy::Bounded => BoundedSearch::new(matrix, anchor)?.run(),
        Strategy::Greedy => NearestNeighbour::new(matrix, anchor)?.run(),
    }
}

/// Shared entry preconditions: the matrix must be non-empty and the anchor in
/// range. Checked before any recursion begins.
pub(crate) fn check_entry(matrix: &CostMatrix, anchor: usize) -> TourResult<()> {
    if matrix.is_empty() {
        return Err(TourError::NoSolution);
    }
    if anchor >= matrix.len() {
        return Err(TourError::AnchorOutOfRange {
            anchor,
            count: matrix.len(),
        });
    }
    Ok(())
}
