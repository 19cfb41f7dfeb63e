//! Exhaustive permutation search.
//!
//! Enumerates every ordering of the non-anchor cities as a complete tour,
//! then runs a finishing pass that affixes the anchor to both ends of each
//! permutation, scores the closed circuits and keeps the cheapest. For `k`
//! non-anchor cities this produces exactly `k!` complete tours; runtime and
//! memory are both `O(k!)`.

use crate::error::TourResult;
use crate::matrix::CostMatrix;
use crate::tour::Tour;

use super::{check_entry, Incumbent, SearchReport};

/// Exhaustive enumeration over the non-anchor city set.
#[derive(Debug)]
pub struct ExhaustiveSearch<'m> {
    matrix: &'m CostMatrix,
    anchor: usize,
}

impl<'m> ExhaustiveSearch<'m> {
    /// Create a search over `matrix` anchored at `anchor`.
    ///
    /// # Errors
    ///
    /// Returns a precondition error for an empty matrix or an out-of-range
    /// anchor.
    pub fn new(matrix: &'m CostMatrix, anchor: usize) -> TourResult<Self> {
        check_entry(matrix, anchor)?;
        Ok(Self { matrix, anchor })
    }

    /// Run the search to completion.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::NoSolution`](crate::TourError::NoSolution) if no
    /// tour was recorded; with the entry preconditions already checked this
    /// cannot happen.
    pub fn run(&self) -> TourResult<SearchReport> {
        let mut remaining: Vec<usize> = (0..self.matrix.len())
            .filter(|&i| i != self.anchor)
            .collect();

        // Degenerate single-location instance: a trivial zero-edge tour.
        if remaining.is_empty() {
            let trivial = Tour::with_start(self.anchor);
            return Ok(SearchReport {
                best_tour: trivial.clone(),
                best_cost: 0,
                explored: vec![trivial],
            });
        }

        let mut permutations = Vec::new();
        self.permute(&Tour::new(), &mut remaining, &mut permutations);

        // Finishing pass: close every permutation through the anchor, score
        // it, and keep the cheapest (strict improvement, first found wins).
        let mut incumbent = Incumbent::new();
        let mut explored = Vec::with_capacity(permutations.len());
        for mut tour in permutations {
            tour.close_through(self.anchor);
            let cost = self.matrix.path_cost(tour.stops());
            incumbent.offer(tour.clone(), cost);
            explored.push(tour);
        }

        let (best_tour, best_cost) = incumbent.into_best()?;
        Ok(SearchReport {
            best_tour,
            best_cost,
            explored,
        })
    }

    /// Recursively extend `partial` by one city at a time until `remaining`
    /// is exhausted. Each level tries every element of `remaining` exactly
    /// once as the next stop, passing the reduced set down with the relative
    /// order of the others preserved.
    fn permute(&self, partial: &Tour, remaining: &mut Vec<usize>, out: &mut Vec<Tour>) {
        if remaining.is_empty() {
            out.push(partial.clone());
            return;
        }

        for i in 0..remaining.len() {
            let next = remaining.remove(i);
            let mut child = partial.clone();
            child.push(next);
            self.permute(&child, remaining, out);
            remaining.insert(i, next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TourError;

    fn factorial(k: usize) -> usize {
        (1..=k).product()
    }

    fn triangle() -> CostMatrix {
        CostMatrix::from_rows(vec![vec![0, 1, 2], vec![1, 0, 3], vec![2, 3, 0]])
            .expect("square matrix")
    }

    #[test]
    fn test_generates_factorial_permutations() {
        let matrix = CostMatrix::zeros(5);
        let report = ExhaustiveSearch::new(&matrix, 0)
            .expect("valid input")
            .run()
            .expect("search runs");
        assert_eq!(report.explored.len(), factorial(4));
    }

    #[test]
    fn test_every_tour_is_closed_and_unique() {
        let matrix = CostMatrix::zeros(4);
        let anchor = 2;
        let report = ExhaustiveSearch::new(&matrix, anchor)
            .expect("valid input")
            .run()
            .expect("search runs");

        for tour in &report.explored {
            let stops = tour.stops();
            assert_eq!(stops.len(), 5);
            assert_eq!(stops[0], anchor);
            assert_eq!(stops[stops.len() - 1], anchor);
            for city in 0..4 {
                if city != anchor {
                    assert_eq!(stops.iter().filter(|&&s| s == city).count(), 1);
                }
            }
        }

        // No permutation is emitted twice.
        let mut seen: Vec<&[usize]> = report.explored.iter().map(Tour::stops).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), factorial(3));
    }

    #[test]
    fn test_triangle_optimum_is_six() {
        let matrix = triangle();
        let report = ExhaustiveSearch::new(&matrix, 0)
            .expect("valid input")
            .run()
            .expect("search runs");
        assert_eq!(report.best_cost, 6);
        assert_eq!(report.explored.len(), 2);
        assert!(report.best_tour.is_closed());
    }

    #[test]
    fn test_anchor_choice_does_not_change_optimum() {
        let matrix = triangle();
        for anchor in 0..3 {
            let report = ExhaustiveSearch::new(&matrix, anchor)
                .expect("valid input")
                .run()
                .expect("search runs");
            assert_eq!(report.best_cost, 6, "anchor {anchor}");
        }
    }

    #[test]
    fn test_single_location_is_trivial() {
        let matrix = CostMatrix::zeros(1);
        let report = ExhaustiveSearch::new(&matrix, 0)
            .expect("valid input")
            .run()
            .expect("search runs");
        assert_eq!(report.best_cost, 0);
        assert_eq!(report.best_tour.stops(), &[0]);
    }

    #[test]
    fn test_two_locations() {
        let mut matrix = CostMatrix::zeros(2);
        matrix.set_weight(0, 1, 5);
        matrix.set_weight(1, 0, 7);
        let report = ExhaustiveSearch::new(&matrix, 0)
            .expect("valid input")
            .run()
            .expect("search runs");
        assert_eq!(report.best_tour.stops(), &[0, 1, 0]);
        assert_eq!(report.best_cost, 12);
    }

    #[test]
    fn test_rejects_out_of_range_anchor() {
        let matrix = CostMatrix::zeros(3);
        assert!(matches!(
            ExhaustiveSearch::new(&matrix, 5),
            Err(TourError::AnchorOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_matrix() {
        let matrix = CostMatrix::zeros(0);
        assert!(matches!(
            ExhaustiveSearch::new(&matrix, 0),
            Err(TourError::NoSolution)
        ));
    }
}
