//! Nearest-neighbour heuristic.
//!
//! Greedy baseline for comparison against the exact strategies: start the
//! tour at the anchor, repeatedly hop to the nearest not-yet-visited city,
//! then add the closing edge back to the anchor. Single pass, no backtracking,
//! no optimality guarantee.

use crate::error::TourResult;
use crate::matrix::CostMatrix;
use crate::tour::Tour;

use super::{check_entry, SearchReport};

/// Nearest-neighbour tour construction from the anchor.
#[derive(Debug)]
pub struct NearestNeighbour<'m> {
    matrix: &'m CostMatrix,
    anchor: usize,
}

impl<'m> NearestNeighbour<'m> {
    /// Create a heuristic run over `matrix` anchored at `anchor`.
    ///
    /// # Errors
    ///
    /// Returns a precondition error for an empty matrix or an out-of-range
    /// anchor.
    pub fn new(matrix: &'m CostMatrix, anchor: usize) -> TourResult<Self> {
        check_entry(matrix, anchor)?;
        Ok(Self { matrix, anchor })
    }

    /// Build the tour.
    ///
    /// The next hop is chosen by strictly-less comparison against the running
    /// minimum while scanning candidates in index order, so ties go to the
    /// lowest index. Visitation lives in a boolean set owned by this run.
    /// The report's `explored` collection is empty: the heuristic performs no
    /// search.
    ///
    /// # Errors
    ///
    /// This run itself cannot fail once the entry preconditions hold; the
    /// `Result` keeps the surface uniform across strategies.
    pub fn run(&self) -> TourResult<SearchReport> {
        let n = self.matrix.len();
        let mut visited = vec![false; n];
        let mut tour = Tour::with_start(self.anchor);
        visited[self.anchor] = true;
        let mut total: u64 = 0;

        while tour.len() < n {
            let current = tour.current().unwrap_or(self.anchor);

            let mut nearest: Option<(usize, u32)> = None;
            for candidate in 0..n {
                if visited[candidate] {
                    continue;
                }
                let step = self.matrix.weight(current, candidate);
                match nearest {
                    Some((_, best)) if step >= best => {}
                    _ => nearest = Some((candidate, step)),
                }
            }

            let Some((next, step)) = nearest else { break };
            visited[next] = true;
            tour.push(next);
            total += u64::from(step);
        }

        // Closing edge back to the anchor.
        let last = tour.current().unwrap_or(self.anchor);
        total += u64::from(self.matrix.weight(last, self.anchor));
        tour.push(self.anchor);

        Ok(SearchReport {
            best_tour: tour,
            best_cost: total,
            explored: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TourError;

    #[test]
    fn test_visits_every_city_once() {
        let matrix = CostMatrix::from_rows(vec![
            vec![0, 2, 9, 10],
            vec![1, 0, 6, 4],
            vec![15, 7, 0, 8],
            vec![6, 3, 12, 0],
        ])
        .expect("square matrix");

        let report = NearestNeighbour::new(&matrix, 0)
            .expect("valid input")
            .run()
            .expect("heuristic runs");
        let stops = report.best_tour.stops();
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0], 0);
        assert_eq!(stops[4], 0);
        for city in 1..4 {
            assert_eq!(stops.iter().filter(|&&s| s == city).count(), 1);
        }
        assert!(report.explored.is_empty());
    }

    #[test]
    fn test_follows_nearest_edges() {
        // From 0 the nearest is 1 (2), from 1 the nearest unvisited is 3 (4),
        // then 2 (12), then back: 8. Total 2 + 4 + 12 + 15 = 33.
        let matrix = CostMatrix::from_rows(vec![
            vec![0, 2, 9, 10],
            vec![1, 0, 6, 4],
            vec![15, 7, 0, 8],
            vec![6, 3, 12, 0],
        ])
        .expect("square matrix");

        let report = NearestNeighbour::new(&matrix, 0)
            .expect("valid input")
            .run()
            .expect("heuristic runs");
        assert_eq!(report.best_tour.stops(), &[0, 1, 3, 2, 0]);
        assert_eq!(report.best_cost, 2 + 4 + 12 + 15);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let matrix = CostMatrix::from_rows(vec![
            vec![0, 5, 5, 5],
            vec![5, 0, 5, 5],
            vec![5, 5, 0, 5],
            vec![5, 5, 5, 0],
        ])
        .expect("square matrix");

        let report = NearestNeighbour::new(&matrix, 0)
            .expect("valid input")
            .run()
            .expect("heuristic runs");
        assert_eq!(report.best_tour.stops(), &[0, 1, 2, 3, 0]);
        assert_eq!(report.best_cost, 20);
    }

    #[test]
    fn test_closing_edge_uses_tail_to_anchor_direction() {
        // Asymmetric matrix: the closing edge is current -> anchor, not the
        // reverse.
        let mut matrix = CostMatrix::zeros(2);
        matrix.set_weight(0, 1, 3);
        matrix.set_weight(1, 0, 40);

        let report = NearestNeighbour::new(&matrix, 0)
            .expect("valid input")
            .run()
            .expect("heuristic runs");
        assert_eq!(report.best_tour.stops(), &[0, 1, 0]);
        assert_eq!(report.best_cost, 43);
    }

    #[test]
    fn test_single_location() {
        let matrix = CostMatrix::zeros(1);
        let report = NearestNeighbour::new(&matrix, 0)
            .expect("valid input")
            .run()
            .expect("heuristic runs");
        assert_eq!(report.best_cost, 0);
        assert_eq!(report.best_tour.stops(), &[0, 0]);
    }

    #[test]
    fn test_rejects_out_of_range_anchor() {
        let matrix = CostMatrix::zeros(4);
        assert!(matches!(
            NearestNeighbour::new(&matrix, 4),
            Err(TourError::AnchorOutOfRange { .. })
        ));
    }
}
