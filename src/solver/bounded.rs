//! Branch-and-bound search.
//!
//! Depth-first enumeration with pruning against a running incumbent. The
//! bound is the accumulated cost of the partial tour itself: with non-negative
//! edge weights, a partial path's cost is a valid lower bound on the cost of
//! any of its completions, so a branch whose partial cost already meets the
//! incumbent can never yield a strict improvement and is abandoned. No
//! spanning-tree or reduced-cost estimate is computed; the rule is sufficient
//! for correctness, not for asymptotically optimal pruning.
//!
//! Unlike exhaustive mode, the anchor is *included* in the permuted set and
//! treated as an ordinary visitable stop during recursion; once a candidate
//! completes, the anchor is additionally affixed to both ends before scoring.
//! That carries the reference system's behavior; see DESIGN.md for the
//! recorded decision.

use crate::error::TourResult;
use crate::matrix::CostMatrix;
use crate::tour::Tour;

use super::{check_entry, Incumbent, SearchReport};

/// Branch-and-bound search over the full city set.
#[derive(Debug)]
pub struct BoundedSearch<'m> {
    matrix: &'m CostMatrix,
    anchor: usize,
}

/// Run-scoped accumulator state: the results collection and the incumbent.
/// Owned by one `run` call and returned to the caller, never shared.
struct SearchState {
    explored: Vec<Tour>,
    incumbent: Incumbent,
}

impl<'m> BoundedSearch<'m> {
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
    /// The report's `explored` collection holds every tour that actually
    /// completed: the subset of permutations whose every prefix survived the
    /// pruning gate. It always contains the best tour.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::NoSolution`](crate::TourError::NoSolution) if no
    /// tour was recorded; with the entry preconditions already checked this
    /// cannot happen.
    pub fn run(&self) -> TourResult<SearchReport> {
        let mut remaining: Vec<usize> = (0..self.matrix.len()).collect();
        let mut state = SearchState {
            explored: Vec::new(),
            incumbent: Incumbent::new(),
        };

        self.descend(&Tour::new(), &mut remaining, &mut state);

        let (best_tour, best_cost) = state.incumbent.into_best()?;
        Ok(SearchReport {
            best_tour,
            best_cost,
            explored: state.explored,
        })
    }

    fn descend(&self, partial: &Tour, remaining: &mut Vec<usize>, state: &mut SearchState) {
        if remaining.is_empty() {
            // All stops placed: affix the anchor, score the true total, and
            // offer it under the strict-improvement rule.
            let mut complete = partial.clone();
            complete.close_through(self.anchor);
            let total = self.matrix.path_cost(complete.stops());
            state.explored.push(complete.clone());
            state.incumbent.offer(complete, total);
            return;
        }

        for i in 0..remaining.len() {
            let next = remaining.remove(i);
            let mut child = partial.clone();
            child.push(next);

            // The first full depth-first path runs to completion
            // unconditionally to seed the incumbent; after that, descend only
            // while the partial cost still beats the incumbent.
            if state.explored.is_empty()
                || self.matrix.path_cost(child.stops()) < state.incumbent.best_cost()
            {
                self.descend(&child, remaining, state);
            }

            remaining.insert(i, next);
        }
    }
}
