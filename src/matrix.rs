//! Cost matrix and the open-path cost evaluator.
//!
//! A [`CostMatrix`] is a square table of non-negative edge weights indexed by
//! city index. It need not be symmetric; `weight[i][i] == 0` is a convention
//! of the bundled instances, not an enforced invariant. The bulk mutation
//! methods (scale, per-cell and uniform offsets) exist to construct derived
//! test inputs from a base table.
//!
//! Replacing a matrix invalidates any search state derived from it; searches
//! hold the matrix immutably for their whole run, so this can only arise
//! between runs.

use crate::error::{TourError, TourResult};

/// Square table of non-negative edge weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    weights: Vec<Vec<u32>>,
}

impl CostMatrix {
    /// Create an `n`x`n` matrix of zero weights.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self {
            weights: vec![vec![0; n]; n],
        }
    }

    /// Build a matrix from raw rows, rejecting non-square input.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::MatrixRowMismatch`] for the first row whose length
    /// differs from the row count.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> TourResult<Self> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(TourError::MatrixRowMismatch {
                    row: i,
                    expected: n,
                    got: row.len(),
                });
            }
        }
        Ok(Self { weights: rows })
    }

    /// Number of rows (equivalently, columns).
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the matrix has no locations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Edge weight from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range; passing one is a contract
    /// violation, not a recoverable condition.
    #[must_use]
    pub fn weight(&self, from: usize, to: usize) -> u32 {
        self.weights[from][to]
    }

    /// Set the edge weight from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn set_weight(&mut self, from: usize, to: usize, value: u32) {
        self.weights[from][to] = value;
    }

    /// Multiply every weight by `m` (saturating).
    pub fn scale(&mut self, m: u32) {
        for row in &mut self.weights {
            for w in row {
                *w = w.saturating_mul(m);
            }
        }
    }

    /// Add `extra` to the single cell at `(from, to)` (saturating).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn add_at(&mut self, from: usize, to: usize, extra: u32) {
        self.weights[from][to] = self.weights[from][to].saturating_add(extra);
    }

    /// Subtract `extra` from the single cell at `(from, to)` (saturating).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn sub_at(&mut self, from: usize, to: usize, extra: u32) {
        self.weights[from][to] = self.weights[from][to].saturating_sub(extra);
    }

    /// Add `extra` to every off-diagonal weight (saturating).
    pub fn add_uniform(&mut self, extra: u32) {
        for (i, row) in self.weights.iter_mut().enumerate() {
            for (j, w) in row.iter_mut().enumerate() {
                if i != j {
                    *w = w.saturating_add(extra);
                }
            }
        }
    }

    /// Subtract `extra` from every off-diagonal weight (saturating).
    pub fn sub_uniform(&mut self, extra: u32) {
        for (i, row) in self.weights.iter_mut().enumerate() {
            for (j, w) in row.iter_mut().enumerate() {
                if i != j {
                    *w = w.saturating_sub(extra);
                }
            }
        }
    }

    /// Sum of edge weights along consecutive pairs of `stops`.
    ///
    /// This is the cost evaluator: a pure, deterministic sum over the stored
    /// sequence with **no implicit closing edge**. Callers that mean a closed
    /// circuit append the return-to-start stop themselves before evaluating.
    /// Sequences of length 0 or 1 cost zero.
    ///
    /// # Panics
    ///
    /// Panics if any stop index is out of range.
    #[must_use]
    pub fn path_cost(&self, stops: &[usize]) -> u64 {
        stops
            .windows(2)
            .map(|pair| u64::from(self.weights[pair[0]][pair[1]]))
            .sum()
    }
}
