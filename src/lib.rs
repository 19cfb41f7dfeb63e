//! # tourbench
//!
//! Exact and heuristic solvers for the minimum-cost closed tour over a fixed
//! set of locations with a pairwise cost matrix: the classical travelling
//! salesman problem on a complete graph with asymmetric-capable weights.
//!
//! Three strategies solve the same input: exhaustive enumeration, a pruned
//! exhaustive search (branch-and-bound) that reaches the exact optimum
//! faster, and a nearest-neighbour heuristic baseline. A timing harness runs
//! them side by side over YAML-defined instances.
//!
//! ## Example
//!
//! ```rust
//! use tourbench::prelude::*;
//!
//! let matrix = CostMatrix::from_rows(vec![
//!     vec![0, 1, 2],
//!     vec![1, 0, 3],
//!     vec![2, 3, 0],
//! ])?;
//! let report = solve(&matrix, 0, Strategy::Bounded)?;
//! assert_eq!(report.best_cost, 6);
//! # Ok::<(), tourbench::TourError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_const_for_fn,
    clippy::needless_range_loop,
    clippy::must_use_candidate
)]

pub mod city;
pub mod cli;
pub mod error;
pub mod harness;
pub mod instance;
pub mod matrix;
pub mod solver;
pub mod tour;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::city::City;
    pub use crate::error::{TourError, TourResult};
    pub use crate::harness::{run_strategies, StrategySummary};
    pub use crate::instance::Instance;
    pub use crate::matrix::CostMatrix;
    pub use crate::solver::{solve, SearchReport, Strategy};
    pub use crate::tour::Tour;
}

/// Re-exports for the public API.
pub use city::City;
pub use error::{TourError, TourResult};
pub use instance::Instance;
pub use matrix::CostMatrix;
pub use solver::{solve, SearchReport, Strategy};
pub use tour::Tour;
