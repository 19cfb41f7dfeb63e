//! YAML-first instance configuration.
//!
//! A tour instance (city list, distance matrix, anchor and harness settings)
//! is plain data that users can download, edit and re-run without touching
//! code.
//!
//! # Example YAML
//!
//! ```yaml
//! meta:
//!   id: "TOUR-TRI-003"
//!   description: "Three-city triangle"
//!
//! cities:
//!   - { index: 0, name: "A" }
//!   - { index: 1, name: "B" }
//!   - { index: 2, name: "C" }
//!
//! matrix:
//!   - [0, 1, 2]
//!   - [1, 0, 3]
//!   - [2, 3, 0]
//!
//! anchor: 0
//!
//! harness:
//!   strategies: [exhaustive, greedy, bounded]
//!   iterations: 3
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::city::City;
use crate::error::{TourError, TourResult};
use crate::matrix::CostMatrix;
use crate::solver::Strategy;

/// Metadata about an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TourMeta {
    /// Unique instance identifier.
    #[validate(length(min = 1))]
    pub id: String,
    /// Version string.
    #[serde(default = "default_version")]
    pub version: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Where the distance data came from.
    #[serde(default)]
    pub source: String,
    /// Distance units (e.g. "km", "miles").
    #[serde(default = "default_units")]
    pub units: String,
    /// Known optimal closed-tour cost, for verification.
    #[serde(default)]
    pub optimal_known: Option<u64>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_units() -> String {
    "km".to_string()
}

impl Default for TourMeta {
    fn default() -> Self {
        Self {
            id: "TOUR-UNNAMED".to_string(),
            version: default_version(),
            description: String::new(),
            source: String::new(),
            units: default_units(),
            optimal_known: None,
        }
    }
}

/// Harness settings: which strategies to run and how often to repeat each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct HarnessParams {
    /// Strategies to run, in order.
    #[serde(default = "default_strategies")]
    pub strategies: Vec<Strategy>,
    /// Repetitions per strategy for time averaging.
    #[validate(range(min = 1))]
    #[serde(default = "default_iterations")]
    pub iterations: usize,
}

fn default_strategies() -> Vec<Strategy> {
    Strategy::ALL.to_vec()
}

fn default_iterations() -> usize {
    1
}

impl Default for HarnessParams {
    fn default() -> Self {
        Self {
            strategies: default_strategies(),
            iterations: default_iterations(),
        }
    }
}

/// Complete instance configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Instance {
    /// Instance metadata.
    #[validate(nested)]
    #[serde(default)]
    pub meta: TourMeta,
    /// City list; each city's `index` addresses the matrix.
    pub cities: Vec<City>,
    /// Distance matrix, `n` rows of `n` non-negative weights.
    pub matrix: Vec<Vec<u32>>,
    /// Index of the city that starts and ends the closed tour.
    #[serde(default)]
    pub anchor: usize,
    /// Harness settings.
    #[validate(nested)]
    #[serde(default)]
    pub harness: HarnessParams,
}

impl Instance {
    /// Parse an instance from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a parse error for invalid YAML, a validation error for schema
    /// violations, or a specific precondition error for semantic problems
    /// (matrix shape, index coverage, anchor range).
    pub fn from_yaml(yaml: &str) -> TourResult<Self> {
        let instance: Self = serde_yaml::from_str(yaml)?;
        instance.validate()?;
        instance.validate_semantic()?;
        Ok(instance)
    }

    /// Load an instance from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, otherwise as
    /// [`Instance::from_yaml`].
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> TourResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> TourResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Semantic validation beyond the schema: the matrix must be square and
    /// match the city count, city indices must be in range, and the anchor
    /// must address a city.
    ///
    /// # Errors
    ///
    /// Returns the specific precondition error for the first violation found.
    pub fn validate_semantic(&self) -> TourResult<()> {
        let n = self.cities.len();

        if self.matrix.len() != n {
            return Err(TourError::MatrixDimensionMismatch {
                expected: n,
                got_rows: self.matrix.len(),
            });
        }

        for (i, row) in self.matrix.iter().enumerate() {
            if row.len() != n {
                return Err(TourError::MatrixRowMismatch {
                    row: i,
                    expected: n,
                    got: row.len(),
                });
            }
        }

        for city in &self.cities {
            if city.index >= n {
                return Err(TourError::InvalidCityIndex {
                    index: city.index,
                    max: n.saturating_sub(1),
                });
            }
        }

        if self.anchor >= n {
            return Err(TourError::AnchorOutOfRange {
                anchor: self.anchor,
                count: n,
            });
        }

        Ok(())
    }

    /// Number of cities.
    #[must_use]
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Distance between two cities.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn distance(&self, from: usize, to: usize) -> u32 {
        self.matrix[from][to]
    }

    /// Name of the city at `index`, if any.
    #[must_use]
    pub fn city_name(&self, index: usize) -> Option<&str> {
        self.cities
            .iter()
            .find(|c| c.index == index)
            .map(|c| c.name.as_str())
    }

    /// Build the validated [`CostMatrix`] for this instance.
    ///
    /// # Errors
    ///
    /// Returns a precondition error if the matrix rows are not square.
    pub fn cost_matrix(&self) -> TourResult<CostMatrix> {
        CostMatrix::from_rows(self.matrix.clone())
    }

    /// A smaller instance over the first `n` cities, for benchmark sizing.
    /// The anchor is clamped into range.
    #[must_use]
    pub fn truncated(&self, n: usize) -> Self {
        let n = n.min(self.cities.len());
        Self {
            meta: self.meta.clone(),
            cities: self.cities[..n].to_vec(),
            matrix: self
                .matrix
                .iter()
                .take(n)
                .map(|row| row[..n].to_vec())
                .collect(),
            anchor: self.anchor.min(n.saturating_sub(1)),
            harness: self.harness.clone(),
        }
    }

    /// The bundled ten-city benchmark: Canadian cities with Halifax as the
    /// anchor, distances from the reference table.
    #[must_use]
    pub fn canada10() -> Self {
        const NAMES: [&str; 10] = [
            "Vancouver",
            "Edmonton",
            "Calgary",
            "Winnipeg",
            "Hamilton",
            "Toronto",
            "Kingston",
            "Ottawa",
            "Montreal",
            "Halifax",
        ];
        const DISTANCES: [[u32; 10]; 10] = [
            [0, 129, 119, 43, 98, 98, 86, 52, 85, 44],
            [129, 0, 88, 149, 152, 57, 55, 141, 93, 86],
            [119, 88, 0, 97, 72, 72, 42, 72, 35, 92],
            [43, 149, 97, 0, 54, 119, 107, 28, 64, 60],
            [98, 152, 72, 54, 0, 138, 85, 39, 48, 90],
            [98, 57, 72, 119, 138, 0, 35, 111, 77, 56],
            [86, 55, 42, 107, 85, 35, 0, 80, 37, 44],
            [52, 141, 72, 28, 39, 111, 80, 0, 38, 52],
            [85, 93, 35, 64, 48, 77, 37, 38, 0, 47],
            [44, 86, 92, 60, 90, 56, 44, 52, 47, 0],
        ];

        Self {
            meta: TourMeta {
                id: "TOUR-CAN-010".to_string(),
                description: "Ten-city Canadian benchmark, Halifax anchor".to_string(),
                source: "reference distance table".to_string(),
                ..TourMeta::default()
            },
            cities: NAMES
                .iter()
                .enumerate()
                .map(|(i, name)| City::new(i, *name))
                .collect(),
            matrix: DISTANCES.iter().map(|row| row.to_vec()).collect(),
            anchor: 9,
            harness: HarnessParams::default(),
        }
    }
}
