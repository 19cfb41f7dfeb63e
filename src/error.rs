//! Error types for tourbench.
//!
//! All fallible operations return `Result<T, TourError>`. Malformed input is
//! rejected before any search recursion begins; a search that never produced a
//! complete tour surfaces `NoSolution` instead of a silent default.

use thiserror::Error;

/// Result type alias for tourbench operations.
pub type TourResult<T> = Result<T, TourError>;

/// Unified error type for instance loading, validation and search.
#[derive(Debug, Error)]
pub enum TourError {
    // ===== Input preconditions =====
    /// Matrix row count does not match the number of cities.
    #[error("matrix dimension mismatch: expected {expected}x{expected}, got {got_rows} rows")]
    MatrixDimensionMismatch {
        /// Expected row/column count.
        expected: usize,
        /// Actual number of rows.
        got_rows: usize,
    },

    /// A matrix row has the wrong number of columns.
    #[error("matrix row {row} has {got} columns, expected {expected}")]
    MatrixRowMismatch {
        /// Index of the offending row.
        row: usize,
        /// Expected column count.
        expected: usize,
        /// Actual column count.
        got: usize,
    },

    /// A city carries an index outside the matrix range.
    #[error("invalid city index {index}, max is {max}")]
    InvalidCityIndex {
        /// The out-of-range index.
        index: usize,
        /// Largest valid index.
        max: usize,
    },

    /// The designated anchor index is outside the location range.
    #[error("anchor index {anchor} out of range for {count} locations")]
    AnchorOutOfRange {
        /// The requested anchor index.
        anchor: usize,
        /// Number of locations in the instance.
        count: usize,
    },

    // ===== Search outcomes =====
    /// A best tour was requested but no complete tour was ever recorded.
    #[error("no solution: the search recorded no complete tour")]
    NoSolution,

    // ===== Configuration =====
    /// Invalid configuration value.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Schema validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TourError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check whether this error is an input-precondition violation, raised
    /// before any recursion started.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::MatrixDimensionMismatch { .. }
                | Self::MatrixRowMismatch { .. }
                | Self::InvalidCityIndex { .. }
                | Self::AnchorOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_detection() {
        let dim = TourError::MatrixDimensionMismatch {
            expected: 4,
            got_rows: 3,
        };
        assert!(dim.is_precondition());

        let row = TourError::MatrixRowMismatch {
            row: 1,
            expected: 4,
            got: 2,
        };
        assert!(row.is_precondition());

        let anchor = TourError::AnchorOutOfRange {
            anchor: 9,
            count: 4,
        };
        assert!(anchor.is_precondition());

        assert!(!TourError::NoSolution.is_precondition());
        assert!(!TourError::config("bad").is_precondition());
    }

    #[test]
    fn test_error_display_dimension() {
        let err = TourError::MatrixDimensionMismatch {
            expected: 6,
            got_rows: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("6x6"));
        assert!(msg.contains("4 rows"));
    }

    #[test]
    fn test_error_display_row() {
        let err = TourError::MatrixRowMismatch {
            row: 2,
            expected: 6,
            got: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("row 2"));
        assert!(msg.contains("4 columns"));
    }

    #[test]
    fn test_error_display_anchor() {
        let err = TourError::AnchorOutOfRange {
            anchor: 10,
            count: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("anchor index 10"));
        assert!(msg.contains("10 locations"));
    }

    #[test]
    fn test_error_display_no_solution() {
        assert!(TourError::NoSolution.to_string().contains("no solution"));
    }

    #[test]
    fn test_error_config_helper() {
        let err = TourError::config("iterations must be positive");
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("iterations must be positive"));
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(TourError::NoSolution);
        assert!(!err.to_string().is_empty());
    }
}
