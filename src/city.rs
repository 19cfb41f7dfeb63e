//! City identity records.
//!
//! A [`City`] pairs a human-readable name with the index that addresses it in
//! the cost matrix. Identity is the index; the name is a mutable label.
//! Visitation during a search is tracked by the solver that needs it (an
//! index set owned by the run), never as state on the shared record, so
//! independent searches over the same city list cannot contaminate each other.

use serde::{Deserialize, Serialize};

/// A named stop addressable by its cost-matrix index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    /// Row/column index into the cost matrix.
    pub index: usize,
    /// Display name.
    pub name: String,
}

impl City {
    /// Create a new city.
    #[must_use]
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_fields() {
        let city = City::new(9, "Halifax");
        assert_eq!(city.index, 9);
        assert_eq!(city.name, "Halifax");
    }

    #[test]
    fn test_fields_are_mutable() {
        let mut city = City::new(0, "Vancovuer");
        city.name = "Vancouver".to_string();
        city.index = 3;
        assert_eq!(city.name, "Vancouver");
        assert_eq!(city.index, 3);
    }

    #[test]
    fn test_display() {
        let city = City::new(5, "Toronto");
        assert_eq!(city.to_string(), "Toronto (5)");
    }

    #[test]
    fn test_serde_roundtrip() {
        let city = City::new(2, "Calgary");
        let json = serde_json::to_string(&city).expect("serialize");
        let restored: City = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(city, restored);
    }
}
