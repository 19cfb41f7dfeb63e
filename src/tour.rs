//! Tour sequences.
//!
//! A [`Tour`] is an ordered sequence of city indices built one stop at a time.
//! While under construction every stop is distinct; a fully closed tour
//! repeats its start as the final stop. Tours are plain data; the cost of a
//! tour is computed by [`CostMatrix::path_cost`](crate::CostMatrix::path_cost)
//! over its stops.

use serde::{Deserialize, Serialize};

/// An ordered sequence of city indices with a start and a current tail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tour {
    stops: Vec<usize>,
}

impl Tour {
    /// Create an empty tour.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tour seeded with a start stop.
    #[must_use]
    pub fn with_start(start: usize) -> Self {
        Self { stops: vec![start] }
    }

    /// Create a tour from an existing stop sequence.
    #[must_use]
    pub fn from_stops(stops: Vec<usize>) -> Self {
        Self { stops }
    }

    /// Append one stop to the tail.
    pub fn push(&mut self, index: usize) {
        self.stops.push(index);
    }

    /// First stop of the sequence, if any.
    #[must_use]
    pub fn start(&self) -> Option<usize> {
        self.stops.first().copied()
    }

    /// Last stop appended so far, if any. The greedy heuristic reads this to
    /// find its next hop.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.stops.last().copied()
    }

    /// The stop sequence.
    #[must_use]
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the tour has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Whether the given index appears anywhere in the sequence.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.stops.contains(&index)
    }

    /// Whether the tour starts and ends on the same stop.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.stops.len() >= 2 && self.stops.first() == self.stops.last()
    }

    /// Affix `anchor` to both ends of the sequence, turning a permutation of
    /// intermediate stops into a closed circuit through the anchor.
    pub fn close_through(&mut self, anchor: usize) {
        self.stops.insert(0, anchor);
        self.stops.push(anchor);
    }
}

impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for stop in &self.stops {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "{stop}")?;
            first = false;
        }
        Ok(())
    }
}
