//! Segment and direction types

use serde::{Deserialize, Serialize};

/// Direction of a detected trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Rising prices (detected on the negated series)
    Up,
    /// Falling prices (detected on the series as-is)
    Down,
}

impl Direction {
    /// Result-table column this direction writes into
    pub fn column_name(&self) -> &'static str {
        match self {
            Direction::Up => "Up Trend",
            Direction::Down => "Down Trend",
        }
    }

    /// Orient values for the scanner: Up scans the series negated
    pub fn orient(&self, values: &[f64]) -> Vec<f64> {
        match self {
            Direction::Up => values.iter().map(|v| -v).collect(),
            Direction::Down => values.to_vec(),
        }
    }
}

/// A detected trend segment
///
/// Inclusive positional bounds into the scanned series. `start` is where the
/// qualifying run began; `end` is anchored at the run's extremum (the first
/// minimum reached), not at the reversal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names() {
        assert_eq!(Direction::Up.column_name(), "Up Trend");
        assert_eq!(Direction::Down.column_name(), "Down Trend");
    }

    #[test]
    fn test_orient_negates_for_up_only() {
        let values = [1.0, -2.0, 3.0];
        assert_eq!(Direction::Up.orient(&values), vec![-1.0, 2.0, -3.0]);
        assert_eq!(Direction::Down.orient(&values), values.to_vec());
    }
}
