//! Grid coordinates

use serde::{Deserialize, Serialize};
use crate::types::Heading;

/// Zero-indexed (row, column) position in a diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring coordinate one step along `heading`.
    /// `None` when the step would go above row 0 or left of column 0.
    pub fn step(&self, heading: Heading) -> Option<Coordinate> {
        let (dr, dc) = heading.delta();
        Some(Coordinate {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
