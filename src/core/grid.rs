//! Grid: read-only, bounds-checked view over diagram rows
//!
//! Rows keep their own length. Anything past the end of a row, or below the
//! last row, reads as blank.

use crate::START_MARKER;
use crate::types::{Cell, Coordinate, NavigationError};

/// Immutable character grid built from diagram rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from rows of text
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.as_ref().chars().collect()).collect(),
        }
    }

    /// Raw character at `at`, `None` when out of range
    pub fn char_at(&self, at: Coordinate) -> Option<char> {
        self.rows.get(at.row)?.get(at.col).copied()
    }

    /// Classified cell at `at`; out of range is `Cell::Blank`
    pub fn cell_at(&self, at: Coordinate) -> Cell {
        self.char_at(at).map(Cell::classify).unwrap_or(Cell::Blank)
    }

    /// True for `@ x A-Z - | +`
    pub fn is_path_character(ch: char) -> bool {
        Cell::classify(ch).is_path()
    }

    /// First `@` scanning rows top to bottom, columns left to right
    pub fn find_start(&self) -> Result<Coordinate, NavigationError> {
        self.rows
            .iter()
            .enumerate()
            .find_map(|(row, chars)| {
                chars
                    .iter()
                    .position(|&c| c == START_MARKER)
                    .map(|col| Coordinate::new(row, col))
            })
            .ok_or(NavigationError::NoStartFound)
    }

    /// Total occurrences of `marker` across the whole diagram
    pub fn count_marker(&self, marker: char) -> usize {
        self.rows
            .iter()
            .map(|chars| chars.iter().filter(|&&c| c == marker).count())
            .sum()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::END_MARKER;

    fn sample() -> Grid {
        Grid::new(&[" @-A", "B-+ ", "  x "])
    }

    #[test]
    fn test_find_start() {
        assert_eq!(sample().find_start(), Ok(Coordinate::new(0, 1)));
    }

    #[test]
    fn test_find_start_missing() {
        let grid = Grid::new(&["-A-x"]);
        assert_eq!(grid.find_start(), Err(NavigationError::NoStartFound));
    }

    #[test]
    fn test_find_start_takes_first_in_reading_order() {
        let grid = Grid::new(&["   x", "  @ ", "@   "]);
        assert_eq!(grid.find_start(), Ok(Coordinate::new(1, 2)));
    }

    #[test]
    fn test_cell_at_in_bounds() {
        let grid = sample();
        assert_eq!(grid.cell_at(Coordinate::new(0, 1)), Cell::Start);
        assert_eq!(grid.cell_at(Coordinate::new(2, 2)), Cell::End);
        assert_eq!(grid.cell_at(Coordinate::new(1, 0)), Cell::Letter('B'));
    }

    #[test]
    fn test_out_of_range_is_blank() {
        let grid = Grid::new(&["@-A-x", "|"]);
        assert_eq!(grid.cell_at(Coordinate::new(1, 3)), Cell::Blank);
        assert_eq!(grid.cell_at(Coordinate::new(9, 0)), Cell::Blank);
        assert_eq!(grid.cell_at(Coordinate::new(0, 5)), Cell::Blank);
        assert_eq!(grid.char_at(Coordinate::new(0, 5)), None);
    }

    #[test]
    fn test_is_path_character() {
        assert!(Grid::is_path_character('+'));
        assert!(Grid::is_path_character('x'));
        assert!(!Grid::is_path_character(' '));
        assert!(!Grid::is_path_character('1'));
    }

    #[test]
    fn test_count_marker() {
        let grid = Grid::new(&["  x-B-@-A-x"]);
        assert_eq!(grid.count_marker(START_MARKER), 1);
        assert_eq!(grid.count_marker(END_MARKER), 2);
        assert_eq!(grid.count_marker('Q'), 0);
    }

    #[test]
    fn test_dimensions_of_ragged_rows() {
        let grid = Grid::new(&["@", "|", "+-A-+"]);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 5);
    }
}
