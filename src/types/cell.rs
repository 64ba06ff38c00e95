//! Character classes found in a diagram

use crate::{END_MARKER, HORIZONTAL, JUNCTION, START_MARKER, VERTICAL};

/// Classification of a single diagram character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// `@`
    Start,
    /// `x`
    End,
    /// `A`-`Z`
    Letter(char),
    /// `-`
    Horizontal,
    /// `|`
    Vertical,
    /// `+`
    Junction,
    /// Space, or anything past the end of a row or the diagram
    Blank,
    /// Anything else
    Invalid(char),
}

impl Cell {
    /// Classify a raw character
    pub fn classify(ch: char) -> Cell {
        match ch {
            START_MARKER => Cell::Start,
            END_MARKER => Cell::End,
            JUNCTION => Cell::Junction,
            HORIZONTAL => Cell::Horizontal,
            VERTICAL => Cell::Vertical,
            ' ' => Cell::Blank,
            'A'..='Z' => Cell::Letter(ch),
            other => Cell::Invalid(other),
        }
    }

    /// True for every character a path may run through
    pub fn is_path(&self) -> bool {
        !matches!(self, Cell::Blank | Cell::Invalid(_))
    }

    pub fn is_letter(&self) -> bool {
        matches!(self, Cell::Letter(_))
    }

    /// The character this cell was classified from (space for blank)
    pub fn as_char(&self) -> char {
        match self {
            Cell::Start => START_MARKER,
            Cell::End => END_MARKER,
            Cell::Letter(c) | Cell::Invalid(c) => *c,
            Cell::Horizontal => HORIZONTAL,
            Cell::Vertical => VERTICAL,
            Cell::Junction => JUNCTION,
            Cell::Blank => ' ',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_characters() {
        for ch in ['@', 'x', 'A', 'Z', '-', '|', '+'] {
            assert!(Cell::classify(ch).is_path(), "{:?} should be a path character", ch);
        }
    }

    #[test]
    fn test_non_path_characters() {
        assert_eq!(Cell::classify(' '), Cell::Blank);
        assert_eq!(Cell::classify('1'), Cell::Invalid('1'));
        assert_eq!(Cell::classify('a'), Cell::Invalid('a'));
        assert_eq!(Cell::classify('X'), Cell::Letter('X'));
        assert!(!Cell::classify('#').is_path());
    }

    #[test]
    fn test_as_char_round_trips() {
        for ch in ['@', 'x', 'Q', '-', '|', '+', ' ', '?'] {
            assert_eq!(Cell::classify(ch).as_char(), ch);
        }
    }
}
