//! Heading definitions

use serde::{Deserialize, Serialize};

/// The four directions of travel on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// All headings, in the fixed order candidates are examined
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// The heading pointing straight back
    pub fn opposite(&self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// (row delta, column delta) of one step
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
            Heading::Right => (0, 1),
        }
    }

    /// True for a quarter turn away from `other`
    pub fn is_perpendicular_to(&self, other: Heading) -> bool {
        self.is_vertical() != other.is_vertical()
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Heading::Up | Heading::Down)
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Heading::Up => "up",
            Heading::Down => "down",
            Heading::Left => "left",
            Heading::Right => "right",
        };
        write!(f, "{}", name)
    }
}
