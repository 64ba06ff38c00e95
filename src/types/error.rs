//! Failure taxonomy for a traversal
//!
//! Every kind is terminal. A traversal is deterministic, so retrying a
//! failed diagram always fails the same way.

use serde::Serialize;
use thiserror::Error;
use crate::types::Coordinate;

/// Why a diagram could not be walked
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationError {
    /// The grid holds no `@` at all
    #[error("no start marker '@' found")]
    NoStartFound,

    /// Zero or several `@` anywhere in the diagram
    #[error("expected exactly one start marker '@', found {found}")]
    MultipleOrMissingStart { found: usize },

    /// Zero or several `x` anywhere in the diagram
    #[error("expected exactly one end marker 'x', found {found}")]
    MultipleOrMissingEnd { found: usize },

    /// The path ran onto a character outside the recognised set
    #[error("invalid character {ch:?} on the path at {at}")]
    InvalidCharacter { at: Coordinate, ch: char },

    /// Nowhere to go from this cell
    #[error("dead end at {at}")]
    DeadEnd { at: Coordinate },

    /// More than one way to go from this cell
    #[error("fork in path at {at}: {options} possible continuations")]
    ForkDetected { at: Coordinate, options: usize },

    /// A straight segment stops on a blank cell before reaching `x`
    #[error("broken path after {at}")]
    BrokenPath { at: Coordinate },

    /// A `+` where the path does not turn
    #[error("fake turn at {at}: junction only continues straight")]
    FakeTurn { at: Coordinate },

    /// Step budget exhausted
    #[error("no end reached within {budget} steps")]
    InfiniteLoop { budget: usize },
}

impl NavigationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoStartFound => "NO_START_FOUND",
            Self::MultipleOrMissingStart { .. } => "MULTIPLE_OR_MISSING_START",
            Self::MultipleOrMissingEnd { .. } => "MULTIPLE_OR_MISSING_END",
            Self::InvalidCharacter { .. } => "INVALID_CHARACTER",
            Self::DeadEnd { .. } => "DEAD_END",
            Self::ForkDetected { .. } => "FORK_DETECTED",
            Self::BrokenPath { .. } => "BROKEN_PATH",
            Self::FakeTurn { .. } => "FAKE_TURN",
            Self::InfiniteLoop { .. } => "INFINITE_LOOP",
        }
    }

    /// Cell the failure was detected at, if it is local to one
    pub fn location(&self) -> Option<Coordinate> {
        match self {
            Self::InvalidCharacter { at, .. }
            | Self::DeadEnd { at }
            | Self::ForkDetected { at, .. }
            | Self::BrokenPath { at }
            | Self::FakeTurn { at } => Some(*at),
            Self::NoStartFound
            | Self::MultipleOrMissingStart { .. }
            | Self::MultipleOrMissingEnd { .. }
            | Self::InfiniteLoop { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let at = Coordinate::new(0, 0);
        let all = [
            NavigationError::NoStartFound,
            NavigationError::MultipleOrMissingStart { found: 2 },
            NavigationError::MultipleOrMissingEnd { found: 0 },
            NavigationError::InvalidCharacter { at, ch: '?' },
            NavigationError::DeadEnd { at },
            NavigationError::ForkDetected { at, options: 2 },
            NavigationError::BrokenPath { at },
            NavigationError::FakeTurn { at },
            NavigationError::InfiniteLoop { budget: 1 },
        ];
        let mut codes: Vec<_> = all.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_display_mentions_location() {
        let err = NavigationError::FakeTurn { at: Coordinate::new(0, 6) };
        assert_eq!(err.to_string(), "fake turn at (0, 6): junction only continues straight");
        assert_eq!(err.location(), Some(Coordinate::new(0, 6)));
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let err = NavigationError::MultipleOrMissingEnd { found: 2 };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "multiple_or_missing_end");
        assert_eq!(json["found"], 2);
    }
}
