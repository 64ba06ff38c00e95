//! Core types for Pathwalk

mod heading;
mod coordinate;
mod cell;
mod output;
mod error;

pub use heading::Heading;
pub use coordinate::Coordinate;
pub use cell::Cell;
pub use output::Traversal;
pub use error::NavigationError;
