//! Core modules for Pathwalk

pub mod grid;
pub mod walker;
pub mod loader;

pub use grid::Grid;
pub use walker::{Walker, StepOutcome, traverse};
pub use loader::{Diagram, NamedDiagram, LoadError, load_bundle, load_file, DEFAULT_DIAGRAM_NAME};
