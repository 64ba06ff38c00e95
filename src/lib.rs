//! Pathwalk: follows a single path through an ASCII diagram
//!
//! CLI → loader → Grid → Walker → letters + path (or a classified error)

pub mod core;
pub mod types;

pub use crate::core::traverse;

// =============================================================================
// MARKERS
// =============================================================================

/// Where every path begins
pub const START_MARKER: char = '@';

/// Where every path ends
pub const END_MARKER: char = 'x';

/// Cell where the path turns
pub const JUNCTION: char = '+';

pub const HORIZONTAL: char = '-';
pub const VERTICAL: char = '|';

// =============================================================================
// LIMITS
// =============================================================================

/// Default step budget for one traversal.
/// Far above the cell count of any hand-drawn diagram; only a looping
/// diagram should ever reach it.
pub const DEFAULT_STEP_BUDGET: usize = 10_000;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
