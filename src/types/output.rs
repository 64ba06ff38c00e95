//! Output structures for terminal display

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Result of a successful traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal {
    /// Letters collected, each letter cell once, in first-visit order
    pub letters: String,
    /// Every character visited, `@` first and `x` last
    pub path: String,
}

impl Traversal {
    pub fn new(letters: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
            path: path.into(),
        }
    }

    /// Number of moves taken
    pub fn steps(&self) -> usize {
        self.path.chars().count().saturating_sub(1)
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        format!(
            "{} {}\n{} {}",
            "Letters:".bold(),
            self.letters.green().bold(),
            "Path:".bold(),
            self.path.cyan()
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!("Letters: {}\nPath: {}", self.letters, self.path)
    }
}
