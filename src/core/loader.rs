//! Diagram loading: raw text → rows, and bundles of named diagrams
//!
//! Bundle format: each diagram is introduced by a header line
//! `=== name ===`. Text without any header is a single diagram.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::core::{Grid, Walker};
use crate::types::{NavigationError, Traversal};

/// Name given to a diagram that has no header
pub const DEFAULT_DIAGRAM_NAME: &str = "diagram";

lazy_static! {
    static ref RE_SECTION_HEADER: Regex = Regex::new(r"^===\s*(.+?)\s*===\s*$").unwrap();
}

/// Why diagram text could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no diagram rows found")]
    Empty,

    #[error("diagram '{name}' has no rows")]
    EmptySection { name: String },

    #[error("line {line}: text before the first '=== name ===' header")]
    StrayContent { line: usize },
}

/// Diagram rows as loaded; never padded or mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    rows: Vec<String>,
}

impl Diagram {
    /// Split text into rows, dropping `\r` line endings and trailing blank rows
    pub fn from_text(text: &str) -> Self {
        Self::from_rows(text.lines())
    }

    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rows: Vec<String> = rows.into_iter().map(Into::into).collect();
        while rows.last().is_some_and(|r| r.trim().is_empty()) {
            rows.pop();
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.rows.as_slice())
    }

    /// Walk this diagram with the given step budget
    pub fn walk(&self, step_budget: usize) -> Result<Traversal, NavigationError> {
        let grid = self.grid();
        Walker::new(&grid)?.with_step_budget(step_budget).run()
    }
}

/// A diagram with the name it was loaded under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedDiagram {
    pub name: String,
    pub diagram: Diagram,
}

/// Parse text holding one or more diagrams
pub fn load_bundle(text: &str) -> Result<Vec<NamedDiagram>, LoadError> {
    let mut sections: Vec<(String, Vec<&str>)> = Vec::new();
    let mut stray_line = None;

    for (idx, line) in text.lines().enumerate() {
        if let Some(caps) = RE_SECTION_HEADER.captures(line) {
            sections.push((caps[1].to_string(), Vec::new()));
            continue;
        }
        match sections.last_mut() {
            Some((_, rows)) => rows.push(line),
            None if stray_line.is_none() && !line.trim().is_empty() => stray_line = Some(idx + 1),
            None => {}
        }
    }

    if sections.is_empty() {
        let diagram = Diagram::from_text(text);
        if diagram.is_empty() {
            return Err(LoadError::Empty);
        }
        return Ok(vec![NamedDiagram {
            name: DEFAULT_DIAGRAM_NAME.to_string(),
            diagram,
        }]);
    }

    if let Some(line) = stray_line {
        return Err(LoadError::StrayContent { line });
    }

    let diagrams = sections
        .into_iter()
        .map(|(name, rows)| {
            let diagram = Diagram::from_rows(rows);
            if diagram.is_empty() {
                Err(LoadError::EmptySection { name })
            } else {
                Ok(NamedDiagram { name, diagram })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = diagrams.len(), "bundle loaded");
    Ok(diagrams)
}

/// Read a file and parse it as a bundle
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<NamedDiagram>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_bundle(&text)
}

// =============================================================================
// TESTS
// =============================================================================
