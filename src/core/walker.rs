//! Walker: follows the path from `@` to `x` one cell at a time
//!
//! Decision rules:
//! - At `@` (no heading yet) all four neighbours are examined.
//! - At `+` every heading but the reverse is examined. Exactly one must be
//!   open, and it must be a turn: a lone straight option is a fake turn.
//! - Anywhere else the path keeps its heading. A letter whose straight
//!   continuation is blank may act as a corner if exactly one side is open.
//!
//! Nothing is ever guessed: zero options is a dead end, several are a fork.

use std::collections::HashSet;
use tracing::{debug, trace};

use crate::core::Grid;
use crate::types::{Cell, Coordinate, Heading, NavigationError, Traversal};
use crate::{DEFAULT_STEP_BUDGET, END_MARKER, START_MARKER};

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved one cell
    Moved,
    /// Standing on `x`; the walk is complete
    Finished,
}

/// Traversal state for one walk over a grid
#[derive(Debug)]
pub struct Walker<'a> {
    grid: &'a Grid,
    /// Current cell
    position: Coordinate,
    /// `None` until the first move
    heading: Option<Heading>,
    /// Every character visited so far
    path: String,
    /// Letters collected so far
    letters: String,
    /// Letter cells already collected
    visited_letters: HashSet<Coordinate>,
    /// Moves made
    steps: usize,
    step_budget: usize,
}

impl<'a> Walker<'a> {
    /// Check the marker preconditions and place a walker on `@`
    pub fn new(grid: &'a Grid) -> Result<Self, NavigationError> {
        let starts = grid.count_marker(START_MARKER);
        if starts != 1 {
            return Err(NavigationError::MultipleOrMissingStart { found: starts });
        }
        let ends = grid.count_marker(END_MARKER);
        if ends != 1 {
            return Err(NavigationError::MultipleOrMissingEnd { found: ends });
        }

        let start = grid.find_start()?;
        debug!(%start, rows = grid.height(), cols = grid.width(), "walker placed on start");

        Ok(Self {
            grid,
            position: start,
            heading: None,
            path: START_MARKER.to_string(),
            letters: String::new(),
            visited_letters: HashSet::new(),
            steps: 0,
            step_budget: DEFAULT_STEP_BUDGET,
        })
    }

    /// Replace the default step budget
    pub fn with_step_budget(mut self, budget: usize) -> Self {
        self.step_budget = budget;
        self
    }

    /// Walk until `x` or failure
    pub fn run(mut self) -> Result<Traversal, NavigationError> {
        loop {
            match self.step() {
                Ok(StepOutcome::Moved) => {}
                Ok(StepOutcome::Finished) => break,
                Err(err) => {
                    debug!(code = err.code(), steps = self.steps, "walk failed: {}", err);
                    return Err(err);
                }
            }
        }

        debug!(steps = self.steps, letters = %self.letters, "walk finished");
        Ok(Traversal::new(self.letters, self.path))
    }

    /// Read the current cell and move one cell further
    pub fn step(&mut self) -> Result<StepOutcome, NavigationError> {
        let cell = self.grid.cell_at(self.position);
        trace!(step = self.steps, at = %self.position, ?cell, heading = ?self.heading, "step");

        if cell == Cell::End && self.steps > 0 {
            return Ok(StepOutcome::Finished);
        }

        match cell {
            Cell::Invalid(ch) => {
                return Err(NavigationError::InvalidCharacter { at: self.position, ch });
            }
            // Only reachable if the walker was placed off the path
            Cell::Blank => return Err(NavigationError::BrokenPath { at: self.position }),
            Cell::Letter(ch) => {
                if self.visited_letters.insert(self.position) {
                    self.letters.push(ch);
                }
            }
            _ => {}
        }

        let (heading, next) = self.next_move(cell)?;
        if self.heading.is_some_and(|h| h != heading) {
            debug!(at = %self.position, from = ?self.heading, to = %heading, "turn");
        }

        self.position = next;
        self.heading = Some(heading);
        self.steps += 1;
        self.path.push(self.grid.cell_at(next).as_char());

        if self.steps > self.step_budget {
            return Err(NavigationError::InfiniteLoop { budget: self.step_budget });
        }

        Ok(StepOutcome::Moved)
    }

    /// Pick the heading and destination of the next move
    fn next_move(&self, cell: Cell) -> Result<(Heading, Coordinate), NavigationError> {
        let at = self.position;

        let Some(heading) = self.heading else {
            return self.single_option(self.open_neighbours(Heading::ALL));
        };

        if cell == Cell::Junction {
            let options = self.open_neighbours(
                Heading::ALL.into_iter().filter(|&h| h != heading.opposite()),
            );
            if let [(only, _)] = options.as_slice() {
                if *only == heading {
                    return Err(NavigationError::FakeTurn { at });
                }
            }
            return self.single_option(options);
        }

        if let Some(next) = self.straight_ahead(heading) {
            return Ok((heading, next));
        }

        if cell.is_letter() {
            let sides = self.open_neighbours(
                Heading::ALL.into_iter().filter(|h| h.is_perpendicular_to(heading)),
            );
            if !sides.is_empty() {
                return self.single_option(sides);
            }
        }

        Err(NavigationError::BrokenPath { at })
    }

    /// Exactly one option, or a dead end / fork
    fn single_option(
        &self,
        options: Vec<(Heading, Coordinate)>,
    ) -> Result<(Heading, Coordinate), NavigationError> {
        match options.as_slice() {
            [] => Err(NavigationError::DeadEnd { at: self.position }),
            [only] => Ok(*only),
            many => Err(NavigationError::ForkDetected {
                at: self.position,
                options: many.len(),
            }),
        }
    }

    /// Neighbours along `headings` that hold a path character
    fn open_neighbours(
        &self,
        headings: impl IntoIterator<Item = Heading>,
    ) -> Vec<(Heading, Coordinate)> {
        headings
            .into_iter()
            .filter_map(|h| {
                let next = self.position.step(h)?;
                self.grid.cell_at(next).is_path().then_some((h, next))
            })
            .collect()
    }

    /// Next cell along `heading` unless it is blank or off the grid
    fn straight_ahead(&self, heading: Heading) -> Option<Coordinate> {
        let next = self.position.step(heading)?;
        (self.grid.cell_at(next) != Cell::Blank).then_some(next)
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn heading(&self) -> Option<Heading> {
        self.heading
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }
}

/// Walk a diagram given as rows of text
pub fn traverse<S: AsRef<str>>(rows: &[S]) -> Result<Traversal, NavigationError> {
    let grid = Grid::new(rows);
    Walker::new(&grid)?.run()
}

// =============================================================================
// TESTS
// =============================================================================
