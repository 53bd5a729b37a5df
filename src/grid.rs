//! Dense character grid rebuilt from sparse positioned characters.
//!
//! Coordinates are Cartesian: `y = 0` is the bottom row, so rendering walks
//! rows from the highest `y` down to zero.

use std::fmt;
use std::io::{self, Write};

use crate::config::GridLimits;
use crate::extract::PositionedChar;

/// Character used for cells nothing was written to.
pub const BLANK: char = ' ';

/// Errors raised while sizing a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("No valid table data found")]
    Empty,

    #[error("Grid of {width}x{height} cells exceeds the limit of {max_cells} cells")]
    TooLarge {
        width: usize,
        height: usize,
        max_cells: usize,
    },
}

/// A blank-initialized, row-major buffer of `height` rows by `width` columns.
///
/// Cells borrow their payload from the records the grid was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<'a> {
    width: usize,
    height: usize,
    cells: Vec<Option<&'a str>>,
}

impl<'a> Grid<'a> {
    /// Build a grid just large enough to hold every record.
    ///
    /// Records are written in slice order, so when two share a coordinate
    /// the later one is the one drawn.
    pub fn from_cells(cells: &'a [PositionedChar], limits: &GridLimits) -> Result<Self, GridError> {
        let max_x = cells.iter().map(|cell| cell.x).max().ok_or(GridError::Empty)?;
        let max_y = cells.iter().map(|cell| cell.y).max().ok_or(GridError::Empty)?;

        let width = max_x.saturating_add(1);
        let height = max_y.saturating_add(1);
        let too_large = GridError::TooLarge {
            width,
            height,
            max_cells: limits.max_cells,
        };

        let total = width.checked_mul(height).ok_or_else(|| too_large.clone())?;
        if total > limits.max_cells {
            return Err(too_large);
        }

        let mut grid = Self {
            width,
            height,
            cells: vec![None; total],
        };
        for cell in cells {
            let index = grid.index(cell.x, cell.y);
            grid.cells[index] = Some(cell.c.as_str());
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Payload at `(x, y)`, or `None` for a blank or out-of-range cell.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a str> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[self.index(x, y)]
    }

    /// Output lines, top row (highest `y`) first, trailing blanks removed.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).rev().map(move |y| self.line(y))
    }

    /// Write every line followed by a newline.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn line(&self, y: usize) -> String {
        let start = y * self.width;
        let row = &self.cells[start..start + self.width];

        let mut line = String::with_capacity(self.width);
        for cell in row {
            match cell {
                // An empty payload takes no width, so its column collapses
                Some(payload) => line.push_str(payload),
                None => line.push(BLANK),
            }
        }

        let trimmed = line.trim_end_matches(BLANK).len();
        line.truncate(trimmed);
        line
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
