//! Per-row parsing of `(x, character, y)` table rows.

use std::fmt;

/// Minimum number of cells a data row must carry.
pub const MIN_CELLS: usize = 3;

/// A character placed at an absolute grid coordinate.
///
/// `y` grows upwards: the record with the largest `y` is drawn on the first
/// output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedChar {
    /// Column, counted from the left edge.
    pub x: usize,
    /// Row, counted from the bottom edge.
    pub y: usize,
    /// Payload drawn at `(x, y)`. Usually a single character.
    pub c: String,
}

impl PositionedChar {
    pub fn new(x: usize, y: usize, c: impl Into<String>) -> Self {
        Self { x, y, c: c.into() }
    }
}

/// Which coordinate column a row error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Why a data row was left out of the grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("expected at least 3 cells, found {found}")]
    TooFewCells { found: usize },

    #[error("{axis} coordinate {raw:?} is not an integer")]
    InvalidCoordinate { axis: Axis, raw: String },

    #[error("{axis} coordinate {value} is negative")]
    NegativeCoordinate { axis: Axis, value: i64 },
}

/// Turn the trimmed text of one row's cells into a [`PositionedChar`].
///
/// Cells past the third are ignored. `x` is validated before `y`, so a row
/// with two bad coordinates reports the `x` column.
pub fn parse_row<S: AsRef<str>>(texts: &[S]) -> Result<PositionedChar, RowError> {
    if texts.len() < MIN_CELLS {
        return Err(RowError::TooFewCells { found: texts.len() });
    }

    let x = parse_coordinate(texts[0].as_ref(), Axis::X)?;
    let y = parse_coordinate(texts[2].as_ref(), Axis::Y)?;
    let c = texts[1].as_ref().trim();

    Ok(PositionedChar::new(x, y, c))
}

fn parse_coordinate(raw: &str, axis: Axis) -> Result<usize, RowError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| RowError::InvalidCoordinate {
            axis,
            raw: trimmed.to_string(),
        })?;

    usize::try_from(value).map_err(|_| RowError::NegativeCoordinate { axis, value })
}
