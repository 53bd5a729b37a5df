//! The fetch, extract and render pipeline.
//!
//! Nothing here terminates the process. Failures come back as
//! [`anyhow::Error`] values carrying the step that failed, and the binary
//! decides how to report them.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::config::{GridLimits, RunConfig};
use crate::extract::{extract_from_str, Extraction};
use crate::fetch::fetch_document;
use crate::grid::Grid;

/// What a successful run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines written, one per grid row.
    pub rows_rendered: usize,
    /// Records placed on the grid, duplicates included.
    pub cells_placed: usize,
    /// Table rows left out because they did not fit the expected shape.
    pub rows_skipped: usize,
}

/// Fetch `url` and draw the grid described by its first table into `out`.
pub fn run<W: Write>(url: &str, config: &RunConfig, out: &mut W) -> Result<RunSummary> {
    let source = fetch_document(url, &config.fetch).context("Failed to fetch document")?;
    debug!(bytes = source.len(), "parsing document");

    render_html(&source, &config.limits, out)
}

/// Draw the grid described by the first table of an in-memory document.
///
/// Nothing is written to `out` unless a grid could be built.
pub fn render_html<W: Write>(source: &str, limits: &GridLimits, out: &mut W) -> Result<RunSummary> {
    let extraction = extract_from_str(source);
    render_extraction(&extraction, limits, out)
}

fn render_extraction<W: Write>(
    extraction: &Extraction,
    limits: &GridLimits,
    out: &mut W,
) -> Result<RunSummary> {
    trace!(cells = ?extraction.cells, "extracted cells");

    let grid = Grid::from_cells(&extraction.cells, limits)?;
    debug!(width = grid.width(), height = grid.height(), "rendering grid");

    grid.render(out).context("Failed to write grid")?;
    out.flush().context("Failed to write grid")?;

    Ok(RunSummary {
        rows_rendered: grid.height(),
        cells_placed: extraction.cells.len(),
        rows_skipped: extraction.skipped.len(),
    })
}
