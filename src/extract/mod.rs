//! Extraction of positioned characters from the first HTML table of a document.
//!
//! The expected table shape is one header row followed by data rows whose
//! first three cells hold `x`, the character, and `y`:
//!
//! ```text
//! | x-coordinate | Character | y-coordinate |
//! | 0            | █         | 0            |
//! | 1            | ▀         | 1            |
//! ```
//!
//! Extraction never fails. Rows that do not fit the shape are recorded in
//! [`Extraction::skipped`] and logged, and the caller decides what an empty
//! result means.

mod row;

pub use row::{parse_row, Axis, PositionedChar, RowError, MIN_CELLS};

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// A data row that did not make it into the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Index of the row within the table, the header being row 0.
    pub index: usize,
    pub reason: RowError,
}

/// Records pulled from a table, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub cells: Vec<PositionedChar>,
    pub skipped: Vec<SkippedRow>,
}

impl Extraction {
    /// True when no row produced a record.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Parse an HTML document.
///
/// HTML5 parsing recovers from any malformed markup, so this cannot fail.
pub fn parse_document(source: &str) -> Html {
    Html::parse_document(source)
}

/// Parse `source` and extract its first table in one step.
pub fn extract_from_str(source: &str) -> Extraction {
    extract_cells(&parse_document(source))
}

/// Collect `(x, character, y)` records from the first `<table>` in `document`.
///
/// Row 0 is treated as the header and skipped. Each remaining row needs at
/// least three `<td>` cells; the text of a cell is all of its descendant text,
/// trimmed.
pub fn extract_cells(document: &Html) -> Extraction {
    let table_selector = selector("table");
    let row_selector = selector("tr");
    let cell_selector = selector("td");

    let mut extraction = Extraction::default();

    let Some(table) = document.select(&table_selector).next() else {
        debug!("document contains no table");
        return extraction;
    };

    for (index, row) in table.select(&row_selector).enumerate().skip(1) {
        let texts: Vec<String> = row.select(&cell_selector).map(cell_text).collect();

        match parse_row(&texts) {
            Ok(cell) => extraction.cells.push(cell),
            Err(reason) => {
                match &reason {
                    RowError::TooFewCells { .. } => {
                        debug!(row = index, %reason, "skipping short table row")
                    }
                    _ => warn!(
                        row = index,
                        x = texts.first().map(String::as_str).unwrap_or_default(),
                        y = texts.get(2).map(String::as_str).unwrap_or_default(),
                        %reason,
                        "skipping invalid table row"
                    ),
                }
                extraction.skipped.push(SkippedRow { index, reason });
            }
        }
    }

    debug!(
        cells = extraction.cells.len(),
        skipped = extraction.skipped.len(),
        "table extraction finished"
    );
    extraction
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("Static selector should be valid")
}
