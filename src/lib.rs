//! docgrid - draw the character grid stored in a published document.
//!
//! A document's first HTML table lists one character per row together with
//! its `x` and `y` coordinate. docgrid fetches the document, pulls those rows
//! out and prints the reconstructed grid, highest `y` first.
//!
//! ```
//! use docgrid::{render_html, GridLimits};
//!
//! let html = "<table>\
//!     <tr><td>x</td><td>char</td><td>y</td></tr>\
//!     <tr><td>0</td><td>H</td><td>0</td></tr>\
//!     <tr><td>1</td><td>I</td><td>0</td></tr>\
//!     </table>";
//!
//! let mut out = Vec::new();
//! render_html(html, &GridLimits::default(), &mut out).unwrap();
//! assert_eq!(out, b"HI\n");
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod grid;
pub mod logging;

pub use app::{render_html, run, RunSummary};
pub use config::{FetchConfig, GridLimits, RunConfig};
pub use extract::{extract_cells, parse_document, Extraction, PositionedChar, RowError};
pub use fetch::{fetch_document, FetchError};
pub use grid::{Grid, GridError};
