//! Runtime configuration.
//!
//! docgrid reads no config file; every field here is filled from command
//! line flags or left at its default.

use std::time::Duration;

/// Default upper bound on `width * height` of a rendered grid.
pub const DEFAULT_MAX_CELLS: usize = 4 * 1024 * 1024;

/// Default cap on the size of a fetched document body.
pub const DEFAULT_MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

/// Limits applied before a grid buffer is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLimits {
    /// Largest number of cells (`width * height`) a grid may hold.
    pub max_cells: usize,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl GridLimits {
    /// Creates limits allowing at most `max_cells` cells (minimum 1).
    pub fn new(max_cells: usize) -> Self {
        Self {
            max_cells: max_cells.max(1),
        }
    }
}

/// Settings for the single HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Overall request timeout. `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
    /// Bodies larger than this are rejected.
    pub max_body_bytes: u64,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            user_agent: format!("docgrid/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Everything a run needs besides the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub fetch: FetchConfig,
    pub limits: GridLimits,
}
