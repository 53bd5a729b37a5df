//! Command line definition.
//!
//! Lives in the library so the xtask man page generator can render it.

use std::io::Write;
use std::time::Duration;

use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::Shell;
use log::LevelFilter;

use crate::config::{FetchConfig, GridLimits, RunConfig, DEFAULT_MAX_CELLS};

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("DOCGRID_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("DOCGRID_BUILD_DATE"),
    ")"
);

/// Draw the character grid stored in a published document's first table.
#[derive(Debug, Parser)]
#[command(
    name = "docgrid",
    version,
    long_version = LONG_VERSION,
    about = "Fetch a published document and draw the character grid stored in its first table",
    long_about = "Fetch a published document and draw the character grid stored in its first table.\n\n\
        Every row after the table's header must hold an x coordinate, a character and a \
        y coordinate. The grid is printed with the highest y on the first line.",
    after_help = "Example:\n  docgrid https://docs.google.com/document/d/e/<id>/pub"
)]
pub struct Cli {
    /// URL of the publicly accessible document
    #[arg(value_name = "URL", required_unless_present = "completions")]
    pub url: Option<String>,

    /// Largest grid, in cells (width x height), that will be allocated
    #[arg(long, value_name = "CELLS", default_value_t = DEFAULT_MAX_CELLS)]
    pub max_cells: usize,

    /// Abort the request after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a completion script for SHELL and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Runtime configuration described by the flags.
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            fetch: FetchConfig {
                timeout: self.timeout.map(Duration::from_secs),
                ..FetchConfig::default()
            },
            limits: GridLimits::new(self.max_cells),
        }
    }

    /// Log level picked by `--quiet` and the number of `--verbose` flags.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Write a completion script for `shell` to `out`.
pub fn print_completions<W: Write>(shell: Shell, out: &mut W) {
    clap_complete::generate(shell, &mut Cli::command(), "docgrid", out);
}
