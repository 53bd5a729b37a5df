use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use docgrid::cli::{print_completions, Cli};

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        print_completions(shell, &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    docgrid::logging::init(cli.log_level());

    let url = cli
        .url
        .as_deref()
        .expect("clap requires URL unless --completions is given");

    let config = cli.run_config();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match docgrid::run(url, &config, &mut out) {
        Ok(summary) => {
            info!(
                rows = summary.rows_rendered,
                cells = summary.cells_placed,
                skipped = summary.rows_skipped,
                "grid rendered"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
