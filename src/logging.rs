//! Diagnostic output setup.
//!
//! Library code emits `tracing` events. With no tracing subscriber installed
//! those events are forwarded to the `log` facade, which `env_logger` prints
//! to stderr. `RUST_LOG` overrides the level chosen on the command line.

use log::LevelFilter;

/// Install the stderr logger. Only the first call has any effect.
pub fn init(level: LevelFilter) {
    let env = env_logger::Env::default().default_filter_or(level.as_str());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
