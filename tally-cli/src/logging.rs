//! Logger installation for the command-line front end.

use log::LevelFilter;

/// Maps the number of `-v` flags to a default level.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs a timed `pretty_env_logger` writing to stderr.
///
/// `RUST_LOG`, when set, overrides the level chosen by `-v`.
pub fn init(verbosity: u8) {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(level_for(verbosity));
    builder.parse_default_env();

    // A logger may already be installed when running under a test harness.
    let _ = builder.try_init();
}
