//! Process-level helpers shared by the binary and tests

/// Initialize the `env_logger` backend.
///
/// Logs at info level, or debug when `verbose` is set; `RUST_LOG` takes
/// precedence when present. Calling this more than once is harmless.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
