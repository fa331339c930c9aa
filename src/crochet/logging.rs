use log::{LevelFilter, SetLoggerError};
use std::env;

/// Resolve the configured level name, with `--debug` taking precedence.
///
/// Unknown names fall back to `warn`.
pub fn level_filter(debug_enabled: bool, level: &str) -> LevelFilter {
    if debug_enabled {
        return LevelFilter::Debug;
    }
    level.trim().parse().unwrap_or(LevelFilter::Warn)
}

/// Initialize logging on stderr.
///
/// `RUST_LOG`, when set, overrides both `debug_enabled` and `level`.
pub fn init_logger(debug_enabled: bool, level: &str) -> Result<(), SetLoggerError> {
    let level = level_filter(debug_enabled, level);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.try_init()?;
    log::debug!("logger initialized at {level:?} level");
    Ok(())
}
