use crate::config::Config;
use crate::errors::LogError;
use crate::logger::Logger;
use log::LevelFilter;
use once_cell::sync::OnceCell;
use std::fmt;

static DEFAULT: OnceCell<Logger> = OnceCell::new();

/// Builds the process-wide logger. Call once during startup; later calls fail
/// with [`LogError::AlreadyInitialized`] and leave the first logger in place.
pub fn init_logging(config: Config) -> Result<&'static Logger, LogError> {
    DEFAULT
        .set(Logger::from_config(&config))
        .map_err(|_| LogError::AlreadyInitialized)?;
    Ok(default_logger())
}

pub fn init_from_env() -> Result<&'static Logger, LogError> {
    init_logging(Config::from_env())
}

/// The process-wide logger, built from `VERBOSE` on first use if
/// [`init_logging`] was never called.
pub fn default_logger() -> &'static Logger {
    DEFAULT.get_or_init(|| Logger::from_config(&Config::from_env()))
}

/// Routes the `log` crate macros through the default logger.
pub fn install_log_facade() -> Result<(), LogError> {
    let logger = default_logger();
    log::set_logger(logger)?;
    log::set_max_level(if logger.is_verbose() {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    });
    Ok(())
}

/// Writes a debug line to stdout when the default logger is verbose.
#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) {
    default_logger().printf(args);
}

/// Writes an error line to stderr.
#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}
