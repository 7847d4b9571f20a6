#![deny(warnings)]
#![deny(clippy::all)]

//! Conditional logging: debug lines reach stdout only when verbose, error
//! lines always reach stderr.
//!
//! ```no_run
//! vlog::init_from_env().ok();
//! vlog::printf!("count={}", 3);
//! vlog::errorf!("fail: {}", "disk full");
//! ```

pub mod config;
pub mod errors;
pub mod logger;
pub mod logging;
pub mod writer;

#[cfg(test)]
mod test_helpers;

pub use config::{parse_bool, Config, VERBOSE_ENV};
pub use errors::LogError;
pub use logger::{LogTarget, Logger, Opt};
pub use logging::{
    default_logger, errorf, init_from_env, init_logging, install_log_facade, printf,
};
pub use writer::Destination;

/// Debug line through the default logger, or through `target:` when given.
#[macro_export]
macro_rules! printf {
    (target: $target:expr, $($arg:tt)+) => {
        $crate::LogTarget::printf(&$target, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::printf(::std::format_args!($($arg)+))
    };
}

/// Error line through the default logger, or through `target:` when given.
#[macro_export]
macro_rules! errorf {
    (target: $target:expr, $($arg:tt)+) => {
        $crate::LogTarget::errorf(&$target, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::errorf(::std::format_args!($($arg)+))
    };
}
