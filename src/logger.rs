use crate::config::Config;
use crate::writer::{Destination, LineWriter};
use log::{Level, Metadata, Record};
use std::fmt;
use std::io::Write;
use std::sync::Arc;

pub const DEBUG_PREFIX: &str = "D";
pub const ERROR_PREFIX: &str = "E";

/// A configuration step applied by [`Logger::new`].
///
/// Options run in the order given; a later option overrides an earlier one
/// for the same destination. An `Opt` can be cloned and reused across loggers.
#[derive(Clone, Debug)]
pub enum Opt {
    /// `true` installs a debug destination on stdout, `false` removes it.
    Verbose(bool),
    DebugTo(Destination),
    ErrorTo(Destination),
}

impl Opt {
    pub fn verbose() -> Self {
        Opt::Verbose(true)
    }

    pub fn debug_to<W: Write + Send + 'static>(out: W) -> Self {
        Opt::DebugTo(Destination::pipe(out))
    }

    pub fn error_to<W: Write + Send + 'static>(out: W) -> Self {
        Opt::ErrorTo(Destination::pipe(out))
    }

    fn apply(self, logger: &mut Logger) {
        match self {
            Opt::Verbose(true) => logger.debug = Some(debug_writer(Destination::Stdout)),
            Opt::Verbose(false) => logger.debug = None,
            Opt::DebugTo(destination) => logger.debug = Some(debug_writer(destination)),
            Opt::ErrorTo(destination) => logger.err = Some(error_writer(destination)),
        }
    }
}

fn debug_writer(destination: Destination) -> LineWriter {
    LineWriter::new(DEBUG_PREFIX, Level::Debug, destination)
}

fn error_writer(destination: Destination) -> LineWriter {
    LineWriter::new(ERROR_PREFIX, Level::Error, destination)
}

/// Debug lines go to stdout only when verbose; error lines always go to stderr.
#[derive(Debug)]
pub struct Logger {
    debug: Option<LineWriter>,
    err: Option<LineWriter>,
}

impl Logger {
    pub fn new<I>(opts: I) -> Self
    where
        I: IntoIterator<Item = Opt>,
    {
        let mut logger = Logger {
            debug: None,
            err: Some(error_writer(Destination::Stderr)),
        };
        for opt in opts {
            opt.apply(&mut logger);
        }
        logger
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new([Opt::Verbose(config.verbose)])
    }

    /// Builds a logger from explicit destinations. Unlike [`Logger::new`], this
    /// allows the error destination to be absent.
    pub fn from_writers(debug: Option<Destination>, err: Option<Destination>) -> Self {
        Logger {
            debug: debug.map(debug_writer),
            err: err.map(error_writer),
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.debug.is_some()
    }

    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        if let Some(debug) = &self.debug {
            debug.write_args(args);
        }
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        if let Some(err) = &self.err {
            err.write_args(args);
        }
    }

    fn writer_for(&self, level: Level) -> Option<&LineWriter> {
        match level {
            Level::Error | Level::Warn => self.err.as_ref(),
            Level::Info | Level::Debug | Level::Trace => self.debug.as_ref(),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new([])
    }
}

/// Anything that can receive debug and error lines.
///
/// Implemented for `Option<T>` so that an absent logger can be called like a
/// present one; `None` drops every message.
pub trait LogTarget {
    #[track_caller]
    fn printf(&self, args: fmt::Arguments<'_>);

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>);
}

impl LogTarget for Logger {
    #[track_caller]
    fn printf(&self, args: fmt::Arguments<'_>) {
        Logger::printf(self, args);
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        Logger::errorf(self, args);
    }
}

impl<T: LogTarget + ?Sized> LogTarget for &T {
    #[track_caller]
    fn printf(&self, args: fmt::Arguments<'_>) {
        (**self).printf(args);
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        (**self).errorf(args);
    }
}

impl<T: LogTarget + ?Sized> LogTarget for Arc<T> {
    #[track_caller]
    fn printf(&self, args: fmt::Arguments<'_>) {
        (**self).printf(args);
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        (**self).errorf(args);
    }
}

impl<T: LogTarget> LogTarget for Option<T> {
    #[track_caller]
    fn printf(&self, args: fmt::Arguments<'_>) {
        if let Some(target) = self {
            target.printf(args);
        }
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        if let Some(target) = self {
            target.errorf(args);
        }
    }
}

// Error and Warn records take the error destination, everything else the debug one.
impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.writer_for(metadata.level()).is_some()
    }

    fn log(&self, record: &Record<'_>) {
        if let Some(writer) = self.writer_for(record.level()) {
            writer.write_record(record);
        }
    }

    fn flush(&self) {}
}
