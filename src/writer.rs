use chrono::{DateTime, Local, TimeZone};
use env_logger::{Builder, Target, WriteStyle};
use log::{Level, LevelFilter, Log, Record};
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Arc, Mutex};

const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Where a [`LineWriter`] sends its lines. Cheap to clone; clones of a
/// `Shared` destination write into the same sink.
#[derive(Clone)]
pub enum Destination {
    Stdout,
    Stderr,
    Shared(Arc<Mutex<dyn Write + Send>>),
}

impl Destination {
    pub fn pipe<W: Write + Send + 'static>(out: W) -> Self {
        Destination::Shared(Arc::new(Mutex::new(out)))
    }

    pub fn shared<W: Write + Send + 'static>(out: Arc<Mutex<W>>) -> Self {
        Destination::Shared(out)
    }

    fn into_target(self) -> Target {
        match self {
            Destination::Stdout => Target::Stdout,
            Destination::Stderr => Target::Stderr,
            Destination::Shared(out) => Target::Pipe(Box::new(SharedPipe(out))),
        }
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("Stdout"),
            Destination::Stderr => f.write_str("Stderr"),
            Destination::Shared(_) => f.write_str("Shared(..)"),
        }
    }
}

struct SharedPipe(Arc<Mutex<dyn Write + Send>>);

impl Write for SharedPipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("destination lock poisoned"))?
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("destination lock poisoned"))?
            .flush()
    }
}

/// One tagged destination: `<tag><date> <time> <file>:<line>: <message>`.
///
/// Backed by an `env_logger::Logger` that is built but never installed, so
/// every record it receives is written, regardless of the global max level.
pub struct LineWriter {
    tag: &'static str,
    level: Level,
    inner: env_logger::Logger,
}

impl LineWriter {
    pub fn new(tag: &'static str, level: Level, destination: Destination) -> Self {
        let inner = Builder::new()
            .target(destination.into_target())
            .write_style(WriteStyle::Never)
            .filter_level(LevelFilter::Trace)
            .format(move |buf, record| {
                let line = format_line(
                    tag,
                    &Local::now(),
                    record.file().unwrap_or("???"),
                    record.line().unwrap_or(0),
                    *record.args(),
                );
                buf.write_all(line.as_bytes())
            })
            .build();
        Self { tag, level, inner }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Writes one line attributed to the caller's source location.
    #[track_caller]
    pub fn write_args(&self, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        self.write_at(caller.file(), caller.line(), args);
    }

    pub fn write_at(&self, file: &str, line: u32, args: fmt::Arguments<'_>) {
        self.write_record(
            &Record::builder()
                .level(self.level)
                .args(args)
                .file(Some(file))
                .line(Some(line))
                .build(),
        );
    }

    pub fn write_record(&self, record: &Record<'_>) {
        self.inner.log(record);
    }
}

impl fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("tag", &self.tag)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

pub fn format_line<Tz>(
    tag: &str,
    time: &DateTime<Tz>,
    file: &str,
    line: u32,
    args: fmt::Arguments<'_>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut text = format!(
        "{}{} {}:{}: {}",
        tag,
        time.format(TIME_FORMAT),
        short_file(file),
        line,
        args
    );
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Base name of a source path, for either separator.
fn short_file(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}
