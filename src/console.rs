//! Console output helpers: severity levels, the recorder capability, and
//! a width-aware console that reflows text before recording it.
//!
//! The recorder is an injected seam. Production code hands the console a
//! stream- or log-backed recorder; tests substitute the capturing one
//! from [`crate::testing`].

use std::fmt;
use std::io::Write;

use reflow::{parse_width, wrap_with_options, ReflowError, WrapOptions};

/// Severity of a recorded message. `Error` orders first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

impl Level {
    /// Uppercase label used in recorded output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Notice => "NOTICE",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    fn log_level(&self) -> log::Level {
        match self {
            Level::Error => log::Level::Error,
            Level::Warning => log::Level::Warn,
            Level::Notice | Level::Info => log::Level::Info,
            Level::Debug => log::Level::Debug,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The capability the console records through.
///
/// Implementations display, forward, or capture messages; the console
/// itself only reflows and hands them over.
pub trait Recorder {
    /// Record one (possibly multi-line) message at the given level.
    fn record(&mut self, level: Level, message: &str);
}

impl<R: Recorder + ?Sized> Recorder for &mut R {
    fn record(&mut self, level: Level, message: &str) {
        (**self).record(level, message);
    }
}

/// Records `[LEVEL] message` lines to any writer.
pub struct StreamRecorder<W: Write> {
    sink: W,
}

impl<W: Write> StreamRecorder<W> {
    /// Create a recorder over the given sink.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Consume the recorder and return the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Recorder for StreamRecorder<W> {
    fn record(&mut self, level: Level, message: &str) {
        let _ = writeln!(self.sink, "[{}] {}", level, message);
    }
}

/// Forwards records to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogRecorder;

impl Recorder for LogRecorder {
    fn record(&mut self, level: Level, message: &str) {
        log::log!(level.log_level(), "{}", message);
    }
}

/// A console that reflows every message before recording it.
///
/// # Examples
///
/// ```
/// use textflow_rs::console::Console;
/// use textflow_rs::testing::CapturingRecorder;
///
/// let mut console = Console::new(CapturingRecorder::new()).wrap_to(20);
/// console.error("<error>Failed to add book: Title already exists.</error>");
///
/// let capture = console.into_recorder();
/// assert_eq!(capture.entries().len(), 1);
/// assert!(capture.contains("<error>Failed to add book:"));
/// ```
pub struct Console<R: Recorder> {
    recorder: R,
    options: WrapOptions,
}

impl<R: Recorder> Console<R> {
    /// Create a console with wrapping disabled.
    pub fn new(recorder: R) -> Self {
        Self {
            recorder,
            options: WrapOptions::default(),
        }
    }

    /// Set the maximum visible line width. Zero disables wrapping.
    pub fn wrap_to(mut self, width: usize) -> Self {
        self.options.width = width;
        self
    }

    /// Allow URLs to be cut at the width boundary.
    pub fn cut_urls(mut self, cut: bool) -> Self {
        self.options.cut_urls = cut;
        self
    }

    /// Create a console sized from the `COLUMNS` environment variable.
    ///
    /// An unset variable disables wrapping. A value that is present but
    /// negative or non-numeric is rejected, not clamped.
    pub fn from_env(recorder: R) -> Result<Self, ReflowError> {
        let width = match std::env::var("COLUMNS") {
            Ok(raw) => parse_width(&raw)?,
            Err(_) => 0,
        };
        Ok(Self::new(recorder).wrap_to(width))
    }

    /// The active wrap configuration.
    pub fn options(&self) -> &WrapOptions {
        &self.options
    }

    /// Reflow `text` and record the result at `level`.
    pub fn say(&mut self, level: Level, text: &str) {
        let folded = wrap_with_options(text, &self.options);
        self.recorder.record(level, &folded);
    }

    /// Record at [`Level::Error`].
    pub fn error(&mut self, text: &str) {
        self.say(Level::Error, text);
    }

    /// Record at [`Level::Warning`].
    pub fn warning(&mut self, text: &str) {
        self.say(Level::Warning, text);
    }

    /// Record at [`Level::Notice`].
    pub fn notice(&mut self, text: &str) {
        self.say(Level::Notice, text);
    }

    /// Record at [`Level::Info`].
    pub fn info(&mut self, text: &str) {
        self.say(Level::Info, text);
    }

    /// Record at [`Level::Debug`].
    pub fn debug(&mut self, text: &str) {
        self.say(Level::Debug, text);
    }

    /// Consume the console and return the recorder.
    pub fn into_recorder(self) -> R {
        self.recorder
    }
}
