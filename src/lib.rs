//! Width-aware console output helpers.
//!
//! This crate sits above the [`reflow`] engine and gives an application
//! a small console surface: severity [`Level`]s, a [`Recorder`]
//! capability to display or forward messages, and a [`Console`] that
//! reflows every message to the configured width before recording it.
//! Markup tags and URLs survive the reflow intact; see the `reflow`
//! crate for the wrapping rules.
//!
//! # Usage
//!
//! ```
//! use textflow_rs::{Console, StreamRecorder};
//!
//! let mut console = Console::new(StreamRecorder::new(Vec::new())).wrap_to(40);
//! console.info("<info>Import finished without conflicts.</info>");
//!
//! let written = console.into_recorder().into_inner();
//! assert!(String::from_utf8(written).unwrap().starts_with("[INFO] "));
//! ```
//!
//! In tests, substitute the capturing recorder:
//!
//! ```
//! use textflow_rs::Console;
//! use textflow_rs::testing::CapturingRecorder;
//!
//! let mut console = Console::new(CapturingRecorder::new()).wrap_to(12);
//! console.warning("hello world foo bar");
//! assert_eq!(console.into_recorder().lines(), vec!["hello world", "foo bar"]);
//! ```

pub mod console;
pub mod testing;

pub use console::{Console, Level, LogRecorder, Recorder, StreamRecorder};

// Re-export the engine so callers need only one dependency.
pub use reflow::{
    display_width, parse_width, wrap, wrap_with_options, ReflowError, Scanner, Span, SpanKind,
    WrapOptions,
};
