//! Test doubles for the console layer.
//!
//! The capturing recorder substitutes for a real output stream so tests
//! can assert on exactly what would have been displayed.

use crate::console::{Level, Recorder};

/// A recorder that stores every message instead of displaying it.
///
/// # Examples
///
/// ```
/// use textflow_rs::console::{Level, Recorder};
/// use textflow_rs::testing::CapturingRecorder;
///
/// let mut capture = CapturingRecorder::new();
/// capture.record(Level::Info, "ready");
/// assert_eq!(capture.text(), "ready");
/// assert_eq!(capture.entries()[0].0, Level::Info);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CapturingRecorder {
    entries: Vec<(Level, String)>,
}

impl CapturingRecorder {
    /// Create an empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded entries in order.
    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    /// All recorded messages joined with line breaks.
    pub fn text(&self) -> String {
        self.entries
            .iter()
            .map(|(_, message)| message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every produced line across all messages.
    pub fn lines(&self) -> Vec<&str> {
        self.entries
            .iter()
            .flat_map(|(_, message)| message.lines())
            .collect()
    }

    /// Returns true if any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|(_, message)| message.contains(needle))
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Recorder for CapturingRecorder {
    fn record(&mut self, level: Level, message: &str) {
        self.entries.push((level, message.to_string()));
    }
}
