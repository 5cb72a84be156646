//! Width-constrained reflow of markup-tagged text.
//!
//! The wrapper consumes the scanner's spans and greedily packs them into
//! lines by *visible* width: markup tags occupy no cells, everything
//! else is measured grapheme-aware. Tags are never split; URLs are only
//! split when the caller opts in; over-long plain words are hard-split
//! so every chunk fits.
//!
//! # Examples
//!
//! ```
//! use reflow::wrap;
//!
//! let folded = wrap("<info>All tests green.</info>", 12);
//! assert_eq!(folded, "<info>All tests\ngreen.</info>");
//!
//! // URLs stay whole even when they do not fit.
//! let folded = wrap("Visit https://example.com/docs now", 10);
//! assert_eq!(folded, "Visit\nhttps://example.com/docs\nnow");
//! ```

use crate::error::ReflowError;
use crate::scan::Scanner;
use crate::span::SpanKind;
use crate::width::{display_width, split_to_width};

/// Options for a single reflow pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrapOptions {
    /// Maximum visible cells per line. Zero disables wrapping.
    pub width: usize,
    /// Cut URLs like ordinary text instead of keeping them whole.
    pub cut_urls: bool,
}

impl WrapOptions {
    /// Create options with the given width and URLs kept whole.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            cut_urls: false,
        }
    }

    /// Set whether URLs may be cut at the width boundary.
    pub fn cut_urls(mut self, cut: bool) -> Self {
        self.cut_urls = cut;
        self
    }

    /// Returns true if this configuration leaves text untouched.
    pub fn is_noop(&self) -> bool {
        self.width == 0
    }
}

impl Default for WrapOptions {
    /// An unset width disables wrapping.
    fn default() -> Self {
        Self::new(0)
    }
}

/// Parse a wrap width from external text (a flag value or `COLUMNS`).
///
/// Negative and non-numeric values are rejected, never clamped.
///
/// # Examples
///
/// ```
/// use reflow::wrap::parse_width;
///
/// assert_eq!(parse_width("80").unwrap(), 80);
/// assert!(parse_width("-3").is_err());
/// assert!(parse_width("wide").is_err());
/// ```
pub fn parse_width(raw: &str) -> Result<usize, ReflowError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ReflowError::InvalidWidth(raw.to_string()))
}

/// Reflow `text` so that no line exceeds `width` visible cells.
///
/// Markup tags and URLs are kept whole; a `width` of zero returns the
/// input unchanged. See [`wrap_with_options`] for URL cutting.
pub fn wrap(text: &str, width: usize) -> String {
    wrap_with_options(text, &WrapOptions::new(width))
}

/// Reflow `text` with full options.
///
/// Explicit line breaks in the input are hard boundaries and reset the
/// width accumulator. Inserted breaks follow the input's own convention
/// (`\r\n` when the input uses it), never mixed within one output.
pub fn wrap_with_options(text: &str, options: &WrapOptions) -> String {
    if options.is_noop() {
        return text.to_string();
    }

    let line_break = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let mut wrapper = Wrapper::new(options.width, line_break);

    for span in Scanner::new(text) {
        match span.kind {
            SpanKind::Newline => wrapper.hard_break(),
            SpanKind::Tag => wrapper.push_tag(span.text),
            SpanKind::Space => wrapper.push_space(span.text),
            SpanKind::Word => wrapper.push_word(span.text),
            SpanKind::Url if options.cut_urls => wrapper.push_word(span.text),
            SpanKind::Url => wrapper.push_atom(span.text),
        }
    }

    wrapper.finish()
}

/// Accumulator for one reflow pass: the open line and its visible width.
///
/// All state lives here and is dropped when the pass returns; the
/// functions above are pure with respect to their inputs.
struct Wrapper<'a> {
    width: usize,
    line_break: &'a str,
    lines: Vec<String>,
    line: String,
    line_width: usize,
    /// The open line was started by a wrap-induced break rather than an
    /// explicit newline or the start of input.
    soft_started: bool,
}

impl<'a> Wrapper<'a> {
    fn new(width: usize, line_break: &'a str) -> Self {
        Self {
            width,
            line_break,
            lines: Vec::new(),
            line: String::new(),
            line_width: 0,
            soft_started: false,
        }
    }

    /// Close the line at an explicit input newline. Hard breaks always
    /// produce a line, blank or not.
    fn hard_break(&mut self) {
        self.lines.push(self.line.trim_end().to_string());
        self.line.clear();
        self.line_width = 0;
        self.soft_started = false;
    }

    /// Close the line at a wrap-induced break. The break consumes the
    /// whitespace it lands on; a line reduced to nothing by the trim was
    /// pure whitespace and produces no output line at all.
    fn soft_break(&mut self) {
        let trimmed = self.line.trim_end();
        if !trimmed.is_empty() {
            self.lines.push(trimmed.to_string());
        }
        self.line.clear();
        self.line_width = 0;
        self.soft_started = true;
    }

    /// Tags occupy no cells: they never force a break and are never cut.
    fn push_tag(&mut self, text: &str) {
        self.line.push_str(text);
    }

    fn push_space(&mut self, text: &str) {
        // No leading blanks on a line the wrapper itself started.
        // Indentation after an explicit newline passes through.
        if self.line_width == 0 && self.soft_started {
            return;
        }
        let width = display_width(text);
        if self.line_width > 0 && self.line_width + width > self.width {
            // The break lands on this run and consumes it.
            self.soft_break();
            return;
        }
        self.line.push_str(text);
        self.line_width += width;
    }

    fn push_word(&mut self, text: &str) {
        let width = display_width(text);
        if self.line_width + width <= self.width {
            self.line.push_str(text);
            self.line_width += width;
            return;
        }

        if self.line_width > 0 {
            self.soft_break();
        }

        if width <= self.width {
            self.line.push_str(text);
            self.line_width += width;
            return;
        }

        // Wider than a whole line: hard-split at grapheme boundaries.
        let chunks = split_to_width(text, self.width);
        let last = chunks.len().saturating_sub(1);
        for (i, chunk) in chunks.into_iter().enumerate() {
            self.line.push_str(chunk);
            self.line_width += display_width(chunk);
            if i < last {
                self.soft_break();
            }
        }
    }

    /// Place an atomic span that must not be cut. When wider than the
    /// limit it overflows a line of its own.
    fn push_atom(&mut self, text: &str) {
        let width = display_width(text);
        if self.line_width + width > self.width && self.line_width > 0 {
            self.soft_break();
        }
        self.line.push_str(text);
        self.line_width += width;
    }

    fn finish(mut self) -> String {
        let tail = self.line.trim_end();
        // A blank tail after a wrap-induced break is leftover from the
        // consumed whitespace, not a line of the input.
        if !tail.is_empty() || !self.soft_started {
            self.lines.push(tail.to_string());
        }
        self.lines.join(self.line_break)
    }
}
