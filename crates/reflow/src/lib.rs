//! Markup- and URL-aware text reflow for terminal output.
//!
//! This crate reflows console text to a maximum visible width without
//! breaking inline markup tags or bare URLs. Markup uses angle-bracket
//! tags in matched pairs:
//!
//! - `<error>text</error>` - a named tag around styled text
//! - `<fg=green;options=bold>text</>` - attributes are opaque to the
//!   scanner; only the angle-bracket span matters here
//!
//! Tags occupy zero visible cells, so they never force a line break and
//! are never split. Bare `scheme://…` URLs are kept whole by default so
//! terminal emulators can still link them; over-long plain words are
//! hard-split at grapheme boundaries.
//!
//! Malformed markup never fails: an unmatched `<` is plain text.
//!
//! # Usage
//!
//! ```
//! use reflow::{wrap, wrap_with_options, WrapOptions};
//!
//! // A width of zero disables wrapping entirely.
//! assert_eq!(wrap("anything goes", 0), "anything goes");
//!
//! // Tags ride along without counting toward the width.
//! let folded = wrap("<info>All tests green.</info>", 12);
//! assert_eq!(folded, "<info>All tests\ngreen.</info>");
//!
//! // Opt in to cutting URLs like ordinary text.
//! let options = WrapOptions::new(8).cut_urls(true);
//! let folded = wrap_with_options("https://example.com", &options);
//! assert_eq!(folded, "https://\nexample.\ncom");
//! ```

pub mod error;
pub mod scan;
pub mod span;
pub mod width;
pub mod wrap;

// Re-export main types at crate root
pub use error::ReflowError;
pub use scan::{scan, Scanner};
pub use span::{Span, SpanKind};
pub use width::display_width;
pub use wrap::{parse_width, wrap, wrap_with_options, WrapOptions};
