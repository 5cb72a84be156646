//! Error types for the reflow engine.

use thiserror::Error;

/// Errors surfaced at the configuration boundary.
///
/// Reflowing itself is total: malformed markup degrades to plain text
/// and never raises. The only rejected input is a width that arrives as
/// external text (a flag value, the `COLUMNS` variable) and does not
/// denote a non-negative integer. Inside the API, `usize` makes a
/// negative width unrepresentable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReflowError {
    /// Width parsed from external input was negative or not an integer.
    #[error("invalid wrap width: {0:?}")]
    InvalidWidth(String),
}
