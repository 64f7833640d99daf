//! Error types for settings resolution, rendering, and log mutation.

use thiserror::Error;

/// Errors raised while resolving configuration into validated settings.
///
/// All of these are surfaced before any rendering or file I/O happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The text to render was empty after trimming.
    #[error("text must be non-empty")]
    EmptyText,

    /// A date string did not parse as `YYYY-MM-DD`.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Spacing columns outside the accepted 0..=3 range.
    #[error("spacing_columns must be between 0 and 3, got {0}")]
    SpacingOutOfRange(u32),

    /// Font width outside the accepted 3/4/5 set.
    #[error("font_width must be 3, 4, or 5, got {0}")]
    FontWidthOutOfRange(u32),
}

/// Errors raised while stitching text into a canvas.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The character has no glyph in the wide alphabet.
    #[error("unsupported character in font: {0:?}")]
    UnsupportedCharacter(char),
}

/// Errors raised by the log mutator.
///
/// The log file is non-critical side-channel state, so I/O failures
/// propagate to the caller instead of being retried or recovered here.
#[derive(Debug, Error)]
pub enum LogError {
    /// Underlying file read or write failed.
    #[error("log file I/O error: {0}")]
    Io(#[from] std::io::Error),
}
