//! gridscribe core library.
//!
//! Renders a short text string as a pixel pattern over a contribution
//! heatmap grid (7 weekday rows, one column per week) and schedules the
//! calendar dates whose log records make an external tracker visualize
//! the pattern.
//!
//! # Pipeline
//!
//! Settings -> anchor Sunday -> canvas (glyph catalog + optional
//! compression + stitching) -> date schedule -> ASCII preview or
//! idempotent log append.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use gridscribe_core::{build_schedule, render_preview, resolve_anchor};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//! let anchor = resolve_anchor(None, today);
//!
//! let schedule = build_schedule("JOY", anchor, 1, None).unwrap();
//! assert!(!schedule.is_empty());
//!
//! let preview = render_preview("JOY", anchor, 1, None, Some(52)).unwrap();
//! assert!(preview.starts_with("Start Sunday: 2024-01-07"));
//! ```
//!
//! # Modules
//!
//! - [`font`]: static wide/narrow glyph catalog
//! - [`compress`]: greedy glyph column compression
//! - [`canvas`]: text stitching into one bitmap
//! - [`schedule`]: pixel-to-date mapping
//! - [`preview`]: ASCII rendering
//! - [`logfile`]: idempotent append-only log mutation
//! - [`settings`]: validated configuration
//! - [`error`]: error types

pub mod canvas;
pub mod compress;
pub mod error;
pub mod font;
pub mod glyph;
pub mod logfile;
pub mod preview;
pub mod schedule;
pub mod settings;

// Re-export commonly used items at the crate root
pub use canvas::{stitch, Canvas};
pub use compress::compress_to_width;
pub use error::{ConfigError, LogError, RenderError};
pub use glyph::{Glyph, GLYPH_HEIGHT};
pub use logfile::{append_if_missing, ensure_log_exists, record_line, LOG_HEADER};
pub use preview::render_preview;
pub use schedule::{build_schedule, nearest_previous_sunday, resolve_anchor, Pixel, Schedule};
pub use settings::{fit_font_width, validate_font_width, Settings};
