//! Validated run settings.
//!
//! Raw configuration (CLI flags and environment fallbacks) is resolved
//! into a [`Settings`] value before any rendering happens; every
//! invalid combination is rejected here so the pipeline itself never
//! sees bad input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default text rendered when none is configured.
pub const DEFAULT_TEXT: &str = "BAREFOOTJOEY";

/// Default log file path.
pub const DEFAULT_COMMIT_FILE: &str = "contrib_log.txt";

/// Default blank columns between characters.
pub const DEFAULT_SPACING: usize = 1;

/// Inclusive spacing bounds.
pub const MAX_SPACING: usize = 3;

/// Accepted glyph widths.
pub const MIN_FONT_WIDTH: usize = 3;
pub const MAX_FONT_WIDTH: usize = 5;

/// Validated configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Uppercased text to render.
    pub text: String,
    /// Configured leftmost Sunday; rounded back to a Sunday later by
    /// the scheduler. None means "anchor on today".
    pub start_sunday: Option<NaiveDate>,
    /// Log file to mutate.
    pub commit_file: String,
    /// Blank week columns between characters, 0..=3.
    pub spacing_columns: usize,
}

impl Settings {
    /// Resolves raw option values into validated settings.
    ///
    /// Text is trimmed and uppercased; an empty result is rejected.
    /// The date string must be `YYYY-MM-DD`.
    pub fn resolve(
        text: Option<&str>,
        start_sunday: Option<&str>,
        commit_file: Option<&str>,
        spacing_columns: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let text = text.unwrap_or(DEFAULT_TEXT).trim().to_uppercase();
        if text.is_empty() {
            return Err(ConfigError::EmptyText);
        }

        let start_sunday = start_sunday
            .map(|raw| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| ConfigError::InvalidDate(raw.to_string()))
            })
            .transpose()?;

        let spacing_columns = spacing_columns.unwrap_or(DEFAULT_SPACING);
        if spacing_columns > MAX_SPACING {
            return Err(ConfigError::SpacingOutOfRange(spacing_columns as u32));
        }

        Ok(Self {
            text,
            start_sunday,
            commit_file: commit_file.unwrap_or(DEFAULT_COMMIT_FILE).to_string(),
            spacing_columns,
        })
    }
}

/// Validates an explicitly requested font width.
pub fn validate_font_width(width: usize) -> Result<usize, ConfigError> {
    if (MIN_FONT_WIDTH..=MAX_FONT_WIDTH).contains(&width) {
        Ok(width)
    } else {
        Err(ConfigError::FontWidthOutOfRange(width as u32))
    }
}

/// Picks a font width so the rendered canvas approximates `fit_weeks`
/// total week columns at the given text length and spacing.
///
/// The estimate divides the non-spacing budget evenly per character and
/// clamps into the accepted 3..=5 width range.
pub fn fit_font_width(fit_weeks: usize, text_len: usize, spacing: usize) -> usize {
    let total_spacing = spacing * text_len.saturating_sub(1);
    let avail = fit_weeks.saturating_sub(total_spacing).max(1);
    let est = avail / text_len.max(1);
    est.clamp(MIN_FONT_WIDTH, MAX_FONT_WIDTH)
}
