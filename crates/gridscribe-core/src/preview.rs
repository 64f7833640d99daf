//! ASCII preview of the stitched canvas.

use chrono::NaiveDate;

use crate::canvas;
use crate::error::RenderError;
use crate::glyph::GLYPH_HEIGHT;

const FILLED: char = '█';
const EMPTY: char = '·';

/// Renders `text` as a header line plus 7 rows of filled/empty glyph
/// characters.
///
/// When `max_weeks` is given, every row is truncated to its first
/// `max_weeks` columns; the header reports the truncated width.
pub fn render_preview(
    text: &str,
    start_sunday: NaiveDate,
    spacing: usize,
    target_width: Option<usize>,
    max_weeks: Option<usize>,
) -> Result<String, RenderError> {
    let canvas = canvas::stitch(text, spacing, target_width)?;
    let width = match max_weeks {
        Some(cap) => canvas.width().min(cap),
        None => canvas.width(),
    };

    let mut out = format!(
        "Start Sunday: {}  Weeks: {}  Height: {}",
        start_sunday.format("%Y-%m-%d"),
        width,
        GLYPH_HEIGHT
    );
    for r in 0..GLYPH_HEIGHT {
        out.push('\n');
        for c in 0..width {
            out.push(if canvas.is_set(c, r) { FILLED } else { EMPTY });
        }
    }
    Ok(out)
}
