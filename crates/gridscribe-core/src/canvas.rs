//! Canvas stitching: text to one fixed-height bitmap.

use crate::error::RenderError;
use crate::font;
use crate::glyph::GLYPH_HEIGHT;

/// The stitched bitmap for a whole text string: 7 rows tall, one column
/// per week. Stored column-major like [`crate::glyph::Glyph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cols: Vec<u8>,
}

impl Canvas {
    /// Width in week columns.
    pub fn width(&self) -> usize {
        self.cols.len()
    }

    /// Height in rows, always 7.
    pub fn height(&self) -> usize {
        GLYPH_HEIGHT
    }

    /// Whether the pixel at (column, row) is on.
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        self.cols[col] & (1 << row) != 0
    }

    /// All column bitmasks in order.
    pub fn columns(&self) -> &[u8] {
        &self.cols
    }
}

/// Stitches `text` into a canvas at the given inter-character spacing
/// and optional target glyph width.
///
/// Glyphs are appended in character order with `spacing` blank columns
/// between consecutive glyphs (none after the last). Pure function of
/// its inputs.
pub fn stitch(text: &str, spacing: usize, target_width: Option<usize>) -> Result<Canvas, RenderError> {
    let mut cols = Vec::new();
    let last = text.chars().count().saturating_sub(1);
    for (index, ch) in text.chars().enumerate() {
        let glyph = font::glyph_for(ch, target_width)?;
        cols.extend_from_slice(glyph.columns());
        if index != last {
            cols.extend(std::iter::repeat(0u8).take(spacing));
        }
    }
    Ok(Canvas { cols })
}
