//! Glyph catalog: immutable lookup from character to fixed-height bitmap.
//!
//! Two alphabets exist: wide (5 columns) and narrow (3 columns). Width 5
//! always uses the wide table. Width 3 prefers the narrow table and falls
//! back to compressing the wide glyph when no narrow form exists. Width 4
//! always compresses the wide glyph. A character absent from the wide
//! table is unsupported outright.

mod tables;

use crate::compress::compress_to_width;
use crate::error::RenderError;
use crate::glyph::Glyph;

/// Nominal width of the wide alphabet.
pub const WIDE_WIDTH: usize = 5;

/// Nominal width of the narrow alphabet.
pub const NARROW_WIDTH: usize = 3;

/// Looks up the wide glyph for a character.
pub fn wide_glyph(ch: char) -> Result<Glyph, RenderError> {
    tables::wide_rows(ch)
        .map(Glyph::from_rows)
        .ok_or(RenderError::UnsupportedCharacter(ch))
}

/// Looks up the narrow glyph for a character, if one is defined.
pub fn narrow_glyph(ch: char) -> Option<Glyph> {
    tables::narrow_rows(ch).map(Glyph::from_rows)
}

/// Resolves the glyph for a character at an optional target width.
///
/// With no target width the wide glyph is returned as-is. Target widths
/// narrower than the wide glyph are produced per the alphabet rules
/// above; a target at or above the wide width is a no-op.
pub fn glyph_for(ch: char, target_width: Option<usize>) -> Result<Glyph, RenderError> {
    let wide = wide_glyph(ch)?;
    match target_width {
        Some(NARROW_WIDTH) => {
            if let Some(narrow) = narrow_glyph(ch) {
                return Ok(narrow);
            }
            Ok(compress_to_width(&wide, NARROW_WIDTH))
        }
        Some(target) if target >= NARROW_WIDTH && target < wide.width() => {
            Ok(compress_to_width(&wide, target))
        }
        _ => Ok(wide),
    }
}
