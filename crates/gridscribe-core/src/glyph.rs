//! Fixed-height glyph bitmaps.
//!
//! A glyph is a 7-row bitmap of 3 to 5 columns. Storage is column-major:
//! each column is a `u8` bitmask with bit `r` set when row `r` is on.
//! Column-major storage makes compression (column removal) and stitching
//! (column concatenation) cheap, and density is a single `count_ones`.

/// Glyph and canvas height in rows. Matches the 7 weekday rows of the
/// contribution grid.
pub const GLYPH_HEIGHT: usize = 7;

/// A single character's fixed-height bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    cols: Vec<u8>,
}

impl Glyph {
    /// Builds a glyph from 7 row pattern strings of equal width, where
    /// `'1'` marks an on pixel and any other character an off pixel.
    ///
    /// Panics if widths are unequal; catalog tables are compile-time
    /// constants validated by the catalog tests.
    pub fn from_rows(rows: &[&str; GLYPH_HEIGHT]) -> Self {
        let width = rows[0].len();
        let mut cols = vec![0u8; width];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "glyph rows must have equal width");
            for (c, ch) in row.bytes().enumerate() {
                if ch == b'1' {
                    cols[c] |= 1 << r;
                }
            }
        }
        Self { cols }
    }

    /// Builds a glyph directly from column bitmasks.
    pub fn from_columns(cols: Vec<u8>) -> Self {
        Self { cols }
    }

    /// Width in columns.
    pub fn width(&self) -> usize {
        self.cols.len()
    }

    /// Whether the pixel at (column, row) is on.
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        self.cols[col] & (1 << row) != 0
    }

    /// The bitmask for one column.
    pub fn column(&self, col: usize) -> u8 {
        self.cols[col]
    }

    /// Count of on pixels in one column.
    pub fn column_density(&self, col: usize) -> u32 {
        self.cols[col].count_ones()
    }

    /// All column bitmasks in order.
    pub fn columns(&self) -> &[u8] {
        &self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_rows_maps_bits_column_major() {
        let glyph = Glyph::from_rows(&["10", "01", "00", "00", "00", "00", "11"]);
        assert_eq!(glyph.width(), 2);
        assert!(glyph.is_set(0, 0));
        assert!(!glyph.is_set(1, 0));
        assert!(glyph.is_set(1, 1));
        assert!(glyph.is_set(0, 6));
        assert!(glyph.is_set(1, 6));
        assert_eq!(glyph.column_density(0), 2);
        assert_eq!(glyph.column_density(1), 2);
    }

    #[test]
    #[should_panic(expected = "equal width")]
    fn from_rows_rejects_ragged_rows() {
        let _ = Glyph::from_rows(&["10", "0", "00", "00", "00", "00", "00"]);
    }
}
