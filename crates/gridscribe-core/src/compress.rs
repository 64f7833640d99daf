//! Greedy glyph compression by column removal.
//!
//! Columns are removed one at a time until the target width is reached.
//! Each round removes the remaining column with the lowest adjusted
//! score, where score = on-pixel density plus an edge bonus of 0.5 for
//! the first and last columns still present. The bonus discourages
//! trimming edges but does not make them immune. Ties break toward the
//! lowest index. Retained columns keep their original order.
//!
//! Scores are tracked in half-units so the 0.5 edge bonus stays
//! integral and the comparison is exact.

use crate::glyph::Glyph;

/// Edge bonus in half-units (0.5 density units).
const EDGE_BONUS_HALF_UNITS: u32 = 1;

/// Compresses a glyph down to `target_width` columns.
///
/// Returns the glyph unchanged when `target_width` is at or above the
/// current width. This is a greedy heuristic, not optimal column
/// selection.
pub fn compress_to_width(glyph: &Glyph, target_width: usize) -> Glyph {
    if target_width >= glyph.width() {
        return glyph.clone();
    }

    let mut columns: Vec<usize> = (0..glyph.width()).collect();
    while columns.len() > target_width {
        let mut remove_idx = 0;
        let mut best_score = u32::MAX;
        for (idx, &col) in columns.iter().enumerate() {
            let mut score = glyph.column_density(col) * 2;
            if idx == 0 || idx == columns.len() - 1 {
                score += EDGE_BONUS_HALF_UNITS;
            }
            // Strict comparison keeps the lowest index on ties.
            if score < best_score {
                best_score = score;
                remove_idx = idx;
            }
        }
        columns.remove(remove_idx);
    }

    Glyph::from_columns(columns.iter().map(|&c| glyph.column(c)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn glyph(rows: &[&str; 7]) -> Glyph {
        Glyph::from_rows(rows)
    }

    #[test]
    fn target_at_or_above_width_is_identity() {
        let g = glyph(&[
            "01110", "10001", "10001", "11111", "10001", "10001", "10001",
        ]);
        assert_eq!(compress_to_width(&g, 5), g);
        assert_eq!(compress_to_width(&g, 9), g);
    }

    #[test]
    fn compresses_to_exact_target_width() {
        let g = glyph(&[
            "01110", "10001", "10001", "11111", "10001", "10001", "10001",
        ]);
        assert_eq!(compress_to_width(&g, 4).width(), 4);
        assert_eq!(compress_to_width(&g, 3).width(), 3);
    }

    #[test]
    fn removes_lowest_density_column_first() {
        // Column densities: 7, 1, 7, 1, 7. The two sparse columns go
        // first; the dense ones survive.
        let g = glyph(&[
            "10101", "10101", "10101", "11111", "10101", "10101", "10101",
        ]);
        let compressed = compress_to_width(&g, 3);
        assert_eq!(compressed.columns(), &[0x7f, 0x7f, 0x7f]);
    }

    #[test]
    fn tie_breaks_toward_the_lowest_index() {
        // All columns equally dense: the first interior column (index 1)
        // scores below the edge-bonused ends and is removed first.
        let g = glyph(&[
            "11111", "11111", "00000", "00000", "00000", "00000", "00000",
        ]);
        let compressed = compress_to_width(&g, 4);
        // Surviving original columns: 0, 2, 3, 4.
        assert_eq!(compressed.columns(), &[0x03, 0x03, 0x03, 0x03]);
        assert_eq!(compressed.width(), 4);
    }

    #[test]
    fn edge_columns_can_still_be_removed() {
        // Interior columns strictly denser than the edges: despite the
        // bonus, the edges are the cheapest removals.
        let g = glyph(&[
            "01110", "01110", "01110", "01110", "01110", "01110", "01110",
        ]);
        let compressed = compress_to_width(&g, 3);
        assert_eq!(compressed.columns(), &[0x7f, 0x7f, 0x7f]);
    }

    #[test]
    fn blank_glyph_compresses_without_panicking() {
        let g = glyph(&[
            "00000", "00000", "00000", "00000", "00000", "00000", "00000",
        ]);
        assert_eq!(compress_to_width(&g, 3).width(), 3);
    }

    #[test]
    fn retained_columns_keep_their_order() {
        // Densities: 2, 1, 4, 0, 5. Removals: col 3, then col 1.
        let g = glyph(&[
            "00101", "00001", "10101", "01100", "10001", "00100", "00001",
        ]);
        let compressed = compress_to_width(&g, 3);
        assert_eq!(
            compressed.columns(),
            &[g.column(0), g.column(2), g.column(4)]
        );
    }
}
