//! Hardcoded glyph pattern tables (1 = pixel on, 0 = pixel off).
//!
//! Rows run top to bottom. The wide alphabet covers `A..=Z` and space;
//! the narrow alphabet is a handcrafted subset and gaps fall back to
//! compressing the wide glyph.

/// 5x7 row patterns for a character, if the wide alphabet defines it.
pub(crate) fn wide_rows(ch: char) -> Option<&'static [&'static str; 7]> {
    let rows: &[&str; 7] = match ch {
        'A' => &[
            "01110", //
            "10001", //
            "10001", //
            "11111", //
            "10001", //
            "10001", //
            "10001", //
        ],
        'B' => &[
            "11110", //
            "10001", //
            "10001", //
            "11110", //
            "10001", //
            "10001", //
            "11110", //
        ],
        'C' => &[
            "01110", //
            "10001", //
            "10000", //
            "10000", //
            "10000", //
            "10001", //
            "01110", //
        ],
        'D' => &[
            "11110", //
            "10001", //
            "10001", //
            "10001", //
            "10001", //
            "10001", //
            "11110", //
        ],
        'E' => &[
            "11111", //
            "10000", //
            "10000", //
            "11110", //
            "10000", //
            "10000", //
            "11111", //
        ],
        'F' => &[
            "11111", //
            "10000", //
            "10000", //
            "11110", //
            "10000", //
            "10000", //
            "10000", //
        ],
        'G' => &[
            "01110", //
            "10001", //
            "10000", //
            "10111", //
            "10001", //
            "10001", //
            "01111", //
        ],
        'H' => &[
            "10001", //
            "10001", //
            "10001", //
            "11111", //
            "10001", //
            "10001", //
            "10001", //
        ],
        'I' => &[
            "01110", //
            "00100", //
            "00100", //
            "00100", //
            "00100", //
            "00100", //
            "01110", //
        ],
        'J' => &[
            "00111", //
            "00001", //
            "00001", //
            "00001", //
            "10001", //
            "10001", //
            "01110", //
        ],
        'K' => &[
            "10001", //
            "10010", //
            "10100", //
            "11000", //
            "10100", //
            "10010", //
            "10001", //
        ],
        'L' => &[
            "10000", //
            "10000", //
            "10000", //
            "10000", //
            "10000", //
            "10000", //
            "11111", //
        ],
        'M' => &[
            "10001", //
            "11011", //
            "10101", //
            "10001", //
            "10001", //
            "10001", //
            "10001", //
        ],
        'N' => &[
            "10001", //
            "11001", //
            "10101", //
            "10011", //
            "10001", //
            "10001", //
            "10001", //
        ],
        'O' => &[
            "01110", //
            "10001", //
            "10001", //
            "10001", //
            "10001", //
            "10001", //
            "01110", //
        ],
        'P' => &[
            "11110", //
            "10001", //
            "10001", //
            "11110", //
            "10000", //
            "10000", //
            "10000", //
        ],
        'Q' => &[
            "01110", //
            "10001", //
            "10001", //
            "10001", //
            "10101", //
            "10010", //
            "01101", //
        ],
        'R' => &[
            "11110", //
            "10001", //
            "10001", //
            "11110", //
            "10100", //
            "10010", //
            "10001", //
        ],
        'S' => &[
            "01111", //
            "10000", //
            "10000", //
            "01110", //
            "00001", //
            "00001", //
            "11110", //
        ],
        'T' => &[
            "11111", //
            "00100", //
            "00100", //
            "00100", //
            "00100", //
            "00100", //
            "00100", //
        ],
        'U' => &[
            "10001", //
            "10001", //
            "10001", //
            "10001", //
            "10001", //
            "10001", //
            "01110", //
        ],
        'V' => &[
            "10001", //
            "10001", //
            "10001", //
            "10001", //
            "10001", //
            "01010", //
            "00100", //
        ],
        'W' => &[
            "10001", //
            "10001", //
            "10001", //
            "10101", //
            "10101", //
            "11011", //
            "10001", //
        ],
        'X' => &[
            "10001", //
            "10001", //
            "01010", //
            "00100", //
            "01010", //
            "10001", //
            "10001", //
        ],
        'Y' => &[
            "10001", //
            "10001", //
            "01010", //
            "00100", //
            "00100", //
            "00100", //
            "00100", //
        ],
        'Z' => &[
            "11111", //
            "00001", //
            "00010", //
            "00100", //
            "01000", //
            "10000", //
            "11111", //
        ],
        ' ' => &[
            "00000", //
            "00000", //
            "00000", //
            "00000", //
            "00000", //
            "00000", //
            "00000", //
        ],
        _ => return None,
    };
    Some(rows)
}

/// Handcrafted compact 3x7 row patterns. Characters missing here are
/// rendered by compressing their wide glyph instead.
pub(crate) fn narrow_rows(ch: char) -> Option<&'static [&'static str; 7]> {
    let rows: &[&str; 7] = match ch {
        'A' => &[
            "010", //
            "101", //
            "101", //
            "111", //
            "101", //
            "101", //
            "101", //
        ],
        'B' => &[
            "110", //
            "101", //
            "101", //
            "110", //
            "101", //
            "101", //
            "110", //
        ],
        'E' => &[
            "111", //
            "100", //
            "100", //
            "110", //
            "100", //
            "100", //
            "111", //
        ],
        'F' => &[
            "111", //
            "100", //
            "100", //
            "110", //
            "100", //
            "100", //
            "100", //
        ],
        'J' => &[
            "111", //
            "001", //
            "001", //
            "001", //
            "101", //
            "101", //
            "010", //
        ],
        'O' => &[
            "010", //
            "101", //
            "101", //
            "101", //
            "101", //
            "101", //
            "010", //
        ],
        'R' => &[
            "110", //
            "101", //
            "101", //
            "110", //
            "110", //
            "101", //
            "101", //
        ],
        'T' => &[
            "111", //
            "010", //
            "010", //
            "010", //
            "010", //
            "010", //
            "010", //
        ],
        'Y' => &[
            "101", //
            "101", //
            "010", //
            "010", //
            "010", //
            "010", //
            "010", //
        ],
        ' ' => &[
            "000", //
            "000", //
            "000", //
            "000", //
            "000", //
            "000", //
            "000", //
        ],
        _ => return None,
    };
    Some(rows)
}
