//! Seven segment numerals
//!
//! A pattern is a 3x3 grid of cells indexed by `column * 3 + row`. The column picks the band of
//! the glyph from top to bottom and the row picks the stroke within that band.
//!
//! ```txt
//!            row 0   row 1   row 2
//!  column 0    .     TOP       .
//!  column 1  UL      MIDDLE   UR
//!  column 2  LL      BOTTOM   LR
//! ```
//!
//! The two cells of the top band marked `.` have no stroke; see
//! [`layout::SEVEN`](crate::layout::SEVEN).

use super::{glyphs, GlyphTable};

pub const TOP: usize = 1;
pub const UPPER_LEFT: usize = 3;
pub const MIDDLE: usize = 4;
pub const UPPER_RIGHT: usize = 5;
pub const LOWER_LEFT: usize = 6;
pub const BOTTOM: usize = 7;
pub const LOWER_RIGHT: usize = 8;

/// Numerals, blank and minus. Unmapped characters are skipped.
pub static TABLE: GlyphTable<9> = GlyphTable::new(
    glyphs! {
        '0' => [TOP, UPPER_LEFT, UPPER_RIGHT, LOWER_LEFT, BOTTOM, LOWER_RIGHT],
        '1' => [UPPER_RIGHT, LOWER_RIGHT],
        '2' => [TOP, UPPER_RIGHT, MIDDLE, LOWER_LEFT, BOTTOM],
        '3' => [TOP, UPPER_RIGHT, MIDDLE, BOTTOM, LOWER_RIGHT],
        '4' => [UPPER_LEFT, MIDDLE, UPPER_RIGHT, LOWER_RIGHT],
        '5' => [TOP, UPPER_LEFT, MIDDLE, BOTTOM, LOWER_RIGHT],
        '6' => [TOP, UPPER_LEFT, MIDDLE, LOWER_LEFT, BOTTOM, LOWER_RIGHT],
        '7' => [TOP, UPPER_RIGHT, LOWER_RIGHT],
        '8' => [TOP, UPPER_LEFT, MIDDLE, UPPER_RIGHT, LOWER_LEFT, BOTTOM, LOWER_RIGHT],
        '9' => [TOP, UPPER_LEFT, MIDDLE, UPPER_RIGHT, BOTTOM, LOWER_RIGHT],
        ' ' => [],
        '-' => [MIDDLE],
    },
    None,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_digit_is_mapped() {
        for c in '0'..='9' {
            assert!(TABLE.lookup(c).is_some(), "{c:?} is missing");
        }
    }

    #[test]
    fn characters_are_unique() {
        let glyphs = TABLE.glyphs();
        for (i, glyph) in glyphs.iter().enumerate() {
            assert!(
                glyphs[i + 1..].iter().all(|g| g.character != glyph.character),
                "{:?} is mapped twice",
                glyph.character
            );
        }
    }

    #[test]
    fn eight_lights_all_seven_strokes() {
        assert_eq!(TABLE.lookup('8').map(|p| p.lit_count()), Some(7));
        assert_eq!(TABLE.lookup('1').map(|p| p.lit_count()), Some(2));
    }

    #[test]
    fn unmapped_characters_have_no_glyph() {
        assert!(TABLE.resolve('A').is_none());
        assert!(TABLE.resolve(':').is_none());
    }
}
