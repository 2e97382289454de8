//! Fourteen segment alphanumerics
//!
//! ```txt
//!    ---- 0 ----
//!   |\    |    /|
//!   1 2   3   4 5
//!   |  \  |  /  |
//!    --6-- --7--
//!   |  /  |  \  |
//!   8 9  10  11 12
//!   |/    |    \|
//!    ---- 13 ---
//! ```

use super::{glyphs, GlyphTable};

pub const TOP: usize = 0;
pub const UPPER_LEFT: usize = 1;
pub const UPPER_LEFT_DIAGONAL: usize = 2;
pub const UPPER_CENTER: usize = 3;
pub const UPPER_RIGHT_DIAGONAL: usize = 4;
pub const UPPER_RIGHT: usize = 5;
pub const MIDDLE_LEFT: usize = 6;
pub const MIDDLE_RIGHT: usize = 7;
pub const LOWER_LEFT: usize = 8;
pub const LOWER_LEFT_DIAGONAL: usize = 9;
pub const LOWER_CENTER: usize = 10;
pub const LOWER_RIGHT_DIAGONAL: usize = 11;
pub const LOWER_RIGHT: usize = 12;
pub const BOTTOM: usize = 13;

const A: usize = TOP;
const B: usize = UPPER_RIGHT;
const C: usize = LOWER_RIGHT;
const D: usize = BOTTOM;
const E: usize = LOWER_LEFT;
const F: usize = UPPER_LEFT;
const G1: usize = MIDDLE_LEFT;
const G2: usize = MIDDLE_RIGHT;
const H: usize = UPPER_LEFT_DIAGONAL;
const J: usize = UPPER_CENTER;
const K: usize = UPPER_RIGHT_DIAGONAL;
const L: usize = LOWER_LEFT_DIAGONAL;
const M: usize = LOWER_CENTER;
const N: usize = LOWER_RIGHT_DIAGONAL;

/// Glyph drawn in place of characters that aren't in [`TABLE`]
pub const FALLBACK: char = '?';

/// Digits, upper case letters and the punctuation used by the status row
pub static TABLE: GlyphTable<14> = GlyphTable::new(
    glyphs! {
        '0' => [A, B, C, D, E, F, K, L],
        '1' => [K, B, C],
        '2' => [A, B, G1, G2, E, D],
        '3' => [A, B, G2, C, D],
        '4' => [F, G1, G2, B, C],
        '5' => [A, F, G1, G2, C, D],
        '6' => [A, F, G1, G2, E, C, D],
        '7' => [A, B, C],
        '8' => [A, B, C, D, E, F, G1, G2],
        '9' => [A, B, C, D, F, G1, G2],
        'A' => [A, B, C, E, F, G1, G2],
        'B' => [A, B, C, D, J, M, G2],
        'C' => [A, D, E, F],
        'D' => [A, B, C, D, J, M],
        'E' => [A, D, E, F, G1],
        'F' => [A, E, F, G1],
        'G' => [A, C, D, E, F, G2],
        'H' => [B, C, E, F, G1, G2],
        'I' => [A, D, J, M],
        'J' => [B, C, D, E],
        'K' => [E, F, G1, K, N],
        'L' => [D, E, F],
        'M' => [B, C, E, F, H, K],
        'N' => [B, C, E, F, H, N],
        'O' => [A, B, C, D, E, F],
        'P' => [A, B, E, F, G1, G2],
        'Q' => [A, B, C, D, E, F, N],
        'R' => [A, B, E, F, G1, G2, N],
        'S' => [A, F, G1, G2, C, D],
        'T' => [A, J, M],
        'U' => [B, C, D, E, F],
        'V' => [E, F, K, L],
        'W' => [B, C, E, F, L, N],
        'X' => [H, K, L, N],
        'Y' => [H, K, M],
        'Z' => [A, D, K, L],
        ' ' => [],
        '%' => [F, C, K, L],
        '-' => [G1, G2],
        '+' => [G1, G2, J, M],
        '/' => [K, L],
        '?' => [A, B, G2, M],
    },
    Some(FALLBACK),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_letters_are_mapped() {
        for c in ('0'..='9').chain('A'..='Z') {
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
    fn unmapped_characters_fall_back_to_question_mark() {
        let question = TABLE.lookup(FALLBACK);
        assert!(question.is_some());
        assert_eq!(TABLE.resolve('a'), question);
        assert_eq!(TABLE.resolve('#'), question);
        assert!(TABLE.lookup('#').is_none());
    }

    #[test]
    fn blank_lights_nothing() {
        assert_eq!(TABLE.lookup(' ').map(|p| p.lit_count()), Some(0));
    }
}
