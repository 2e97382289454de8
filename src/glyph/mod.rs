//! # Glyph tables
//!
//! A glyph is the set of lit segments for one character. Tables are plain static data built
//! with the [`glyphs!`] macro; the order of entries doesn't matter as characters are unique.
//!
//! - [`seven`] holds the time numerals. A character that isn't in the table has no glyph and
//!   the compositor leaves its slot empty.
//! - [`fourteen`] holds the date and status characters. A character that isn't in the table is
//!   drawn as the `?` glyph.

pub mod fourteen;
pub mod seven;

use crate::error::Error;

/// On/off flags for each of the `N` segment positions of a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPattern<const N: usize>([bool; N]);

/// A seven segment pattern, laid out as a 3x3 grid of cells
pub type Pattern7 = SegmentPattern<9>;

/// A fourteen segment pattern
pub type Pattern14 = SegmentPattern<14>;

impl<const N: usize> SegmentPattern<N> {
    /// Every segment off
    pub const BLANK: Self = Self([false; N]);

    /// Build a pattern from the positions of its lit segments
    ///
    /// Panics (at compile time when used in a table) if a position is out of range.
    pub const fn from_segments(lit: &[usize]) -> Self {
        let mut flags = [false; N];
        let mut i = 0;
        while i < lit.len() {
            flags[lit[i]] = true;
            i += 1;
        }
        Self(flags)
    }

    pub const fn is_lit(&self, position: usize) -> bool {
        self.0[position]
    }

    pub const fn flags(&self) -> &[bool; N] {
        &self.0
    }

    /// Number of lit segments
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|&&lit| lit).count()
    }
}

/// A character and its segment pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<const N: usize> {
    pub character: char,
    pub pattern: SegmentPattern<N>,
}

/// Build a glyph slice from `character => [lit positions]` pairs
macro_rules! glyphs {
    ($($c:literal => [$($seg:expr),* $(,)?]),* $(,)?) => {
        &[
            $(
                $crate::glyph::Glyph {
                    character: $c,
                    pattern: $crate::glyph::SegmentPattern::from_segments(&[$($seg),*]),
                },
            )*
        ]
    };
}

pub(crate) use glyphs;

/// A glyph table together with its miss policy
#[derive(Debug)]
pub struct GlyphTable<const N: usize> {
    glyphs: &'static [Glyph<N>],
    fallback: Option<char>,
}

impl<const N: usize> GlyphTable<N> {
    /// Create a table. `fallback` names the character drawn in place of unmapped ones, `None`
    /// means unmapped characters are not drawn at all.
    pub const fn new(glyphs: &'static [Glyph<N>], fallback: Option<char>) -> Self {
        Self { glyphs, fallback }
    }

    /// Find the pattern for `c`
    pub fn lookup(&self, c: char) -> Option<&SegmentPattern<N>> {
        self.glyphs
            .iter()
            .find(|glyph| glyph.character == c)
            .map(|glyph| &glyph.pattern)
    }

    /// Find the pattern for `c`, treating a miss as an error
    pub fn get(&self, c: char) -> Result<&SegmentPattern<N>, Error> {
        self.lookup(c).ok_or(Error::LookupMiss(c))
    }

    /// Find the pattern to draw for `c`, applying the table's miss policy
    pub fn resolve(&self, c: char) -> Option<&SegmentPattern<N>> {
        self.lookup(c)
            .or_else(|| self.fallback.and_then(|fallback| self.lookup(fallback)))
    }

    pub fn glyphs(&self) -> &'static [Glyph<N>] {
        self.glyphs
    }

    pub fn fallback(&self) -> Option<char> {
        self.fallback
    }
}

/// Find the pattern for `c` in `table`
pub fn lookup<const N: usize>(table: &GlyphTable<N>, c: char) -> Option<&SegmentPattern<N>> {
    table.lookup(c)
}
