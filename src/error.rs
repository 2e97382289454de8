use core::fmt;

use crate::tile::TileId;

/// Errors surfaced by the watch face
///
/// Glyph lookup misses never reach the caller of the compositor; they are absorbed by the
/// table's miss policy. They are still an error value so that strict callers (see
/// [`glyph::GlyphTable::get`](crate::glyph::GlyphTable::get)) can report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The character has no entry in the glyph table
    LookupMiss(char),
    /// A tile could not be loaded from the platform
    AssetMissing(TileId),
    /// A field was built from text of the wrong width
    FieldWidth { expected: usize, found: usize },
    /// A configuration message named a key that isn't a setting
    UnknownSetting,
    /// A configuration value was neither `"true"` nor `"false"`
    InvalidValue,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LookupMiss(c) => write!(f, "no glyph for {:?}", c),
            Error::AssetMissing(id) => write!(f, "tile {:?} failed to load", id),
            Error::FieldWidth { expected, found } => {
                write!(f, "field must be {} characters, got {}", expected, found)
            }
            Error::UnknownSetting => f.write_str("unknown setting"),
            Error::InvalidValue => f.write_str("setting value must be \"true\" or \"false\""),
        }
    }
}
