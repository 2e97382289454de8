//! # Segment compositor
//!
//! Turns a fixed width field into the tiles to draw and where to draw them. For every character
//! slot the glyph is resolved, then every segment position of the [`Layout`] is visited in
//! order:
//!
//! - suppressed positions are never drawn
//! - lit segments use the lit tile
//! - unlit segments use the dim tile when halftone is on and are skipped otherwise
//!
//! A tile is always drawn at its own size. Commands come out in slot order, then position
//! order, and only depend on the text, the halftone flag and the static tables.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::image::Image;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Drawable;

use crate::field::FixedStr;
use crate::glyph::{fourteen, seven, GlyphTable};
use crate::layout::{self, Layout};
use crate::tile::{TileId, TileSet, Variant};

/// Draw `tile` over `area`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrawCommand {
    pub tile: TileId,
    pub area: Rectangle,
}

/// Composite any glyph set over any layout
pub fn composite<'a, S, const N: usize, const W: usize>(
    text: &'a FixedStr<W>,
    table: &'a GlyphTable<N>,
    layout: &'a Layout<N, W>,
    tiles: &'a S,
    halftone: bool,
) -> impl Iterator<Item = DrawCommand> + 'a
where
    S: TileSet,
{
    text.chars()
        .enumerate()
        .filter_map(move |(slot, c)| table.resolve(c).map(|pattern| (slot, pattern)))
        .flat_map(move |(slot, pattern)| {
            (0..N).filter_map(move |position| {
                if layout.suppressed[position] {
                    return None;
                }

                let variant = if pattern.is_lit(position) {
                    Variant::Lit
                } else if halftone {
                    Variant::Dim
                } else {
                    return None;
                };

                let tile = TileId::new(layout.roles[position], variant);
                let area = Rectangle::new(layout.origin(slot, position), tiles.size(tile));

                Some(DrawCommand { tile, area })
            })
        })
}

/// Seven segment time digits
pub fn composite7<'a, S: TileSet>(
    field: &'a FixedStr<4>,
    tiles: &'a S,
    halftone: bool,
) -> impl Iterator<Item = DrawCommand> + 'a {
    composite(field, &seven::TABLE, &layout::SEVEN, tiles, halftone)
}

/// Fourteen segment date and status text
pub fn composite14<'a, S: TileSet>(
    field: &'a FixedStr<5>,
    tiles: &'a S,
    halftone: bool,
) -> impl Iterator<Item = DrawCommand> + 'a {
    composite(field, &fourteen::TABLE, &layout::FOURTEEN, tiles, halftone)
}

/// Blit every command onto `target`
pub fn draw<D, S, I>(commands: I, tiles: &S, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
    S: TileSet,
    I: IntoIterator<Item = DrawCommand>,
{
    for command in commands {
        Image::new(tiles.tile(command.tile), command.area.top_left).draw(target)?;
    }

    Ok(())
}
