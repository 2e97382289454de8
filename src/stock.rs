//! # Stock tiles
//!
//! Segment bitmaps generated at compile time, sized for the [layouts](crate::layout) of a 144
//! pixel wide display. Bars and columns have tapered ends, diagonals are two pixel strokes and
//! every dim tile is its lit tile masked with a checkerboard.
//!
//! Bitmaps are one bit per pixel, most significant bit first, with each row padded to a whole
//! byte, the format `ImageRaw<BinaryColor>` reads.

use embedded_graphics::geometry::Size;
use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::BinaryColor;

use crate::tile::{TileId, TileLoader, TileRole, Variant};

pub const HORIZONTAL: Size = Size::new(25, 4);
pub const VERTICAL: Size = Size::new(4, 28);
pub const TOP: Size = Size::new(18, 3);
pub const SIDE: Size = Size::new(3, 11);
pub const DIAGONAL: Size = Size::new(7, 10);
pub const CENTER_VERTICAL: Size = Size::new(2, 10);
pub const MIDDLE_HORIZONTAL: Size = Size::new(8, 3);

/// Width of a diagonal stroke
const STROKE: i32 = 2;

#[derive(Clone, Copy)]
enum Shape {
    Bar,
    Column,
    Backslash,
    Slash,
}

/// How far a stroke end is cut back at `pos` across a stroke `extent` pixels thick
const fn taper(pos: i32, extent: i32) -> i32 {
    let far = extent - 1 - pos;
    let edge = if pos < far { pos } else { far };
    (extent - 1) / 2 - edge
}

const fn covers(shape: Shape, size: Size, x: u32, y: u32) -> bool {
    let (w, h) = (size.width as i32, size.height as i32);
    let (x, y) = (x as i32, y as i32);

    match shape {
        Shape::Bar => {
            let cut = taper(y, h);
            x >= cut && x < w - cut
        }
        Shape::Column => {
            let cut = taper(x, w);
            y >= cut && y < h - cut
        }
        Shape::Backslash => (x * (h - 1) - y * (w - 1)).abs() * 2 <= STROKE * (h - 1),
        Shape::Slash => ((w - 1 - x) * (h - 1) - y * (w - 1)).abs() * 2 <= STROKE * (h - 1),
    }
}

const fn len(size: Size) -> usize {
    (size.width as usize + 7) / 8 * size.height as usize
}

const fn bitmap<const LEN: usize>(shape: Shape, size: Size, dim: bool) -> [u8; LEN] {
    let stride = (size.width as usize + 7) / 8;
    let mut data = [0u8; LEN];

    let mut y = 0;
    while y < size.height {
        let mut x = 0;
        while x < size.width {
            if covers(shape, size, x, y) && (!dim || (x + y) % 2 == 0) {
                data[y as usize * stride + x as usize / 8] |= 0x80 >> (x % 8);
            }
            x += 1;
        }
        y += 1;
    }

    data
}

macro_rules! tiles {
    ($($lit:ident, $dim:ident => $shape:expr, $size:expr;)*) => {
        $(
            static $lit: [u8; len($size)] = bitmap($shape, $size, false);
            static $dim: [u8; len($size)] = bitmap($shape, $size, true);
        )*
    };
}

tiles! {
    HORIZONTAL_LIT, HORIZONTAL_DIM => Shape::Bar, HORIZONTAL;
    VERTICAL_LIT, VERTICAL_DIM => Shape::Column, VERTICAL;
    TOP_LIT, TOP_DIM => Shape::Bar, TOP;
    SIDE_LIT, SIDE_DIM => Shape::Column, SIDE;
    DIAGONAL_LEFT_LIT, DIAGONAL_LEFT_DIM => Shape::Backslash, DIAGONAL;
    DIAGONAL_RIGHT_LIT, DIAGONAL_RIGHT_DIM => Shape::Slash, DIAGONAL;
    CENTER_VERTICAL_LIT, CENTER_VERTICAL_DIM => Shape::Column, CENTER_VERTICAL;
    MIDDLE_HORIZONTAL_LIT, MIDDLE_HORIZONTAL_DIM => Shape::Bar, MIDDLE_HORIZONTAL;
}

fn bitmap_for(id: TileId) -> (&'static [u8], Size) {
    use crate::tile::TileRole::*;
    use crate::tile::Variant::*;

    match (id.role, id.variant) {
        (Horizontal, Lit) => (&HORIZONTAL_LIT[..], HORIZONTAL),
        (Horizontal, Dim) => (&HORIZONTAL_DIM[..], HORIZONTAL),
        (Vertical, Lit) => (&VERTICAL_LIT[..], VERTICAL),
        (Vertical, Dim) => (&VERTICAL_DIM[..], VERTICAL),
        (Top, Lit) => (&TOP_LIT[..], TOP),
        (Top, Dim) => (&TOP_DIM[..], TOP),
        (Side, Lit) => (&SIDE_LIT[..], SIDE),
        (Side, Dim) => (&SIDE_DIM[..], SIDE),
        (DiagonalLeft, Lit) => (&DIAGONAL_LEFT_LIT[..], DIAGONAL),
        (DiagonalLeft, Dim) => (&DIAGONAL_LEFT_DIM[..], DIAGONAL),
        (DiagonalRight, Lit) => (&DIAGONAL_RIGHT_LIT[..], DIAGONAL),
        (DiagonalRight, Dim) => (&DIAGONAL_RIGHT_DIM[..], DIAGONAL),
        (CenterVertical, Lit) => (&CENTER_VERTICAL_LIT[..], CENTER_VERTICAL),
        (CenterVertical, Dim) => (&CENTER_VERTICAL_DIM[..], CENTER_VERTICAL),
        (MiddleHorizontal, Lit) => (&MIDDLE_HORIZONTAL_LIT[..], MIDDLE_HORIZONTAL),
        (MiddleHorizontal, Dim) => (&MIDDLE_HORIZONTAL_DIM[..], MIDDLE_HORIZONTAL),
    }
}

pub type StockTile = ImageRaw<'static, BinaryColor>;

/// Loader for the built in tiles
#[derive(Debug, Clone, Copy, Default)]
pub struct StockTiles;

impl TileLoader for StockTiles {
    type Tile = StockTile;

    fn load_tile(&mut self, id: TileId) -> Option<Self::Tile> {
        let (data, size) = bitmap_for(id);
        Some(ImageRaw::new(data, size.width))
    }
}
