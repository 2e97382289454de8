//! # Field geometry
//!
//! Where every segment tile goes, relative to the top left corner of its field. All of it is
//! constant data: a horizontal offset per character slot plus a horizontal and vertical offset
//! per segment position within the character.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::tile::TileRole;
use crate::tile::TileRole::{
    CenterVertical as CV, DiagonalLeft as DL, DiagonalRight as DR, Horizontal as H,
    MiddleHorizontal as MH, Side as S, Top as T, Vertical as V,
};

/// Placement of an `N` segment glyph set across a `W` character field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<const N: usize, const W: usize> {
    /// Horizontal offset of each character slot
    pub slots: [i32; W],
    /// Horizontal offset of each segment position within a character
    pub x: [i32; N],
    /// Vertical offset of each segment position
    pub y: [i32; N],
    /// Tile shape drawn at each segment position
    pub roles: [TileRole; N],
    /// Positions that are never drawn, lit or dim
    pub suppressed: [bool; N],
    /// Bounding box of the whole field
    pub size: Size,
}

impl<const N: usize, const W: usize> Layout<N, W> {
    /// Top left corner of segment `position` in character `slot`
    pub fn origin(&self, slot: usize, position: usize) -> Point {
        Point::new(self.slots[slot] + self.x[position], self.y[position])
    }
}

const fn by_row(row: [i32; 3]) -> [i32; 9] {
    [
        row[0], row[1], row[2], row[0], row[1], row[2], row[0], row[1], row[2],
    ]
}

/// Time digits, seven segments over four slots
///
/// The top band of a numeral only carries the top bar, so its two vertical cells are
/// suppressed.
pub const SEVEN: Layout<9, 4> = Layout {
    slots: [1, 37, 77, 111],
    x: by_row([0, 4, 29]),
    y: [0, 0, 0, 4, 32, 4, 36, 64, 36],
    roles: [V, H, V, V, H, V, V, H, V],
    suppressed: [true, false, true, false, false, false, false, false, false],
    size: Size::new(144, 68),
};

/// Date and status characters, fourteen segments over five slots
pub const FOURTEEN: Layout<14, 5> = Layout {
    slots: [4, 32, 60, 88, 116],
    x: [3, 0, 4, 11, 13, 21, 3, 13, 0, 4, 11, 13, 21, 3],
    y: [0, 2, 3, 3, 3, 2, 13, 13, 16, 16, 16, 16, 16, 27],
    roles: [T, S, DL, CV, DR, S, MH, MH, S, DR, CV, DL, S, T],
    suppressed: [false; 14],
    size: Size::new(144, 30),
};

/// The two separator dots between hours and minutes, relative to the time field
pub const SEPARATOR: [Rectangle; 2] = [
    Rectangle::new(Point::new(72, 20), Size::new(4, 4)),
    Rectangle::new(Point::new(72, 44), Size::new(4, 4)),
];
