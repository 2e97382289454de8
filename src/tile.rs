//! # Segment tiles
//!
//! A tile is a small bitmap for one segment shape. Each shape comes in a lit and a dim variant,
//! the dim one is drawn for unlit segments when halftone rendering is on.
//!
//! The face never creates or decodes bitmaps itself. They come from a [`TileLoader`] once at
//! start up and are kept in a [`Tiles`] for as long as the face lives.

use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::image::ImageDrawable;
use embedded_graphics::pixelcolor::BinaryColor;
use heapless::Vec;

use crate::error::Error;

/// The shape a tile is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TileRole {
    /// Seven segment horizontal stroke
    Horizontal,
    /// Seven segment vertical stroke
    Vertical,
    /// Fourteen segment top and bottom bar
    Top,
    /// Fourteen segment outer vertical
    Side,
    /// Fourteen segment `\` stroke
    DiagonalLeft,
    /// Fourteen segment `/` stroke
    DiagonalRight,
    /// Fourteen segment centre vertical
    CenterVertical,
    /// Fourteen segment half of the middle bar
    MiddleHorizontal,
}

impl TileRole {
    pub const ALL: [TileRole; 8] = [
        TileRole::Horizontal,
        TileRole::Vertical,
        TileRole::Top,
        TileRole::Side,
        TileRole::DiagonalLeft,
        TileRole::DiagonalRight,
        TileRole::CenterVertical,
        TileRole::MiddleHorizontal,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    Lit,
    Dim,
}

/// Names a single tile asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TileId {
    pub role: TileRole,
    pub variant: Variant,
}

impl TileId {
    /// Number of distinct tiles
    pub const COUNT: usize = TileRole::ALL.len() * 2;

    pub const fn new(role: TileRole, variant: Variant) -> Self {
        Self { role, variant }
    }

    pub const fn lit(role: TileRole) -> Self {
        Self::new(role, Variant::Lit)
    }

    pub const fn dim(role: TileRole) -> Self {
        Self::new(role, Variant::Dim)
    }

    /// Dense index in `0..COUNT`, in the same order as [`TileId::all`]
    pub const fn index(&self) -> usize {
        self.role as usize * 2 + self.variant as usize
    }

    /// Every tile, lit before dim for each role
    pub fn all() -> impl Iterator<Item = TileId> {
        TileRole::ALL
            .into_iter()
            .flat_map(|role| [TileId::lit(role), TileId::dim(role)])
    }
}

/// Read only access to loaded tiles
pub trait TileSet {
    type Tile: ImageDrawable<Color = BinaryColor>;

    fn tile(&self, id: TileId) -> &Self::Tile;

    /// Intrinsic size of a tile, which is also the size it is drawn at
    fn size(&self, id: TileId) -> Size {
        self.tile(id).size()
    }
}

impl<S: TileSet> TileSet for &S {
    type Tile = S::Tile;

    fn tile(&self, id: TileId) -> &Self::Tile {
        (**self).tile(id)
    }
}

/// Platform hook resolving a tile asset
pub trait TileLoader {
    type Tile: ImageDrawable<Color = BinaryColor>;

    /// Load a tile, `None` if the asset doesn't exist
    fn load_tile(&mut self, id: TileId) -> Option<Self::Tile>;
}

/// Every tile, loaded once
pub struct Tiles<T> {
    tiles: Vec<T, { TileId::COUNT }>,
}

impl<T: ImageDrawable<Color = BinaryColor>> Tiles<T> {
    /// Load all tiles from `loader`, failing on the first one that is missing
    pub fn load<L>(loader: &mut L) -> Result<Self, Error>
    where
        L: TileLoader<Tile = T>,
    {
        let mut tiles = Vec::new();

        for id in TileId::all() {
            let tile = loader.load_tile(id).ok_or(Error::AssetMissing(id))?;
            tiles.push(tile).map_err(|_| Error::AssetMissing(id))?;
        }

        Ok(Self { tiles })
    }
}

impl<T: ImageDrawable<Color = BinaryColor>> TileSet for Tiles<T> {
    type Tile = T;

    fn tile(&self, id: TileId) -> &T {
        &self.tiles[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::image::ImageRaw;

    static PIXEL: [u8; 1] = [0x80];

    struct Partial {
        missing: TileId,
    }

    impl TileLoader for Partial {
        type Tile = ImageRaw<'static, BinaryColor>;

        fn load_tile(&mut self, id: TileId) -> Option<Self::Tile> {
            (id != self.missing).then(|| ImageRaw::new(&PIXEL, 1))
        }
    }

    #[test]
    fn indices_follow_iteration_order() {
        for (i, id) in TileId::all().enumerate() {
            assert_eq!(id.index(), i);
        }
        assert_eq!(TileId::all().count(), TileId::COUNT);
    }

    #[test]
    fn missing_asset_fails_the_load() {
        let missing = TileId::dim(TileRole::Side);
        let result = Tiles::load(&mut Partial { missing });
        assert!(matches!(result, Err(Error::AssetMissing(id)) if id == missing));
    }
}
