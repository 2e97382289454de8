//! # segface
//!
//! A watch face for small monochrome displays, drawn entirely from a handful of segment tiles.
//!
//! ---
//!
//! There is no font engine here. The time is drawn with seven segment numerals and the date and
//! status rows with fourteen segment alphanumerics. Every glyph is assembled from reusable
//! bitmap tiles in a few steps
//!
//! - A [glyph table](glyph) maps a character to the set of lit segments
//! - A [layout](layout) places every segment position of every character slot
//! - The [compositor](compositor) walks a fixed width [field](field) and emits one
//!   [`DrawCommand`] per segment to draw, choosing the lit or the dim ("halftone") tile
//! - The [face](face) owns the tiles, the settings and the blinking separator and turns platform
//!   events into redraws of an `embedded-graphics` draw target
//!
//! Tiles are loaded once through a [`TileLoader`](tile::TileLoader). The [`stock`] tiles are
//! generated at compile time and are what the firmware uses.
//!
//! Enable the `defmt` feature to derive `defmt::Format` on the public types and get log output
//! from the face and settings layer.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod blink;
pub mod compositor;
pub mod config;
pub mod error;
pub mod face;
pub mod field;
pub mod glyph;
pub mod invert;
pub mod layout;
pub mod stock;
pub mod tile;

pub use compositor::{composite14, composite7, DrawCommand};
pub use config::{RenderConfig, SettingKey, Settings, SettingsStore};
pub use error::Error;
pub use face::Face;
pub use field::{DateField, StatusField, TimeField};
pub use tile::{TileId, TileRole, TileSet, Variant};
