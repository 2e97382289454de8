//! # Watch face
//!
//! [`Face`] holds everything a frame depends on and turns platform events into redraws. The
//! platform calls the `on_*` handlers as events arrive and [`Face::render`] whenever the face is
//! [dirty](Face::is_dirty), usually right after a tick.
//!
//! The screen has three rows
//!
//! | row    | origin     | contents                          |
//! |--------|------------|-----------------------------------|
//! | date   | `(0, 8)`   | fourteen segment, optional        |
//! | time   | `(0, 50)`  | seven segment with the separator  |
//! | status | `(0, 130)` | fourteen segment, optional        |
//!
//! The `render_*` functions draw a single row and can be used without a [`Face`].

use embedded_graphics::draw_target::{DrawTarget, DrawTargetExt};
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::image::ImageDrawable;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::PointsIter;
use embedded_graphics::transform::Transform;
use embedded_graphics::Pixel;

use crate::blink::Blink;
use crate::compositor::{self, composite14, composite7};
use crate::config::{parse_message, RenderConfig, SettingKey, Settings, SettingsStore};
use crate::error::Error;
use crate::field::{self, ClockStyle, DateField, StatusField, TimeField, Weekday};
use crate::invert::Inverted;
use crate::layout;
use crate::tile::{TileLoader, TileSet, Tiles};

pub const SCREEN: Size = Size::new(144, 168);

pub const DATE_ORIGIN: Point = Point::new(0, 8);
pub const TIME_ORIGIN: Point = Point::new(0, 50);
pub const STATUS_ORIGIN: Point = Point::new(0, 130);

/// Local time as read from the platform clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    pub hour: u8,
    pub minute: u8,
    /// Day of month, 1-31
    pub day: u8,
    pub weekday: Weekday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryState {
    /// Percent
    pub charge: u8,
    pub charging: bool,
}

/// How often the platform should deliver ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickUnit {
    Second,
    Minute,
}

pub struct Face<T> {
    tiles: T,
    settings: Settings,
    clock: ClockStyle,
    separator: Blink,
    charge: Blink,
    now: Option<WallTime>,
    battery: BatteryState,
    connected: bool,
    dirty: bool,
}

impl<T: TileSet> Face<T> {
    pub fn new(tiles: T, settings: Settings, clock: ClockStyle) -> Self {
        Self {
            tiles,
            settings,
            clock,
            separator: Blink::new(settings.blink),
            charge: Blink::new(false),
            now: None,
            battery: BatteryState::default(),
            connected: false,
            dirty: true,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn render_config(&self) -> RenderConfig {
        self.settings.render_config()
    }

    pub fn set_clock_style(&mut self, clock: ClockStyle) {
        if self.clock != clock {
            self.clock = clock;
            self.dirty = true;
        }
    }

    /// Whether something changed since the last [`render`](Self::render)
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Anything blinking needs a frame every second
    pub fn tick_unit(&self) -> TickUnit {
        if self.separator.is_enabled() || self.charge.is_enabled() {
            TickUnit::Second
        } else {
            TickUnit::Minute
        }
    }

    pub fn on_tick(&mut self, now: WallTime) {
        self.now = Some(now);
        self.dirty = true;
    }

    /// Handle a configuration message, persisting the new value when it changed
    pub fn on_config<S>(&mut self, key: &str, value: &str, store: &mut S) -> Result<(), Error>
    where
        S: SettingsStore + ?Sized,
    {
        let (key, value) = parse_message(key, value).map_err(|e| {
            warn!("ignoring configuration message: {}", e);
            e
        })?;

        self.set(key, value, store);
        Ok(())
    }

    /// Change one setting, persisting it when it changed
    pub fn set<S>(&mut self, key: SettingKey, value: bool, store: &mut S)
    where
        S: SettingsStore + ?Sized,
    {
        if !self.settings.apply(key, value) {
            return;
        }

        info!("{} = {}", key, value);
        store.persist_bool(key, value);

        if key == SettingKey::Blink {
            self.separator.set_enabled(value);
        }

        self.dirty = true;
    }

    /// Flip one setting
    pub fn toggle<S>(&mut self, key: SettingKey, store: &mut S)
    where
        S: SettingsStore + ?Sized,
    {
        let value = !self.settings.get(key);
        self.set(key, value, store);
    }

    pub fn on_battery(&mut self, battery: BatteryState) {
        if battery == self.battery {
            return;
        }

        debug!("battery {}% charging {}", battery.charge, battery.charging);
        self.charge.set_enabled(battery.charging);
        self.battery = battery;
        self.dirty = true;
    }

    /// Returns whether to vibrate, which is when the connection dropped and vibration is on
    pub fn on_bluetooth(&mut self, connected: bool) -> bool {
        let dropped = self.connected && !connected;

        if self.connected != connected {
            info!("bluetooth connected: {}", connected);
            self.connected = connected;
            self.dirty = true;
        }

        dropped && self.settings.vibrate
    }

    /// Draw a whole frame. Does nothing until the first tick.
    pub fn render<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let Some(now) = self.now else {
            return Ok(());
        };
        let config = self.render_config();

        if config.invert {
            self.draw(&mut Inverted::new(target), now, config)?;
        } else {
            self.draw(target, now, config)?;
        }

        self.dirty = false;
        Ok(())
    }

    fn draw<D>(
        &mut self,
        target: &mut D,
        now: WallTime,
        config: RenderConfig,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        target.clear(BinaryColor::Off)?;

        if config.show_top {
            let date = field::format_date(now.weekday, now.day);
            render_date_field(target, &self.tiles, &date, config.halftone)?;
        }

        let time = field::format_time(now.hour, now.minute, self.clock);
        render_time_field(target, &self.tiles, &time, config.halftone)?;
        render_separator(target, self.separator.tick(), config.halftone)?;

        let blank = !self.charge.tick();
        if config.show_bottom {
            let status = field::format_status(self.battery.charge, self.connected, blank);
            render_status_field(target, &self.tiles, &status, config.halftone)?;
        }

        Ok(())
    }
}

impl<T> Face<Tiles<T>>
where
    T: ImageDrawable<Color = BinaryColor>,
{
    /// Load every tile and the persisted settings
    pub fn load<L, S>(loader: &mut L, store: &S, clock: ClockStyle) -> Result<Self, Error>
    where
        L: TileLoader<Tile = T>,
        S: SettingsStore + ?Sized,
    {
        let tiles = Tiles::load(loader)?;
        Ok(Self::new(tiles, Settings::load(store), clock))
    }
}

pub fn render_time_field<D, S>(
    target: &mut D,
    tiles: &S,
    field: &TimeField,
    halftone: bool,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
    S: TileSet,
{
    let commands = composite7(field, tiles, halftone);
    compositor::draw(commands, tiles, &mut target.translated(TIME_ORIGIN))
}

pub fn render_date_field<D, S>(
    target: &mut D,
    tiles: &S,
    field: &DateField,
    halftone: bool,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
    S: TileSet,
{
    let commands = composite14(field, tiles, halftone);
    compositor::draw(commands, tiles, &mut target.translated(DATE_ORIGIN))
}

pub fn render_status_field<D, S>(
    target: &mut D,
    tiles: &S,
    field: &StatusField,
    halftone: bool,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
    S: TileSet,
{
    let commands = composite14(field, tiles, halftone);
    compositor::draw(commands, tiles, &mut target.translated(STATUS_ORIGIN))
}

/// Pixels lit in a dim area, the same checkerboard the dim tiles use
pub fn is_dim_pixel(point: Point) -> bool {
    (point.x + point.y) % 2 == 0
}

/// Draw the separator dots: lit when visible, otherwise dim with halftone or cleared without
pub fn render_separator<D>(target: &mut D, visible: bool, halftone: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    for dot in layout::SEPARATOR {
        let dot = dot.translate(TIME_ORIGIN);

        if visible {
            target.fill_solid(&dot, BinaryColor::On)?;
        } else if halftone {
            target.draw_iter(
                dot.points()
                    .map(|point| Pixel(point, BinaryColor::from(is_dim_pixel(point)))),
            )?;
        } else {
            target.fill_solid(&dot, BinaryColor::Off)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;
    use crate::stock::{StockTile, StockTiles};

    fn face() -> Face<Tiles<StockTile>> {
        Face::load(&mut StockTiles, &MemoryStore::new(), ClockStyle::TwentyFourHour).unwrap()
    }

    #[test]
    fn ticks_every_second_only_while_blinking() {
        let mut store = MemoryStore::new();
        let mut face = face();
        assert_eq!(face.tick_unit(), TickUnit::Second);

        face.set(SettingKey::Blink, false, &mut store);
        assert_eq!(face.tick_unit(), TickUnit::Minute);

        face.on_battery(BatteryState {
            charge: 40,
            charging: true,
        });
        assert_eq!(face.tick_unit(), TickUnit::Second);
    }

    #[test]
    fn config_messages_are_persisted() {
        let mut store = MemoryStore::new();
        let mut face = face();

        face.on_config("invert", "true", &mut store).unwrap();
        assert!(face.settings().invert);
        assert!(store.persisted_bool(SettingKey::Invert, false));

        assert_eq!(
            face.on_config("invert", "yes", &mut store),
            Err(Error::InvalidValue)
        );
        assert_eq!(
            face.on_config("colour", "true", &mut store),
            Err(Error::UnknownSetting)
        );
        assert!(face.settings().invert);
    }

    #[test]
    fn vibrates_only_when_the_connection_drops() {
        let mut store = MemoryStore::new();
        let mut face = face();

        assert!(!face.on_bluetooth(false));
        assert!(!face.on_bluetooth(true));
        assert!(face.on_bluetooth(false));

        face.on_bluetooth(true);
        face.set(SettingKey::Vibrate, false, &mut store);
        assert!(!face.on_bluetooth(false));
    }

    #[test]
    fn toggling_flips_a_setting() {
        let mut store = MemoryStore::new();
        let mut face = face();

        face.toggle(SettingKey::Halftone, &mut store);
        assert!(!face.settings().halftone);
        face.toggle(SettingKey::Halftone, &mut store);
        assert!(face.settings().halftone);
    }
}
