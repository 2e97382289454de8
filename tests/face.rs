use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::Pixel;

use segface::config::{MemoryStore, SettingKey};
use segface::face::{
    self, BatteryState, Face, WallTime, DATE_ORIGIN, SCREEN, STATUS_ORIGIN, TIME_ORIGIN,
};
use segface::field::{self, ClockStyle, Weekday};
use segface::stock::{StockTile, StockTiles};
use segface::tile::Tiles;

/// A 144x168 framebuffer that counts pixel writes
struct Canvas {
    pixels: Vec<bool>,
    writes: usize,
}

impl Canvas {
    fn new() -> Self {
        Self {
            pixels: vec![false; (SCREEN.width * SCREEN.height) as usize],
            writes: 0,
        }
    }

    fn get(&self, point: Point) -> bool {
        self.pixels[point.y as usize * SCREEN.width as usize + point.x as usize]
    }

    /// Lit pixels in the rows `top..bottom` and columns `left..right`
    fn lit(&self, left: i32, top: i32, right: i32, bottom: i32) -> usize {
        (top..bottom)
            .flat_map(|y| (left..right).map(move |x| Point::new(x, y)))
            .filter(|&point| self.get(point))
            .count()
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        SCREEN
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let inside = (0..SCREEN.width as i32).contains(&point.x)
                && (0..SCREEN.height as i32).contains(&point.y);

            if inside {
                let index = point.y as usize * SCREEN.width as usize + point.x as usize;
                self.pixels[index] = color.is_on();
                self.writes += 1;
            }
        }

        Ok(())
    }
}

const MONDAY_MORNING: WallTime = WallTime {
    hour: 9,
    minute: 5,
    day: 19,
    weekday: Weekday::Monday,
};

/// A separator pixel that is unlit in the dim checkerboard
const SEPARATOR_ODD: Point = Point::new(73, 70);

fn stock_face(store: &MemoryStore) -> Face<Tiles<StockTile>> {
    Face::load(&mut StockTiles, store, ClockStyle::TwentyFourHour).unwrap()
}

fn frame(face: &mut Face<Tiles<StockTile>>) -> Canvas {
    let mut canvas = Canvas::new();
    face.on_tick(MONDAY_MORNING);
    face.render(&mut canvas).unwrap();
    canvas
}

#[test]
fn nothing_is_drawn_before_the_first_tick() {
    let mut face = stock_face(&MemoryStore::new());
    let mut canvas = Canvas::new();

    face.render(&mut canvas).unwrap();

    assert_eq!(canvas.writes, 0);
    assert!(face.is_dirty());
}

#[test]
fn a_frame_draws_every_row() {
    let mut face = stock_face(&MemoryStore::new());
    let canvas = frame(&mut face);

    assert!(!face.is_dirty());
    assert!(canvas.lit(0, DATE_ORIGIN.y, 144, DATE_ORIGIN.y + 30) > 0);
    assert!(canvas.lit(0, TIME_ORIGIN.y, 144, TIME_ORIGIN.y + 68) > 0);
    assert!(canvas.lit(0, STATUS_ORIGIN.y, 144, STATUS_ORIGIN.y + 30) > 0);
    assert_eq!(canvas.lit(0, 0, 144, DATE_ORIGIN.y), 0);
}

#[test]
fn separator_blinks_starting_visible() {
    let mut face = stock_face(&MemoryStore::new());

    let frames: Vec<bool> = (0..4).map(|_| frame(&mut face).get(SEPARATOR_ODD)).collect();

    assert_eq!(frames, [true, false, true, false]);
}

#[test]
fn separator_stays_lit_without_blink() {
    let mut store = MemoryStore::new();
    let mut face = stock_face(&store);
    face.set(SettingKey::Blink, false, &mut store);

    assert!((0..4).all(|_| frame(&mut face).get(SEPARATOR_ODD)));
}

#[test]
fn invert_swaps_background_and_segments() {
    let mut store = MemoryStore::new();
    let mut face = stock_face(&store);

    let normal = frame(&mut face);
    face.on_config("invert", "true", &mut store).unwrap();
    face.on_config("blink", "false", &mut store).unwrap();
    let inverted = frame(&mut face);

    assert!(!normal.get(Point::zero()));
    assert!(inverted.get(Point::zero()));
    assert!(normal.get(SEPARATOR_ODD));
    assert!(!inverted.get(SEPARATOR_ODD));
}

#[test]
fn hidden_rows_stay_blank() {
    let mut store = MemoryStore::new();
    let mut face = stock_face(&store);
    face.set(SettingKey::ShowTop, false, &mut store);
    face.set(SettingKey::ShowBottom, false, &mut store);

    let canvas = frame(&mut face);

    assert_eq!(canvas.lit(0, 0, 144, TIME_ORIGIN.y), 0);
    assert_eq!(canvas.lit(0, STATUS_ORIGIN.y, 144, 168), 0);
    assert!(canvas.lit(0, TIME_ORIGIN.y, 144, TIME_ORIGIN.y + 68) > 0);
}

#[test]
fn charge_digits_blink_while_charging() {
    let mut store = MemoryStore::new();
    let mut face = stock_face(&store);
    face.set(SettingKey::Halftone, false, &mut store);
    face.on_battery(BatteryState {
        charge: 88,
        charging: true,
    });

    let digits = |canvas: &Canvas| canvas.lit(0, STATUS_ORIGIN.y, 60, STATUS_ORIGIN.y + 30);
    let first = frame(&mut face);
    let second = frame(&mut face);

    assert!(digits(&first) > 0);
    assert_eq!(digits(&second), 0);

    face.on_battery(BatteryState {
        charge: 88,
        charging: false,
    });
    assert!(digits(&frame(&mut face)) > 0);
}

#[test]
fn settings_survive_a_restart() {
    let mut store = MemoryStore::new();
    let mut first = stock_face(&store);
    first.on_config("halftone", "false", &mut store).unwrap();
    first.on_config("showTop", "false", &mut store).unwrap();

    let second = stock_face(&store);

    assert!(!second.settings().halftone);
    assert!(!second.settings().show_top);
    assert!(second.settings().blink);
}

#[test]
fn twelve_hour_clock_leaves_the_first_slot_empty() {
    let tiles = Tiles::load(&mut StockTiles).unwrap();
    let mut canvas = Canvas::new();

    let time = field::format_time(21, 5, ClockStyle::TwelveHour);
    face::render_time_field(&mut canvas, &tiles, &time, false).unwrap();

    assert_eq!(time.as_str(), " 905");
    assert_eq!(canvas.lit(0, TIME_ORIGIN.y, 36, TIME_ORIGIN.y + 68), 0);
    assert!(canvas.lit(36, TIME_ORIGIN.y, 144, TIME_ORIGIN.y + 68) > 0);
}

#[test]
fn halftone_draws_unlit_segments_dimly() {
    let tiles = Tiles::load(&mut StockTiles).unwrap();
    let blank = field::format_date(Weekday::Sunday, 1);

    let mut dim = Canvas::new();
    let mut plain = Canvas::new();
    face::render_date_field(&mut dim, &tiles, &blank, true).unwrap();
    face::render_date_field(&mut plain, &tiles, &blank, false).unwrap();

    // Slot 2 is the space between weekday and day
    let space = |canvas: &Canvas| canvas.lit(60, DATE_ORIGIN.y, 84, DATE_ORIGIN.y + 30);
    assert_eq!(space(&plain), 0);
    assert!(space(&dim) > 0);
}
