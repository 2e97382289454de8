//! # Sharp memory LCD
//!
//! The watch has a 144x168 reflective memory LCD on SPI1. The panel keeps its image without a
//! refresh, so the frame is drawn into a local buffer and only sent when the face changed.
//!
//! A white pixel is a 1 bit. Lines are addressed from 1, with the address sent least
//! significant bit first, and chip select is active high.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::Pixel;
use embedded_hal::blocking::spi;
use embedded_hal::digital::v2::OutputPin;

use segface::face::SCREEN;

const WIDTH: usize = SCREEN.width as usize;
const HEIGHT: usize = SCREEN.height as usize;
const STRIDE: usize = WIDTH / 8;

const WRITE_LINE: u8 = 0x80;
const VCOM: u8 = 0x40;
const CLEAR: u8 = 0x20;

#[derive(Debug)]
pub enum Error<SpiError, PinError> {
    Spi(SpiError),
    Pin(PinError),
}

pub struct MemoryLcd<SPI, CS> {
    spi: SPI,
    cs: CS,
    buffer: [[u8; STRIDE]; HEIGHT],
    vcom: bool,
}

impl<SPI, CS> MemoryLcd<SPI, CS>
where
    SPI: spi::Write<u8>,
    CS: OutputPin,
{
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self {
            spi,
            cs,
            buffer: [[0; STRIDE]; HEIGHT],
            vcom: false,
        }
    }

    /// Blank the panel memory
    pub fn clear_panel(&mut self) -> Result<(), Error<SPI::Error, CS::Error>> {
        let command = CLEAR | self.toggle_vcom();

        self.cs.set_high().map_err(Error::Pin)?;
        let sent = self.spi.write(&[command, 0]);
        self.cs.set_low().map_err(Error::Pin)?;

        sent.map_err(Error::Spi)
    }

    /// Send the whole buffer to the panel
    pub fn flush(&mut self) -> Result<(), Error<SPI::Error, CS::Error>> {
        let command = WRITE_LINE | self.toggle_vcom();

        self.cs.set_high().map_err(Error::Pin)?;
        let sent = write_frame(&mut self.spi, command, &self.buffer);
        self.cs.set_low().map_err(Error::Pin)?;

        sent.map_err(Error::Spi)
    }

    /// VCOM bit for the next command, alternating every time
    fn toggle_vcom(&mut self) -> u8 {
        self.vcom = !self.vcom;
        if self.vcom {
            VCOM
        } else {
            0
        }
    }
}

fn write_frame<SPI: spi::Write<u8>>(
    spi: &mut SPI,
    command: u8,
    buffer: &[[u8; STRIDE]; HEIGHT],
) -> Result<(), SPI::Error> {
    spi.write(&[command])?;

    for (line, data) in buffer.iter().enumerate() {
        spi.write(&[(line as u8 + 1).reverse_bits()])?;
        spi.write(data)?;
        spi.write(&[0])?;
    }

    spi.write(&[0])
}

impl<SPI, CS> OriginDimensions for MemoryLcd<SPI, CS> {
    fn size(&self) -> Size {
        SCREEN
    }
}

impl<SPI, CS> DrawTarget for MemoryLcd<SPI, CS> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            if x >= WIDTH || y >= HEIGHT {
                continue;
            }

            let byte = &mut self.buffer[y][x / 8];
            let bit = 0x80 >> (x % 8);

            if color.is_on() {
                *byte |= bit;
            } else {
                *byte &= !bit;
            }
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xff } else { 0x00 };
        self.buffer = [[fill; STRIDE]; HEIGHT];
        Ok(())
    }
}
