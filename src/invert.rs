//! Colour inverting draw target adapter

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Dimensions;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Pixel;

/// Draws every pixel with the opposite colour
pub struct Inverted<'a, D> {
    target: &'a mut D,
}

impl<'a, D> Inverted<'a, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

impl<D> Dimensions for Inverted<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn bounding_box(&self) -> Rectangle {
        self.target.bounding_box()
    }
}

impl<D> DrawTarget for Inverted<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Color = BinaryColor;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.target.draw_iter(
            pixels
                .into_iter()
                .map(|Pixel(point, color): Pixel<BinaryColor>| Pixel(point, color.invert())),
        )
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.target.fill_solid(area, color.invert())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.target.clear(color.invert())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::prelude::*;

    #[test]
    fn colours_are_swapped() {
        let mut display = MockDisplay::<BinaryColor>::new();

        Inverted::new(&mut display)
            .draw_iter([
                Pixel(Point::new(0, 0), BinaryColor::On),
                Pixel(Point::new(1, 0), BinaryColor::Off),
            ])
            .unwrap();

        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(1, 0)), Some(BinaryColor::On));
    }

    #[test]
    fn fills_are_swapped() {
        let mut display = MockDisplay::<BinaryColor>::new();
        let area = Rectangle::new(Point::new(2, 2), Size::new(2, 2));

        Inverted::new(&mut display)
            .fill_solid(&area, BinaryColor::Off)
            .unwrap();

        assert_eq!(display.get_pixel(Point::new(3, 3)), Some(BinaryColor::On));
    }
}
