//! In-memory framebuffer for drawing tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Screen-sized monochrome canvas. Pixels outside the screen are ignored.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<BinaryColor>,
}

impl Canvas {
    /// Canvas with every pixel set to `color`.
    pub fn filled(color: BinaryColor) -> Self {
        Self {
            pixels: vec![color; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
        }
    }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> BinaryColor {
        self.pixels[(y as u32 * SCREEN_WIDTH + x as u32) as usize]
    }

    /// Number of pixels of `color` inside `area`.
    pub fn count_in(
        &self,
        area: &Rectangle,
        color: BinaryColor,
    ) -> usize {
        area.points().filter(|p| self.pixel(p.x, p.y) == color).count()
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 && (point.x as u32) < SCREEN_WIDTH && (point.y as u32) < SCREEN_HEIGHT {
                self.pixels[(point.y as u32 * SCREEN_WIDTH + point.x as u32) as usize] = color;
            }
        }
        Ok(())
    }
}
