//! In-memory draw target for render tests.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use fleet_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Screen-sized framebuffer that records every pixel write.
pub struct TestDisplay {
    pixels: Vec<Rgb565>,
}

impl TestDisplay {
    pub fn new(fill: Rgb565) -> Self {
        Self {
            pixels: vec![fill; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
        }
    }

    fn index(
        x: i32,
        y: i32,
    ) -> Option<usize> {
        let in_bounds = (0..SCREEN_WIDTH as i32).contains(&x) && (0..SCREEN_HEIGHT as i32).contains(&y);
        in_bounds.then(|| (y as u32 * SCREEN_WIDTH + x as u32) as usize)
    }

    /// Color at `(x, y)`. Panics outside the screen.
    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Rgb565 {
        let idx = Self::index(x, y).expect("pixel outside the screen");
        self.pixels[idx]
    }

    /// All points currently holding `color`.
    pub fn points_with(
        &self,
        color: Rgb565,
    ) -> Vec<Point> {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == color)
            .map(|(i, _)| Point::new((i as u32 % SCREEN_WIDTH) as i32, (i as u32 / SCREEN_WIDTH) as i32))
            .collect()
    }

    /// Number of pixels holding `color` inside `area`.
    pub fn count_in(
        &self,
        area: &embedded_graphics::primitives::Rectangle,
        color: Rgb565,
    ) -> usize {
        area.points()
            .filter_map(|p| Self::index(p.x, p.y))
            .filter(|&i| self.pixels[i] == color)
            .count()
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for TestDisplay {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(idx) = Self::index(point.x, point.y) {
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}
