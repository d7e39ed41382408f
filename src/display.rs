/// LCD surface backed by `embedded-graphics`.
///
/// Wraps any `DrawTarget<Color = Rgb565>` (the ST7735S driver on hardware)
/// as a text [`Surface`]. White on black, 5x8 font, opaque glyph cells so a
/// blank overwrites whatever was in its cell.
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::defaults::SCREEN_SIZE;
use crate::screens::Surface;

/// Colors
const BG: Rgb565 = Rgb565::BLACK;
const FG: Rgb565 = Rgb565::WHITE;

pub struct GraphicsSurface<D> {
    display: D,
    style: MonoTextStyle<'static, Rgb565>,
}

impl<D: DrawTarget<Color = Rgb565>> GraphicsSurface<D> {
    pub fn new(display: D) -> Self {
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_5X8)
            .text_color(FG)
            .background_color(BG)
            .build();
        Self { display, style }
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

impl<D: DrawTarget<Color = Rgb565>> Surface for GraphicsSurface<D> {
    fn clear(&mut self) {
        let _ = Rectangle::new(Point::zero(), Size::new(SCREEN_SIZE, SCREEN_SIZE))
            .into_styled(PrimitiveStyle::with_fill(BG))
            .draw(&mut self.display);
    }

    fn text(&mut self, x: i32, y: i32, text: &str) {
        let _ = Text::with_baseline(text, Point::new(x, y), self.style, Baseline::Top)
            .draw(&mut self.display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    const N: usize = SCREEN_SIZE as usize;

    /// In-memory 128x128 framebuffer
    struct Frame {
        px: Vec<Rgb565>,
    }

    impl Frame {
        fn new(fill: Rgb565) -> Self {
            Self { px: vec![fill; N * N] }
        }

        fn at(&self, x: usize, y: usize) -> Rgb565 {
            self.px[y * N + x]
        }

        fn lit_in(&self, x0: usize, y0: usize, w: usize, h: usize) -> usize {
            (y0..y0 + h)
                .flat_map(|y| (x0..x0 + w).map(move |x| (x, y)))
                .filter(|&(x, y)| self.at(x, y) == FG)
                .count()
        }
    }

    impl OriginDimensions for Frame {
        fn size(&self) -> Size {
            Size::new(SCREEN_SIZE, SCREEN_SIZE)
        }
    }

    impl DrawTarget for Frame {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, color) in pixels {
                if (0..N as i32).contains(&p.x) && (0..N as i32).contains(&p.y) {
                    self.px[p.y as usize * N + p.x as usize] = color;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn clear_blanks_every_pixel() {
        let mut surface = GraphicsSurface::new(Frame::new(Rgb565::RED));
        surface.clear();
        let frame = surface.display_mut();
        assert!(frame.px.iter().all(|&c| c == BG));
    }

    #[test]
    fn text_is_drawn_below_its_top_left_corner() {
        let mut surface = GraphicsSurface::new(Frame::new(BG));
        surface.text(105, 56, "*");
        let frame = surface.display_mut();
        assert!(frame.lit_in(105, 56, 5, 8) > 0);
        assert_eq!(frame.lit_in(0, 0, N, 56), 0);
    }

    #[test]
    fn blank_erases_marker() {
        let mut surface = GraphicsSurface::new(Frame::new(BG));
        surface.text(105, 72, "*");
        surface.text(105, 72, " ");
        assert_eq!(surface.display_mut().lit_in(105, 72, 5, 8), 0);
    }
}
