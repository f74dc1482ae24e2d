//! embedded-graphics support.
//!
//! Lets `Xfb` act as a `DrawTarget`, so the embedded-graphics shapes, fonts and
//! image decoders can render straight into the framebuffer. Unlike the
//! primitives in `draw`, embedded-graphics works in actual pixels; there is no
//! logical canvas here.

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{Dimensions, OriginDimensions, Point, Size};
use embedded_graphics_core::pixelcolor::raw::RawU32;
use embedded_graphics_core::pixelcolor::PixelColor;
use embedded_graphics_core::primitives::Rectangle;
use embedded_graphics_core::Pixel;
use gfx::PixelFormat;

use crate::xfb::Xfb;
use crate::Color;

/// A packed framebuffer word, as a color embedded-graphics can carry around.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct XfbColor(pub Color);

impl PixelColor for XfbColor {
    type Raw = RawU32;
}

impl From<Color> for XfbColor {
    fn from(c: Color) -> Self {
        XfbColor(c)
    }
}

impl<F: PixelFormat> OriginDimensions for Xfb<'_, F> {
    fn size(&self) -> Size {
        Size::new(self.surface().width() as u32, self.surface().height() as u32)
    }
}

impl<F: PixelFormat> DrawTarget for Xfb<'_, F> {
    type Color = XfbColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let s = self.surface_mut();
        let (w, h) = (s.width(), s.height());
        for Pixel(Point { x, y }, XfbColor(c)) in pixels {
            if x < 0 || y < 0 || x as usize >= w || y as usize >= h {
                continue;
            }
            s.write_pixel(x as usize, y as usize, c);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if let Some(br) = area.bottom_right() {
            let tl = area.top_left;
            self.surface_mut().fill_rect(
                tl.x as usize..=br.x as usize,
                tl.y as usize..=br.y as usize,
                color.0,
            );
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        Xfb::<F>::clear(self, color.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::WHITE;
    use crate::mode::NTSC_240DS;
    use gfx::Yuyv;

    #[test]
    fn draw_iter_skips_offscreen() {
        let mut words = vec![0; NTSC_240DS.xfb_words::<Yuyv>()];
        let mut xfb = Xfb::new(&mut words, &NTSC_240DS);
        let c = XfbColor(WHITE);
        xfb.draw_iter([
            Pixel(Point::new(-1, 0), c),
            Pixel(Point::new(640, 0), c),
            Pixel(Point::new(0, 240), c),
            Pixel(Point::new(1, 1), c),
        ])
        .unwrap();
        assert_eq!(xfb.surface().pixel(1, 1), WHITE & 0xFFFF);
        assert_eq!(xfb.surface().words().iter().filter(|&&w| w != 0).count(), 1);
    }

    #[test]
    fn fill_solid_is_cropped() {
        let mut words = vec![0; NTSC_240DS.xfb_words::<Yuyv>()];
        let mut xfb = Xfb::new(&mut words, &NTSC_240DS);
        let area = Rectangle::new(Point::new(636, -4), Size::new(10, 8));
        xfb.fill_solid(&area, XfbColor(WHITE)).unwrap();
        for y in 0..240 {
            for x in 0..640 {
                let expect = if x >= 636 && y < 4 {
                    Yuyv::extract(WHITE, x % 2)
                } else {
                    0
                };
                assert_eq!(xfb.surface().pixel(x, y), expect, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn fill_solid_entirely_offscreen() {
        let mut words = vec![0; NTSC_240DS.xfb_words::<Yuyv>()];
        let mut xfb = Xfb::new(&mut words, &NTSC_240DS);
        let area = Rectangle::new(Point::new(-20, -20), Size::new(10, 10));
        xfb.fill_solid(&area, XfbColor(WHITE)).unwrap();
        assert!(xfb.surface().words().iter().all(|&w| w == 0));
    }

    #[test]
    fn bounding_box_is_actual_extent() {
        let mut words = vec![0; NTSC_240DS.xfb_words::<Yuyv>()];
        let xfb = Xfb::new(&mut words, &NTSC_240DS);
        assert_eq!(xfb.bounding_box().size, Size::new(640, 240));
    }
}
