//! Framebuffer handle.

use gfx::{PixelFormat, Surface, Yuyv};
use math::{Extent, Scale};
use tracing::debug;

use crate::mode::RenderMode;
use crate::Color;

/// An external framebuffer together with the render mode describing it.
///
/// This borrows the buffer for as long as it exists, so nothing else can touch
/// the framebuffer while we draw into it. When, relative to scan-out, it is
/// safe to draw is up to whoever owns the buffer.
pub struct Xfb<'a, F: PixelFormat = Yuyv> {
    surface: Surface<'a, F>,
    mode: &'a RenderMode,
}

impl<'a> Xfb<'a, Yuyv> {
    /// Attaches to a YUYV framebuffer.
    ///
    /// # Panics
    ///
    /// If `words` is shorter than `mode.xfb_words::<Yuyv>()`.
    pub fn new(words: &'a mut [u32], mode: &'a RenderMode) -> Self {
        Self::with_format(words, mode)
    }

    /// Attaches to the YUYV framebuffer at `ptr`, as returned by the video
    /// subsystem's framebuffer allocator.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `mode.xfb_words::<Yuyv>()`
    /// words, suitably aligned, and not accessed through any other path for
    /// the lifetime `'a`.
    pub unsafe fn from_raw(ptr: *mut u32, mode: &'a RenderMode) -> Self {
        let words = core::slice::from_raw_parts_mut(ptr, mode.xfb_words::<Yuyv>());
        Self::new(words, mode)
    }
}

impl<'a, F: PixelFormat> Xfb<'a, F> {
    /// Attaches to a framebuffer whose pixels are packed as `F`.
    ///
    /// # Panics
    ///
    /// If `words` is shorter than `mode.xfb_words::<F>()`.
    pub fn with_format(words: &'a mut [u32], mode: &'a RenderMode) -> Self {
        let stride = mode.stride_words::<F>();
        debug!(
            width = mode.width(),
            height = mode.height(),
            stride,
            len = words.len(),
            "attaching framebuffer"
        );
        Xfb {
            surface: Surface::new(words, mode.width(), mode.height(), stride),
            mode,
        }
    }

    pub fn mode(&self) -> &RenderMode {
        self.mode
    }

    /// Actual extent of the framebuffer in pixels.
    pub fn extent(&self) -> Extent {
        self.mode.extent()
    }

    /// Factors taking coordinates on `canvas` into this framebuffer.
    pub fn scale_from(&self, canvas: Extent) -> Scale {
        debug_assert!(canvas.is_valid(), "bad logical canvas: {:?}", canvas);
        Scale::between(canvas, self.extent())
    }

    pub fn surface(&self) -> &Surface<'a, F> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface<'a, F> {
        &mut self.surface
    }

    /// Fills the whole visible frame with `color`.
    pub fn clear(&mut self, color: Color) {
        debug!(color, "clearing framebuffer");
        self.surface.fill(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{NTSC_240DS, NTSC_480I};
    use gfx::Direct;

    #[test]
    fn attaches_to_exact_buffer() {
        let mut words = vec![0; NTSC_480I.xfb_words::<Yuyv>()];
        let xfb = Xfb::new(&mut words, &NTSC_480I);
        assert_eq!(xfb.surface().width(), 640);
        assert_eq!(xfb.surface().height(), 480);
        assert_eq!(xfb.surface().stride(), 320);
    }

    #[test]
    #[should_panic]
    fn rejects_short_buffer() {
        let mut words = vec![0; NTSC_480I.xfb_words::<Yuyv>() - 1];
        Xfb::new(&mut words, &NTSC_480I);
    }

    #[test]
    fn from_raw_covers_mode() {
        let mut words = vec![0; NTSC_240DS.xfb_words::<Yuyv>()];
        let mut xfb = unsafe { Xfb::from_raw(words.as_mut_ptr(), &NTSC_240DS) };
        xfb.clear(0xFF80_FF80);
        assert!(xfb.surface().words().iter().all(|&w| w == 0xFF80_FF80));
    }

    #[test]
    fn clear_leaves_padding() {
        let mode = RenderMode {
            fb_width: 600,
            xfb_height: 2,
            ..NTSC_480I
        };
        let mut words = vec![0; mode.xfb_words::<Yuyv>()];
        Xfb::new(&mut words, &mode).clear(0x1234_5678);
        for row in words.chunks(mode.stride_words::<Yuyv>()) {
            assert!(row[..300].iter().all(|&w| w == 0x1234_5678));
            assert!(row[300..].iter().all(|&w| w == 0));
        }
    }

    #[test]
    fn direct_format_layout() {
        let mut words = vec![0; NTSC_240DS.xfb_words::<Direct>()];
        let xfb = Xfb::<Direct>::with_format(&mut words, &NTSC_240DS);
        assert_eq!(xfb.surface().stride(), 640);
    }

    #[test]
    fn native_canvas_is_identity() {
        let mut words = vec![0; NTSC_480I.xfb_words::<Yuyv>()];
        let xfb = Xfb::new(&mut words, &NTSC_480I);
        assert!(xfb.scale_from(xfb.extent()).is_identity());
    }
}
