//! Render mode descriptors.
//!
//! A `RenderMode` tells us how big the external framebuffer is and how its rows
//! are laid out. It mirrors the descriptor the console's video library hands to
//! the video interface; the drawing code only cares about `fb_width`,
//! `xfb_height` and the row padding rule, but the rest travels along so that a
//! mode can be passed around as one value.

use gfx::{PixelFormat, Yuyv};
use math::Extent;
use smart_default::SmartDefault;

/// Video standard the mode is timed for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, SmartDefault)]
pub enum TvMode {
    #[default]
    Ntsc,
    Pal,
    Mpal,
    Eurgb60,
}

/// How the video interface scans the frame out.
#[derive(Copy, Clone, Debug, Eq, PartialEq, SmartDefault)]
pub enum Scan {
    #[default]
    Interlaced,
    /// Each XFB line is shown in both fields, halving vertical resolution.
    DoubleStrike,
    Progressive,
}

/// Whether the XFB holds one field or a whole frame.
///
/// This changes how the video interface reads the buffer, not how rows are
/// laid out in memory, so it does not affect drawing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, SmartDefault)]
pub enum XfbMode {
    SingleField,
    #[default]
    DoubleField,
}

/// Describes the actual output resolution and XFB layout.
///
/// The default is NTSC 480i, the same as `NTSC_480I`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct RenderMode {
    pub tv_mode: TvMode,
    pub scan: Scan,
    /// Width of the framebuffers in pixels.
    #[default(640)]
    pub fb_width: u16,
    /// Height of the embedded (GPU) framebuffer in lines.
    #[default(480)]
    pub efb_height: u16,
    /// Height of the external framebuffer in lines. This is the height we
    /// draw into.
    #[default(480)]
    pub xfb_height: u16,
    #[default(40)]
    pub vi_x_origin: u16,
    #[default(0)]
    pub vi_y_origin: u16,
    #[default(640)]
    pub vi_width: u16,
    #[default(480)]
    pub vi_height: u16,
    pub xfb_mode: XfbMode,
    pub field_rendering: bool,
    pub aa: bool,
}

/// XFB rows are padded out to a multiple of this many pixels.
pub const ROW_ALIGN_PX: usize = 16;

impl RenderMode {
    /// Actual width in pixels.
    pub fn width(&self) -> usize {
        usize::from(self.fb_width)
    }

    /// Actual height in rows.
    pub fn height(&self) -> usize {
        usize::from(self.xfb_height)
    }

    /// The actual extent, suitable for use as a logical canvas when drawing at
    /// native resolution.
    pub fn extent(&self) -> Extent {
        Extent::new(self.fb_width, self.xfb_height)
    }

    /// Row width in pixels, including padding.
    pub fn padded_width(&self) -> usize {
        (self.width() + ROW_ALIGN_PX - 1) & !(ROW_ALIGN_PX - 1)
    }

    /// Words per row when pixels are packed as `F`.
    pub fn stride_words<F: PixelFormat>(&self) -> usize {
        self.padded_width() / F::PIXELS_PER_WORD
    }

    /// Number of `u32` words a framebuffer for this mode needs when pixels are
    /// packed as `F`.
    pub fn xfb_words<F: PixelFormat>(&self) -> usize {
        self.stride_words::<F>() * self.height()
    }

    /// Size in bytes of a YUYV framebuffer for this mode.
    pub fn xfb_size_bytes(&self) -> usize {
        self.xfb_words::<Yuyv>() * core::mem::size_of::<u32>()
    }
}

/// NTSC, 640x480 interlaced.
pub const NTSC_480I: RenderMode = RenderMode {
    tv_mode: TvMode::Ntsc,
    scan: Scan::Interlaced,
    fb_width: 640,
    efb_height: 480,
    xfb_height: 480,
    vi_x_origin: 40,
    vi_y_origin: 0,
    vi_width: 640,
    vi_height: 480,
    xfb_mode: XfbMode::DoubleField,
    field_rendering: false,
    aa: false,
};

/// NTSC, 640x240 double-strike.
pub const NTSC_240DS: RenderMode = RenderMode {
    scan: Scan::DoubleStrike,
    efb_height: 240,
    xfb_height: 240,
    xfb_mode: XfbMode::SingleField,
    ..NTSC_480I
};

/// NTSC, 640x480 progressive.
pub const NTSC_480P: RenderMode = RenderMode {
    scan: Scan::Progressive,
    xfb_mode: XfbMode::SingleField,
    ..NTSC_480I
};

/// PAL, 640x528 interlaced.
pub const PAL_528I: RenderMode = RenderMode {
    tv_mode: TvMode::Pal,
    efb_height: 528,
    xfb_height: 528,
    vi_y_origin: 23,
    vi_height: 528,
    ..NTSC_480I
};

/// PAL, 480 EFB lines scaled up to a 576-line XFB, interlaced.
pub const PAL_576I: RenderMode = RenderMode {
    tv_mode: TvMode::Pal,
    xfb_height: 576,
    vi_height: 576,
    ..NTSC_480I
};

/// PAL60 (EURGB60), 640x480 interlaced.
pub const EURGB60_480I: RenderMode = RenderMode {
    tv_mode: TvMode::Eurgb60,
    ..NTSC_480I
};
