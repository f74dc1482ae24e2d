//! Vector drawing straight into the console's external framebuffer (XFB).
//!
//! The XFB is the memory the video interface scans out: rows of YUV 4:2:2
//! words, two pixels per word, padded to a multiple of 16 pixels. This crate
//! draws horizontal and vertical lines, rectangle outlines and filled
//! rectangles into it, taking coordinates on a logical canvas that may differ
//! from the resolution of the current `RenderMode`.
//!
//! ```ignore
//! let mode = xfbdraw::mode::NTSC_480I;
//! let mut xfb = unsafe { Xfb::from_raw(xfb_ptr, &mode) };
//! let canvas = Extent::new(320, 240);
//! draw::dot(&mut xfb, canvas, 10, 10, 20, 20, color::RED);
//! ```
//!
//! Allocating the framebuffer, deciding when it is safe to draw into it, and
//! presenting it are left to the video subsystem.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod color;
pub mod draw;
pub mod mode;
pub mod xfb;

cfg_if::cfg_if! {
    if #[cfg(feature = "embedded-graphics")] {
        mod eg;
        pub use eg::XfbColor;
    }
}

pub use draw::{dot, draw_box, horizontal_line, vertical_line};
pub use gfx::{Direct, PixelFormat, Surface, Yuyv};
pub use math::Extent;
pub use mode::RenderMode;
pub use xfb::Xfb;

/// A packed framebuffer word. See the `color` module for the layout.
pub type Color = u32;
