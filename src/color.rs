//! Packed YUYV colors.
//!
//! A `Color` is a full framebuffer word, `Y1 Cb Y2 Cr` from most to least
//! significant byte, with both luma samples normally equal. Drawing never
//! converts or inspects colors; a single-pixel write takes whichever half of
//! the word belongs to that pixel.
//!
//! The constants are the console's standard 16-color palette.

use crate::Color;

/// Assembles a color word from its four bytes.
pub const fn pack(y1: u8, cb: u8, y2: u8, cr: u8) -> Color {
    (y1 as u32) << 24 | (cb as u32) << 16 | (y2 as u32) << 8 | cr as u32
}

pub const BLACK: Color = 0x0080_0080;
pub const MAROON: Color = 0x266A_26C0;
pub const GREEN: Color = 0x4B55_4B4A;
pub const OLIVE: Color = 0x7140_718A;
pub const NAVY: Color = 0x0EC0_0E75;
pub const PURPLE: Color = 0x34AA_34B5;
pub const TEAL: Color = 0x5995_5940;
pub const GRAY: Color = 0x8080_8080;
pub const SILVER: Color = 0xC080_C080;
pub const RED: Color = 0x4C54_4CFF;
pub const LIME: Color = 0x952B_9515;
pub const YELLOW: Color = 0xE100_E194;
pub const BLUE: Color = 0x1DFF_1D6B;
pub const FUCHSIA: Color = 0x69D4_69EA;
pub const AQUA: Color = 0xB2AB_B200;
pub const WHITE: Color = 0xFF80_FF80;
