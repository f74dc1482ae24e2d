//! Pixel packing.
//!
//! Framebuffers are stored as `u32` words, but a word does not necessarily hold
//! a single pixel. The console's external framebuffer, for instance, stores two
//! horizontally adjacent pixels per word in YUV 4:2:2 (`Y1 Cb Y2 Cr`), so
//! setting one pixel means replacing half of a word and leaving the other half
//! alone.
//!
//! A `PixelFormat` describes how pixels are arranged within a word. Each pixel
//! position in the word is called a *lane*, numbered from the leftmost pixel.

/// Describes how pixels pack into storage words.
///
/// Implementations only need to provide the lane masks. The masks for lanes
/// `0..PIXELS_PER_WORD` must be disjoint and together cover all 32 bits;
/// `fill_word` relies on this.
pub trait PixelFormat {
    /// Number of pixels sharing each storage word.
    const PIXELS_PER_WORD: usize;

    /// Bits of a storage word belonging to the pixel in `lane`.
    fn lane_mask(lane: usize) -> u32;

    /// Replaces the bits of `lane` in `word` with the corresponding bits of
    /// `color`, leaving the other lanes untouched.
    #[inline]
    fn merge(word: u32, lane: usize, color: u32) -> u32 {
        let mask = Self::lane_mask(lane);
        (word & !mask) | (color & mask)
    }

    /// Isolates the bits of `lane` in `word`.
    #[inline]
    fn extract(word: u32, lane: usize) -> u32 {
        word & Self::lane_mask(lane)
    }

    /// Produces the word that results from setting every lane to `color`.
    #[inline]
    fn fill_word(color: u32) -> u32 {
        (0..Self::PIXELS_PER_WORD).fold(0, |w, lane| Self::merge(w, lane, color))
    }
}

/// Two pixels per word in YUV 4:2:2 order, as scanned out by the console's
/// video interface.
///
/// Lane 0 owns the high half (`Y1 Cb`), lane 1 the low half (`Y2 Cr`). The two
/// pixels nominally share chroma; writing one lane replaces only its own
/// chroma sample, which is the usual compromise for single-pixel writes into
/// this format.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Yuyv;

impl PixelFormat for Yuyv {
    const PIXELS_PER_WORD: usize = 2;

    #[inline]
    fn lane_mask(lane: usize) -> u32 {
        if lane == 0 {
            0xFFFF_0000
        } else {
            0x0000_FFFF
        }
    }
}

/// One pixel per word. Useful for unpacked host-side buffers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Direct;

impl PixelFormat for Direct {
    const PIXELS_PER_WORD: usize = 1;

    #[inline]
    fn lane_mask(_: usize) -> u32 {
        !0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yuyv_merge_keeps_neighbor() {
        let word = 0x1122_3344;
        assert_eq!(Yuyv::merge(word, 0, 0xAABB_CCDD), 0xAABB_3344);
        assert_eq!(Yuyv::merge(word, 1, 0xAABB_CCDD), 0x1122_CCDD);
    }

    #[test]
    fn yuyv_extract() {
        assert_eq!(Yuyv::extract(0x1122_3344, 0), 0x1122_0000);
        assert_eq!(Yuyv::extract(0x1122_3344, 1), 0x0000_3344);
    }

    #[test]
    fn fill_word_is_whole_color() {
        assert_eq!(Yuyv::fill_word(0xFF80_FF80), 0xFF80_FF80);
        assert_eq!(Direct::fill_word(0x1234_5678), 0x1234_5678);
    }

    #[test]
    fn direct_merge_replaces_word() {
        assert_eq!(Direct::merge(0xFFFF_FFFF, 0, 0x0102_0304), 0x0102_0304);
    }

    #[test]
    fn yuyv_masks_partition_word() {
        let (a, b) = (Yuyv::lane_mask(0), Yuyv::lane_mask(1));
        assert_eq!(a & b, 0);
        assert_eq!(a | b, !0);
    }
}
