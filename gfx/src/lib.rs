//! Packed-pixel framebuffer algorithms.
//!
//! This module is deliberately architecture-independent to allow for testing on
//! the host.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod format;

use core::marker::PhantomData;
use core::ops::RangeInclusive;

pub use format::{Direct, PixelFormat, Yuyv};

#[derive(Debug)]
pub(crate) enum Direction {
    Horizontal,
    Vertical,
}

/// Sets `len` consecutive pixels to `color`, starting at lane `lane` of word
/// `out`. Horizontal runs advance lane by lane through consecutive words;
/// vertical runs stay in `lane` and advance by `stride` words per pixel.
///
/// Words entirely covered by a horizontal run are stored whole, rather than
/// merged lane by lane.
///
/// For a friendlier interface to this algorithm, see `Surface`.
///
/// # Safety
///
/// `len` must be at least 1. For a horizontal run, every word from `out` up to
/// the one containing the last pixel must be in the bounds of the mutable
/// buffer we're writing into; for a vertical run, `out` and `len - 1` further
/// words spaced `stride` apart must be. `lane` must be less than
/// `F::PIXELS_PER_WORD`.
pub(crate) unsafe fn fill_run_unchecked<F: PixelFormat>(
    mut out: *mut u32,
    mut lane: usize,
    len: usize,
    d: Direction,
    stride: usize,
    color: u32,
) {
    match d {
        Direction::Horizontal => {
            let mut remaining = len;
            loop {
                let covered = (F::PIXELS_PER_WORD - lane).min(remaining);
                if covered == F::PIXELS_PER_WORD {
                    *out = F::fill_word(color);
                } else {
                    for l in lane..lane + covered {
                        *out = F::merge(*out, l, color);
                    }
                }
                remaining -= covered;
                if remaining == 0 {
                    break;
                }
                lane = 0;
                out = out.add(1);
            }
        }
        Direction::Vertical => {
            *out = F::merge(*out, lane, color);
            // Only step when another pixel follows, so we never form a
            // pointer past the end of the buffer.
            for _ in 1..len {
                out = out.add(stride);
                *out = F::merge(*out, lane, color);
            }
        }
    }
}

/// A rectangular grid of pixels stored row-major in `u32` words, `stride` words
/// per row, packed according to `F`.
///
/// Rows may be padded: `stride * F::PIXELS_PER_WORD` can exceed `width`. The
/// padding is never written.
///
/// All coordinates are in pixels and all ranges are inclusive. Writers check
/// their bounds once up front and then run unchecked.
pub struct Surface<'a, F> {
    words: &'a mut [u32],
    width: usize,
    height: usize,
    stride: usize,
    _format: PhantomData<F>,
}

impl<'a, F: PixelFormat> Surface<'a, F> {
    /// Wraps `words` as a `width` x `height` surface with rows of `stride`
    /// words.
    ///
    /// # Panics
    ///
    /// If a row of `stride` words can't hold `width` pixels, or if `words` is
    /// shorter than `stride * height`.
    pub fn new(
        words: &'a mut [u32],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Self {
        assert!(
            stride
                .checked_mul(F::PIXELS_PER_WORD)
                .map_or(false, |px| width <= px),
            "stride of {} words too narrow for {} pixels",
            stride,
            width,
        );
        // Force overflow checking.
        let needed = stride.checked_mul(height).unwrap();
        assert!(
            needed <= words.len(),
            "{}x{} surface needs {} words, buffer has {}",
            width,
            height,
            needed,
            words.len(),
        );
        Surface {
            words,
            width,
            height,
            stride,
            _format: PhantomData,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Words per row, including padding.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The backing words, padding included.
    pub fn words(&self) -> &[u32] {
        &*self.words
    }

    /// Word index and lane of pixel `(x, y)`. Does not check bounds.
    fn locate(&self, x: usize, y: usize) -> (usize, usize) {
        (
            y * self.stride + x / F::PIXELS_PER_WORD,
            x % F::PIXELS_PER_WORD,
        )
    }

    fn check(&self, x: usize, y: usize) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} surface",
            x,
            y,
            self.width,
            self.height,
        );
    }

    /// Reads back pixel `(x, y)`: the bits of its word that belong to it, in
    /// place.
    ///
    /// # Panics
    ///
    /// If the pixel is outside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.check(x, y);
        let (index, lane) = self.locate(x, y);
        F::extract(self.words[index], lane)
    }

    /// Sets pixel `(x, y)` to `color`, leaving any pixels sharing its word
    /// alone.
    ///
    /// # Panics
    ///
    /// If the pixel is outside the surface.
    pub fn write_pixel(&mut self, x: usize, y: usize, color: u32) {
        self.check(x, y);
        let (index, lane) = self.locate(x, y);
        let word = &mut self.words[index];
        *word = F::merge(*word, lane, color);
    }

    /// Sets pixels `xs` of row `y` to `color`. An empty range does nothing.
    ///
    /// # Panics
    ///
    /// If any pixel of the span is outside the surface.
    pub fn fill_span(&mut self, xs: RangeInclusive<usize>, y: usize, color: u32) {
        if xs.is_empty() {
            return;
        }
        let (x0, x1) = (*xs.start(), *xs.end());
        self.check(x1, y);
        // Safety: the span's last pixel is in bounds, and rows never wrap, so
        // every word between its first and last pixel is too.
        unsafe { self.fill_row_unchecked(x0, x1, y, color) }
    }

    /// Sets pixels `ys` of column `x` to `color`. An empty range does nothing.
    ///
    /// # Panics
    ///
    /// If any pixel of the column is outside the surface.
    pub fn fill_column(&mut self, x: usize, ys: RangeInclusive<usize>, color: u32) {
        if ys.is_empty() {
            return;
        }
        let (y0, y1) = (*ys.start(), *ys.end());
        self.check(x, y1);
        let (index, lane) = self.locate(x, y0);
        // Safety: the bottom pixel is in bounds, so are all the ones above it
        // down to `y0`.
        unsafe {
            fill_run_unchecked::<F>(
                self.words.as_mut_ptr().add(index),
                lane,
                y1 - y0 + 1,
                Direction::Vertical,
                self.stride,
                color,
            )
        }
    }

    /// Sets every pixel in the closed rectangle `xs` x `ys` to `color`. Empty
    /// ranges do nothing.
    ///
    /// # Panics
    ///
    /// If any pixel of the rectangle is outside the surface.
    pub fn fill_rect(
        &mut self,
        xs: RangeInclusive<usize>,
        ys: RangeInclusive<usize>,
        color: u32,
    ) {
        if xs.is_empty() || ys.is_empty() {
            return;
        }
        let (x0, x1) = (*xs.start(), *xs.end());
        self.check(x1, *ys.end());
        for y in ys {
            // Safety: the bottom-right corner is in bounds.
            unsafe { self.fill_row_unchecked(x0, x1, y, color) }
        }
    }

    /// Sets every visible pixel to `color`. Row padding is left alone.
    pub fn fill(&mut self, color: u32) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        self.fill_rect(0..=self.width - 1, 0..=self.height - 1, color)
    }

    /// # Safety
    ///
    /// `x0 <= x1 < width` and `y < height`.
    unsafe fn fill_row_unchecked(&mut self, x0: usize, x1: usize, y: usize, color: u32) {
        let (index, lane) = self.locate(x0, y);
        fill_run_unchecked::<F>(
            self.words.as_mut_ptr().add(index),
            lane,
            x1 - x0 + 1,
            Direction::Horizontal,
            self.stride,
            color,
        )
    }
}
