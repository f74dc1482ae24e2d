//! Coordinate math for drawing at a logical resolution.
//!
//! Applications describe shapes in a design-time coordinate space (the
//! *logical* extent), which frequently differs from the resolution the video
//! hardware actually scans out. Everything here works in `f32` and rounds to
//! whole pixels in exactly one place, `to_pixel`, so that shapes drawn with
//! different primitives in the same frame land on the same rows and columns.

#![cfg_attr(not(test), no_std)]

use core::ops::RangeInclusive;

use num_traits::AsPrimitive;

/// Width and height of a coordinate space, in that space's units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: impl AsPrimitive<f32>, height: impl AsPrimitive<f32>) -> Self {
        Extent {
            width: width.as_(),
            height: height.as_(),
        }
    }

    /// Checks that both dimensions are finite and strictly positive, which is
    /// required of any extent used as the source side of a `Scale`.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.
            && self.height > 0.
    }
}

/// Per-axis factors taking logical coordinates into actual ones.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    pub const IDENTITY: Scale = Scale { x: 1., y: 1. };

    /// Computes the factors mapping `logical` onto `actual`.
    ///
    /// When the two extents are equal the factors are exactly `1.0`, so
    /// drawing in the framebuffer's own dimensions never perturbs whole-number
    /// coordinates.
    pub fn between(logical: Extent, actual: Extent) -> Self {
        Scale {
            x: actual.width / logical.width,
            y: actual.height / logical.height,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Maps a logical X coordinate to a column, or `None` if the result is not
    /// a number we can address.
    pub fn x(&self, x: f32) -> Option<i32> {
        to_pixel(x * self.x)
    }

    /// Maps a logical Y coordinate to a row, or `None` if the result is not a
    /// number we can address.
    pub fn y(&self, y: f32) -> Option<i32> {
        to_pixel(y * self.y)
    }
}

/// Rounds an actual-space coordinate to a pixel index.
///
/// Halfway cases round to even (`0.5 -> 0`, `1.5 -> 2`, `2.5 -> 2`). Results
/// outside the `i32` range saturate. Non-finite input produces `None`.
pub fn to_pixel(v: f32) -> Option<i32> {
    if v.is_finite() {
        // `as` saturates, which is what we want for wildly off-canvas input:
        // clamping happens later and only needs the sign and ordering.
        Some(libm::rintf(v) as i32)
    } else {
        None
    }
}

/// Orders the closed interval `a..=b` and crops it to `0..len`.
///
/// Returns `None` if no part of the interval is inside `0..len`.
pub fn clamp_span(a: i32, b: i32, len: usize) -> Option<RangeInclusive<usize>> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if len == 0 || hi < 0 {
        return None;
    }
    let last = len - 1;
    let lo = lo.max(0) as usize;
    if lo > last {
        return None;
    }
    Some(lo..=(hi as usize).min(last))
}

/// Scales the logical interval `a..=b` by `factor`, rounds both ends with
/// `to_pixel`, and crops the result to `0..len`.
///
/// This is the one path every primitive uses to turn caller geometry into
/// framebuffer indices, for both the long axis of a line and its single
/// row/column (pass the same value as `a` and `b`).
pub fn project_span(
    a: f32,
    b: f32,
    factor: f32,
    len: usize,
) -> Option<RangeInclusive<usize>> {
    clamp_span(to_pixel(a * factor)?, to_pixel(b * factor)?, len)
}

/// Like `project_span` for a single coordinate.
pub fn project_point(v: f32, factor: f32, len: usize) -> Option<usize> {
    project_span(v, v, factor, len).map(|r| *r.start())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_to_even() {
        assert_eq!(to_pixel(0.5), Some(0));
        assert_eq!(to_pixel(1.5), Some(2));
        assert_eq!(to_pixel(2.5), Some(2));
        assert_eq!(to_pixel(-0.5), Some(0));
        assert_eq!(to_pixel(-1.5), Some(-2));
        assert_eq!(to_pixel(2.4999), Some(2));
        assert_eq!(to_pixel(2.5001), Some(3));
    }

    #[test]
    fn non_finite_is_not_a_pixel() {
        assert_eq!(to_pixel(f32::NAN), None);
        assert_eq!(to_pixel(f32::INFINITY), None);
        assert_eq!(to_pixel(f32::NEG_INFINITY), None);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(to_pixel(1e20), Some(i32::MAX));
        assert_eq!(to_pixel(-1e20), Some(i32::MIN));
    }

    #[test]
    fn same_extent_is_identity() {
        let e = Extent::new(640, 480);
        let s = Scale::between(e, e);
        assert!(s.is_identity());
        for v in -700..700 {
            assert_eq!(s.x(v as f32), Some(v));
            assert_eq!(s.y(v as f32), Some(v));
        }
    }

    #[test]
    fn halving_extent() {
        let s = Scale::between(Extent::new(640, 480), Extent::new(320, 240));
        assert_eq!(s.x(320.), Some(160));
        assert_eq!(s.y(480.), Some(240));
        // 3 * 0.5 = 1.5 rounds up to even, 5 * 0.5 = 2.5 rounds down.
        assert_eq!(s.x(3.), Some(2));
        assert_eq!(s.x(5.), Some(2));
    }

    #[test]
    fn zero_logical_extent_yields_nothing() {
        let s = Scale::between(Extent::new(0, 0), Extent::new(640, 480));
        assert_eq!(s.x(0.), None);
        assert_eq!(project_span(0., 10., s.x, 640), None);
        assert!(!Extent::new(0, 480).is_valid());
        assert!(Extent::new(640, 480).is_valid());
    }

    #[test]
    fn clamp_orders_ends() {
        assert_eq!(clamp_span(3, 7, 10), Some(3..=7));
        assert_eq!(clamp_span(7, 3, 10), Some(3..=7));
        assert_eq!(clamp_span(4, 4, 10), Some(4..=4));
    }

    #[test]
    fn clamp_crops_to_bounds() {
        assert_eq!(clamp_span(-50, 690, 640), Some(0..=639));
        assert_eq!(clamp_span(-5, 0, 640), Some(0..=0));
        assert_eq!(clamp_span(639, 1000, 640), Some(639..=639));
        assert_eq!(clamp_span(i32::MIN, i32::MAX, 8), Some(0..=7));
    }

    #[test]
    fn clamp_rejects_outside() {
        assert_eq!(clamp_span(-10, -1, 640), None);
        assert_eq!(clamp_span(640, 700, 640), None);
        assert_eq!(clamp_span(0, 0, 0), None);
    }

    #[test]
    fn project_point_bounds() {
        assert_eq!(project_point(239.4, 1., 240), Some(239));
        assert_eq!(project_point(239.6, 1., 240), None);
        assert_eq!(project_point(-0.4, 1., 240), Some(0));
        assert_eq!(project_point(-0.6, 1., 240), None);
    }
}
