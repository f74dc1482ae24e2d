//! Drawing primitives.
//!
//! Every primitive takes coordinates on a *logical canvas* of the caller's
//! choosing and scales them into the framebuffer's actual resolution before
//! drawing. Pass `xfb.extent()` as the canvas to draw in native pixels.
//!
//! Coordinates may be integers or floats. After scaling they are rounded to the
//! nearest pixel, halves to even, and the same rule is used by every primitive,
//! so edges drawn by `dot` and `draw_box` at the same coordinates coincide.
//!
//! Nothing here fails. Geometry that falls partly off the framebuffer is
//! cropped; geometry that misses it entirely, or that can't be scaled because
//! the canvas is degenerate, draws nothing.

use gfx::PixelFormat;
use math::{project_point, project_span, Extent};
use num_traits::AsPrimitive;
use tracing::trace;

use crate::xfb::Xfb;
use crate::Color;

/// Draws a one-pixel-tall line from `x1` to `x2` inclusive, on row `y`.
///
/// The ends may be given in either order.
pub fn horizontal_line<F: PixelFormat>(
    xfb: &mut Xfb<'_, F>,
    canvas: Extent,
    x1: impl AsPrimitive<f32>,
    x2: impl AsPrimitive<f32>,
    y: impl AsPrimitive<f32>,
    color: Color,
) {
    let (x1, x2, y) = (x1.as_(), x2.as_(), y.as_());
    let scale = xfb.scale_from(canvas);
    let s = xfb.surface_mut();
    let xs = project_span(x1, x2, scale.x, s.width());
    let row = project_point(y, scale.y, s.height());
    match (xs, row) {
        (Some(xs), Some(row)) => s.fill_span(xs, row, color),
        _ => trace!(x1, x2, y, "horizontal line off-canvas"),
    }
}

/// Draws a one-pixel-wide line from `y1` to `y2` inclusive, in column `x`.
///
/// The ends may be given in either order.
pub fn vertical_line<F: PixelFormat>(
    xfb: &mut Xfb<'_, F>,
    canvas: Extent,
    x: impl AsPrimitive<f32>,
    y1: impl AsPrimitive<f32>,
    y2: impl AsPrimitive<f32>,
    color: Color,
) {
    let (x, y1, y2) = (x.as_(), y1.as_(), y2.as_());
    let scale = xfb.scale_from(canvas);
    let s = xfb.surface_mut();
    let col = project_point(x, scale.x, s.width());
    let ys = project_span(y1, y2, scale.y, s.height());
    match (col, ys) {
        (Some(col), Some(ys)) => s.fill_column(col, ys, color),
        _ => trace!(x, y1, y2, "vertical line off-canvas"),
    }
}

/// Draws the outline of the rectangle with corners `(x1, y1)` and `(x2, y2)`.
///
/// This is exactly two `horizontal_line`s and two `vertical_line`s, so each
/// edge is cropped on its own and the corners are drawn twice.
pub fn draw_box<F: PixelFormat>(
    xfb: &mut Xfb<'_, F>,
    canvas: Extent,
    x1: impl AsPrimitive<f32>,
    y1: impl AsPrimitive<f32>,
    x2: impl AsPrimitive<f32>,
    y2: impl AsPrimitive<f32>,
    color: Color,
) {
    horizontal_line(xfb, canvas, x1, x2, y1, color);
    horizontal_line(xfb, canvas, x1, x2, y2, color);
    vertical_line(xfb, canvas, x1, y1, y2, color);
    vertical_line(xfb, canvas, x2, y1, y2, color);
}

/// Fills the rectangle with corners `(x1, y1)` and `(x2, y2)`, edges included.
///
/// The corners may be given in any order. With both corners equal this sets a
/// single pixel.
pub fn dot<F: PixelFormat>(
    xfb: &mut Xfb<'_, F>,
    canvas: Extent,
    x1: impl AsPrimitive<f32>,
    y1: impl AsPrimitive<f32>,
    x2: impl AsPrimitive<f32>,
    y2: impl AsPrimitive<f32>,
    color: Color,
) {
    let (x1, y1, x2, y2) = (x1.as_(), y1.as_(), x2.as_(), y2.as_());
    let scale = xfb.scale_from(canvas);
    let s = xfb.surface_mut();
    let xs = project_span(x1, x2, scale.x, s.width());
    let ys = project_span(y1, y2, scale.y, s.height());
    match (xs, ys) {
        (Some(xs), Some(ys)) => s.fill_rect(xs, ys, color),
        _ => trace!(x1, y1, x2, y2, "dot off-canvas"),
    }
}
