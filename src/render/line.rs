//! Integer Bresenham line rasterizer.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.

use super::span::draw_degenerate;
use crate::color::Rgba;
use crate::geometry::trunc;
use crate::region::{acquire_bounds, RegionAccess};

/// Draw the closed segment from `(x1, y1)` to `(x2, y2)`, both endpoints
/// included.
///
/// When the running error is exactly zero the minor-axis step is taken only
/// while moving in the positive direction along the major axis.
pub fn draw_line<R: RegionAccess + ?Sized>(
    target: &mut R,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: Rgba,
) {
    line(target, trunc(x1), trunc(y1), trunc(x2), trunc(y2), color);
}

pub(crate) fn line<R: RegionAccess + ?Sized>(
    target: &mut R,
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
    color: Rgba,
) {
    if draw_degenerate(target, x1, y1, x2, y2, color) {
        return;
    }

    let Some(mut region) = acquire_bounds(target, x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2))
    else {
        return;
    };

    let dx = x2 - x1;
    let dy = y2 - y1;
    let sx = if dx >= 0 { 1 } else { -1 };
    let sy = if dy >= 0 { 1 } else { -1 };
    let ax = dx.abs() << 1;
    let ay = dy.abs() << 1;
    let mut x = x1;
    let mut y = y1;

    if ax > ay {
        let mut d = ay - (ax >> 1);
        while x != x2 {
            region.plot(x, y, color);
            if d > 0 || (d == 0 && sx == 1) {
                y += sy;
                d -= ax;
            }
            x += sx;
            d += ay;
        }
    } else {
        let mut d = ax - (ay >> 1);
        while y != y2 {
            region.plot(x, y, color);
            if d > 0 || (d == 0 && sy == 1) {
                x += sx;
                d -= ay;
            }
            y += sy;
            d += ax;
        }
    }
    region.plot(x, y, color);

    target.release(region);
}
