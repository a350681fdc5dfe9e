//! Axis-aligned rectangle outline and fill.

use super::span::{draw_degenerate, hline, vline};
use crate::color::Rgba;
use crate::geometry::trunc;
use crate::region::{acquire_bounds, RegionAccess};

/// Draw the outline of the rectangle spanned by two opposite corners.
///
/// The corners may be given in any order. Top and bottom edges are drawn
/// full width; the side edges skip the corner rows.
pub fn draw_rectangle<R: RegionAccess + ?Sized>(
    target: &mut R,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: Rgba,
) {
    rectangle(target, trunc(x1), trunc(y1), trunc(x2), trunc(y2), color);
}

/// Fill the rectangle spanned by two opposite corners, edges included.
pub fn draw_box<R: RegionAccess + ?Sized>(
    target: &mut R,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: Rgba,
) {
    fill_box(target, trunc(x1), trunc(y1), trunc(x2), trunc(y2), color);
}

pub(crate) fn rectangle<R: RegionAccess + ?Sized>(
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
    let (x1, x2) = (x1.min(x2), x1.max(x2));
    let (y1, y2) = (y1.min(y2), y1.max(y2));

    hline(target, x1, x2, y1, color);
    hline(target, x1, x2, y2, color);
    let (top, bottom) = (y1 + 1, y2 - 1);
    if top <= bottom {
        vline(target, x1, top, bottom, color);
        vline(target, x2, top, bottom, color);
    }
}

pub(crate) fn fill_box<R: RegionAccess + ?Sized>(
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
    region.fill(color);
    target.release(region);
}
