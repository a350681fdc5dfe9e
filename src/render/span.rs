//! Point and span drawers.
//!
//! These are the only routines that write single pixels or straight
//! axis-aligned runs directly. Every other shape falls back to them for its
//! degenerate cases.

use crate::color::Rgba;
use crate::geometry::trunc;
use crate::region::{acquire_bounds, RegionAccess};

/// Draw a single pixel.
pub fn draw_pixel<R: RegionAccess + ?Sized>(target: &mut R, x: f64, y: f64, color: Rgba) {
    pixel(target, trunc(x), trunc(y), color);
}

/// Draw a horizontal line from `x1` to `x2` inclusive.
pub fn draw_hline<R: RegionAccess + ?Sized>(target: &mut R, x1: f64, x2: f64, y: f64, color: Rgba) {
    hline(target, trunc(x1), trunc(x2), trunc(y), color);
}

/// Draw a vertical line from `y1` to `y2` inclusive.
pub fn draw_vline<R: RegionAccess + ?Sized>(target: &mut R, x: f64, y1: f64, y2: f64, color: Rgba) {
    vline(target, trunc(x), trunc(y1), trunc(y2), color);
}

pub(crate) fn pixel<R: RegionAccess + ?Sized>(target: &mut R, x: i64, y: i64, color: Rgba) {
    let Some(mut region) = acquire_bounds(target, x, y, x, y) else {
        return;
    };
    region.fill(color);
    target.release(region);
}

pub(crate) fn hline<R: RegionAccess + ?Sized>(
    target: &mut R,
    x1: i64,
    x2: i64,
    y: i64,
    color: Rgba,
) {
    let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
    let Some(mut region) = acquire_bounds(target, x1, y, x2, y) else {
        return;
    };
    region.fill(color);
    target.release(region);
}

pub(crate) fn vline<R: RegionAccess + ?Sized>(
    target: &mut R,
    x: i64,
    y1: i64,
    y2: i64,
    color: Rgba,
) {
    let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };
    let Some(mut region) = acquire_bounds(target, x, y1, x, y2) else {
        return;
    };
    region.fill(color);
    target.release(region);
}

/// Dispatch for two corner points that collapse to a point or an axis-aligned
/// line. Returns `true` when the shape was fully drawn here.
pub(crate) fn draw_degenerate<R: RegionAccess + ?Sized>(
    target: &mut R,
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
    color: Rgba,
) -> bool {
    match (x1 == x2, y1 == y2) {
        (true, true) => pixel(target, x1, y1, color),
        (true, false) => vline(target, x1, y1, y2, color),
        (false, true) => hline(target, x1, x2, y1, color),
        (false, false) => return false,
    }
    true
}
