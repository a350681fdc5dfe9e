//! Rounded rectangle outline and fill.

use super::arc::arc;
use super::rect::{fill_box, rectangle};
use super::span::{draw_degenerate, hline, vline};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::trunc;
use crate::region::RegionAccess;

/// Normalized rounded-rectangle geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rounded {
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
    rad: i64,
}

impl Rounded {
    /// Order the corners and clamp the radius to half the shorter side.
    fn new(x1: i64, y1: i64, x2: i64, y2: i64, rad: i64) -> Self {
        let (x1, x2) = (x1.min(x2), x1.max(x2));
        let (y1, y2) = (y1.min(y2), y1.max(y2));
        let w = x2 - x1 + 1;
        let h = y2 - y1 + 1;

        let mut clamped = rad;
        if clamped * 2 > w {
            clamped = w / 2;
        }
        if clamped * 2 > h {
            clamped = h / 2;
        }
        if clamped != rad {
            log::debug!("corner radius {rad} clamped to {clamped} for {w}x{h} rectangle");
        }

        Self {
            x1,
            y1,
            x2,
            y2,
            rad: clamped,
        }
    }
}

/// Draw the outline of a rectangle with circular corners of radius `radius`.
///
/// Radii of 0 or 1 draw a plain [`super::draw_rectangle`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the radius is negative after
/// truncation.
pub fn draw_rounded_rectangle<R: RegionAccess + ?Sized>(
    target: &mut R,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    radius: f64,
    color: Rgba,
) -> Result<()> {
    let (x1, y1, x2, y2, rad) = (trunc(x1), trunc(y1), trunc(x2), trunc(y2), trunc(radius));
    if rad < 0 {
        return Err(Error::negative_radius("radius", rad));
    }
    if rad <= 1 {
        rectangle(target, x1, y1, x2, y2, color);
        return Ok(());
    }
    if draw_degenerate(target, x1, y1, x2, y2, color) {
        return Ok(());
    }

    let Rounded { x1, y1, x2, y2, rad } = Rounded::new(x1, y1, x2, y2, rad);
    let (xx1, xx2) = (x1 + rad, x2 - rad);
    let (yy1, yy2) = (y1 + rad, y2 - rad);

    arc(target, xx1, yy1, rad, 180.0, 270.0, color);
    arc(target, xx2, yy1, rad, 270.0, 360.0, color);
    arc(target, xx1, yy2, rad, 90.0, 180.0, color);
    arc(target, xx2, yy2, rad, 0.0, 90.0, color);

    if xx1 <= xx2 {
        hline(target, xx1, xx2, y1, color);
        hline(target, xx1, xx2, y2, color);
    }
    if yy1 <= yy2 {
        vline(target, x1, yy1, yy2, color);
        vline(target, x2, yy1, yy2, color);
    }
    Ok(())
}

/// Fill a rectangle with circular corners of radius `radius`.
///
/// Radii of 0 or 1 fill a plain [`super::draw_box`]; an outline here would
/// leave the interior empty.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the radius is negative after
/// truncation.
pub fn draw_rounded_box<R: RegionAccess + ?Sized>(
    target: &mut R,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    radius: f64,
    color: Rgba,
) -> Result<()> {
    let (x1, y1, x2, y2, rad) = (trunc(x1), trunc(y1), trunc(x2), trunc(y2), trunc(radius));
    if rad < 0 {
        return Err(Error::negative_radius("radius", rad));
    }
    if rad <= 1 {
        fill_box(target, x1, y1, x2, y2, color);
        return Ok(());
    }
    if draw_degenerate(target, x1, y1, x2, y2, color) {
        return Ok(());
    }

    let Rounded { x1, y1, x2, y2, rad } = Rounded::new(x1, y1, x2, y2, rad);
    let (x, y) = (x1 + rad, y1 + rad);
    let dx = x2 - x1 - rad - rad;
    let dy = y2 - y1 - rad - rad;

    // Midpoint circle split between the top and bottom corner pairs; each
    // span reaches across the straight middle section.
    let mut cx = 0;
    let mut cy = rad;
    let mut ocx = 0xffff;
    let mut ocy = 0xffff;
    let mut df = 1 - rad;
    let mut d_e = 3;
    let mut d_se = -2 * rad + 5;
    loop {
        let (xpcx, xmcx) = (x + cx, x - cx);
        let (xpcy, xmcy) = (x + cy, x - cy);
        if ocy != cy {
            if cy > 0 {
                hline(target, xmcx, xpcx + dx, y + cy + dy, color);
                hline(target, xmcx, xpcx + dx, y - cy, color);
            } else {
                hline(target, xmcx, xpcx + dx, y, color);
            }
            ocy = cy;
        }
        if ocx != cx {
            if cx != cy {
                if cx > 0 {
                    hline(target, xmcy, xpcy + dx, y - cx, color);
                    hline(target, xmcy, xpcy + dx, y + cx + dy, color);
                } else {
                    hline(target, xmcy, xpcy + dx, y, color);
                }
            }
            ocx = cx;
        }

        if df < 0 {
            df += d_e;
            d_e += 2;
            d_se += 2;
        } else {
            df += d_se;
            d_e += 2;
            d_se += 4;
            cy -= 1;
        }
        cx += 1;
        if cx > cy {
            break;
        }
    }

    if dx > 0 && dy > 0 {
        fill_box(target, x1, y1 + rad + 1, x2, y2 - rad, color);
    }
    Ok(())
}
