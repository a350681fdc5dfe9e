//! Ellipse and circle outline and fill.
//!
//! Both routines walk one quarter of the ellipse with a fixed-point
//! parameter (6 fractional bits) driven by the larger radius, then mirror
//! every step into the other three quadrants. The outline plots points;
//! the fill writes horizontal spans between mirrored points.

use super::span::{hline, vline};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::trunc;
use crate::region::{acquire_bounds, Region, RegionAccess};

/// Sentinel for "nothing drawn yet" in the per-step dedup trackers.
const UNSET: i64 = 0xffff;

/// One step of the quarter walk.
///
/// `h` and `i` run along the driving (larger) radius, `j` and `k` are the
/// same positions scaled onto the other radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    h: i64,
    i: i64,
    j: i64,
    k: i64,
}

/// Fixed-point quarter-ellipse walk for radii `major >= minor > 0`.
struct QuarterWalk {
    ix: i64,
    iy: i64,
    major: i64,
    minor: i64,
    done: bool,
}

impl QuarterWalk {
    fn new(major: i64, minor: i64) -> Self {
        Self {
            ix: 0,
            iy: major * 64,
            major,
            minor,
            done: false,
        }
    }

    /// `v * minor / major`, truncated.
    fn scale(&self, v: i64) -> i64 {
        (i128::from(v) * i128::from(self.minor) / i128::from(self.major)) as i64
    }
}

impl Iterator for QuarterWalk {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }
        let h = (self.ix + 32) >> 6;
        let i = (self.iy + 32) >> 6;
        let step = Step {
            h,
            i,
            j: self.scale(h),
            k: self.scale(i),
        };

        // Truncating division keeps both accumulators on the same lattice
        // as `ix + iy / major` and `iy - ix / major` truncated toward zero.
        // Products are taken in i128; the quotients fit back into i64.
        let major = i128::from(self.major);
        self.ix = ((i128::from(self.ix) * major + i128::from(self.iy)) / major) as i64;
        self.iy = ((i128::from(self.iy) * major - i128::from(self.ix)) / major) as i64;
        self.done = i <= h;
        Some(step)
    }
}

/// Draw an ellipse outline centered at `(x, y)` with radii `rx`, `ry`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if either radius is negative after
/// truncation.
pub fn draw_ellipse<R: RegionAccess + ?Sized>(
    target: &mut R,
    x: f64,
    y: f64,
    rx: f64,
    ry: f64,
    color: Rgba,
) -> Result<()> {
    let (x, y, rx, ry) = (trunc(x), trunc(y), trunc(rx), trunc(ry));
    check_radii(rx, ry)?;
    if draw_flat(target, x, y, rx, ry, color) {
        return Ok(());
    }
    let Some(mut region) = acquire_bounds(target, x - rx, y - ry, x + rx, y + ry) else {
        return Ok(());
    };

    if rx > ry {
        let (mut oj, mut ok) = (UNSET, UNSET);
        for Step { h, i, j, k } in QuarterWalk::new(rx, ry) {
            if (ok != k && oj != k) || (oj != j && ok != j) || k != j {
                mirror_points(&mut region, x, y, h, k, color);
                ok = k;
                mirror_points(&mut region, x, y, i, j, color);
                oj = j;
            }
        }
    } else {
        let (mut oh, mut oi) = (UNSET, UNSET);
        for Step { h, i, j, k } in QuarterWalk::new(ry, rx) {
            if (oi != i && oh != i) || (oh != h && oi != h && i != h) {
                mirror_points(&mut region, x, y, j, i, color);
                oi = i;
                mirror_points(&mut region, x, y, k, h, color);
                oh = h;
            }
        }
    }

    target.release(region);
    Ok(())
}

/// Draw a circle outline. Same as [`draw_ellipse`] with equal radii.
pub fn draw_circle<R: RegionAccess + ?Sized>(
    target: &mut R,
    x: f64,
    y: f64,
    radius: f64,
    color: Rgba,
) -> Result<()> {
    draw_ellipse(target, x, y, radius, radius, color)
}

/// Fill an ellipse centered at `(x, y)` with radii `rx`, `ry`.
///
/// Each scanline inside the boundary is written by exactly one span.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if either radius is negative after
/// truncation.
pub fn draw_filled_ellipse<R: RegionAccess + ?Sized>(
    target: &mut R,
    x: f64,
    y: f64,
    rx: f64,
    ry: f64,
    color: Rgba,
) -> Result<()> {
    let (x, y, rx, ry) = (trunc(x), trunc(y), trunc(rx), trunc(ry));
    check_radii(rx, ry)?;
    if draw_flat(target, x, y, rx, ry, color) {
        return Ok(());
    }
    let Some(mut region) = acquire_bounds(target, x - rx, y - ry, x + rx, y + ry) else {
        return Ok(());
    };

    if rx > ry {
        let (mut oj, mut ok) = (UNSET, UNSET);
        for Step { h, i, j, k } in QuarterWalk::new(rx, ry) {
            if ok != k && oj != k {
                mirror_spans(&mut region, x, y, h, k, color);
                ok = k;
            }
            if oj != j && ok != j && k != j {
                mirror_spans(&mut region, x, y, i, j, color);
                oj = j;
            }
        }
    } else {
        let (mut oh, mut oi) = (UNSET, UNSET);
        for Step { h, i, j, k } in QuarterWalk::new(ry, rx) {
            if oi != i && oh != i {
                mirror_spans(&mut region, x, y, j, i, color);
                oi = i;
            }
            if oh != h && oi != h && i != h {
                mirror_spans(&mut region, x, y, k, h, color);
                oh = h;
            }
        }
    }

    target.release(region);
    Ok(())
}

/// Fill a circle. Same as [`draw_filled_ellipse`] with equal radii.
pub fn draw_filled_circle<R: RegionAccess + ?Sized>(
    target: &mut R,
    x: f64,
    y: f64,
    radius: f64,
    color: Rgba,
) -> Result<()> {
    draw_filled_ellipse(target, x, y, radius, radius, color)
}

fn check_radii(rx: i64, ry: i64) -> Result<()> {
    if rx < 0 {
        return Err(Error::negative_radius("rx", rx));
    }
    if ry < 0 {
        return Err(Error::negative_radius("ry", ry));
    }
    Ok(())
}

/// Zero radius collapses the ellipse onto one axis.
fn draw_flat<R: RegionAccess + ?Sized>(
    target: &mut R,
    x: i64,
    y: i64,
    rx: i64,
    ry: i64,
    color: Rgba,
) -> bool {
    if rx == 0 {
        vline(target, x, y - ry, y + ry, color);
        true
    } else if ry == 0 {
        hline(target, x - rx, x + rx, y, color);
        true
    } else {
        false
    }
}

/// Plot `(x ± dx, y ± dy)`; on the horizontal axis only the two points.
fn mirror_points(region: &mut Region, x: i64, y: i64, dx: i64, dy: i64, color: Rgba) {
    if dy > 0 {
        region.plot(x - dx, y + dy, color);
        region.plot(x + dx, y + dy, color);
        region.plot(x - dx, y - dy, color);
        region.plot(x + dx, y - dy, color);
    } else {
        region.plot(x - dx, y, color);
        region.plot(x + dx, y, color);
    }
}

/// Span `x - dx ..= x + dx` on rows `y ± dy` (just `y` when `dy` is 0).
fn mirror_spans(region: &mut Region, x: i64, y: i64, dx: i64, dy: i64, color: Rgba) {
    if dy > 0 {
        region.span(x - dx, x + dx, y + dy, color);
        region.span(x - dx, x + dx, y - dy, color);
    } else {
        region.span(x - dx, x + dx, y, color);
    }
}
