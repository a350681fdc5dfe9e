//! Circular arc tracer.
//!
//! The circle is split into eight 45° octants, numbered clockwise from the
//! positive x axis (y grows downward):
//!
//! ```text
//!   \ 5 | 6 /
//!    \  |  /
//!   4 \ | / 7
//!      \|/
//! ------+------ +x
//!      /|\
//!   3 / | \ 0
//!    /  |  \
//!   / 2 | 1 \
//! ```
//!
//! A bitmask records which octants are currently being drawn. The start and
//! end octants flip their bit once, at the step whose `cx` equals a stop
//! value projected from the angle, so an arc whose ends share an octant can
//! draw, stop, and resume within it.
//!
//! Endpoints are not always plotted exactly at the requested angle.
//!
//! # References
//!
//! - Andreas Schiffler, *SDL_gfx* `arcRGBA` (octant-mask arc rasterizer).

use std::f64::consts::PI;

use super::span::pixel;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::trunc;
use crate::region::{acquire_bounds, Region, RegionAccess};

/// Draw a circular arc from `start` to `end` degrees, clockwise from the
/// positive x axis.
///
/// Angles are reduced into `[0, 360)`; `start > end` sweeps through 0°.
/// A zero radius draws the center pixel.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the radius is negative after
/// truncation.
pub fn draw_arc<R: RegionAccess + ?Sized>(
    target: &mut R,
    x: f64,
    y: f64,
    radius: f64,
    start: f64,
    end: f64,
    color: Rgba,
) -> Result<()> {
    let rad = trunc(radius);
    if rad < 0 {
        return Err(Error::negative_radius("radius", rad));
    }
    arc(target, trunc(x), trunc(y), rad, start, end, color);
    Ok(())
}

/// Which octants to draw, and where the boundary octants toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OctantPlan {
    mask: u8,
    start_octant: u32,
    end_octant: u32,
    stop_start: i64,
    stop_end: i64,
}

impl OctantPlan {
    fn new(rad: i64, start: f64, end: f64) -> Self {
        let start = normalize_degrees(start);
        let end = normalize_degrees(end);
        let start_octant = (start / 45.0).trunc() as u32;
        let end_octant = (end / 45.0).trunc() as u32;

        let mut plan = Self {
            mask: 0,
            start_octant,
            end_octant,
            stop_start: 0,
            stop_end: 0,
        };

        let mut oct = (start_octant + 7) % 8;
        loop {
            oct = (oct + 1) % 8;
            let bit = 1u8 << oct;

            if oct == start_octant {
                plan.stop_start = stop_value(oct, start, rad);
                if oct % 2 == 1 {
                    plan.mask |= bit;
                } else {
                    plan.mask &= !bit;
                }
            }
            if oct == end_octant {
                plan.stop_end = stop_value(oct, end, rad);
                if start_octant == end_octant {
                    if start > end {
                        // Same octant going the long way: everything is on
                        // and the shared octant toggles off then back on.
                        plan.mask = 0xff;
                    } else {
                        plan.mask &= !bit;
                    }
                } else if oct % 2 == 1 {
                    plan.mask &= !bit;
                } else {
                    plan.mask |= bit;
                }
                break;
            }
            if oct != start_octant {
                plan.mask |= bit;
            }
        }
        plan
    }

    fn toggle(&mut self, octant: u32) {
        self.mask ^= 1 << octant;
    }

    #[inline]
    fn draws(&self, bits: u8) -> bool {
        self.mask & bits != 0
    }
}

/// Reduce an angle into `[0, 360)` keeping the legacy remainder steps.
fn normalize_degrees(angle: f64) -> f64 {
    let mut angle = angle % 360.0;
    while angle < 0.0 {
        angle += 360.0;
    }
    angle % 360.0
}

/// `cx` at which the tracer crosses `angle` inside `octant`.
fn stop_value(octant: u32, angle: f64, rad: i64) -> i64 {
    let theta = (angle * PI) / 180.0;
    let temp = match octant {
        0 | 3 => theta.sin(),
        1 | 6 => theta.cos(),
        2 | 5 => -theta.cos(),
        _ => -theta.sin(),
    };
    trunc(temp * rad as f64)
}

/// Arc with a radius already known to be non-negative.
pub(crate) fn arc<R: RegionAccess + ?Sized>(
    target: &mut R,
    x: i64,
    y: i64,
    rad: i64,
    start: f64,
    end: f64,
    color: Rgba,
) {
    if rad == 0 {
        pixel(target, x, y, color);
        return;
    }
    let Some(mut region) = acquire_bounds(target, x - rad, y - rad, x + rad, y + rad) else {
        return;
    };

    let mut plan = OctantPlan::new(rad, start, end);

    let mut cx = 0;
    let mut cy = rad;
    let mut df = 1 - rad;
    let mut d_e = 3;
    let mut d_se = -2 * rad + 5;
    loop {
        let (ypcy, ymcy) = (y + cy, y - cy);
        if cx > 0 {
            let (xpcx, xmcx) = (x + cx, x - cx);
            plot_if(&mut region, &plan, 0b0000_0100, xmcx, ypcy, color);
            plot_if(&mut region, &plan, 0b0000_0010, xpcx, ypcy, color);
            plot_if(&mut region, &plan, 0b0010_0000, xmcx, ymcy, color);
            plot_if(&mut region, &plan, 0b0100_0000, xpcx, ymcy, color);
        } else {
            plot_if(&mut region, &plan, 0b0110_0000, x, ymcy, color);
            plot_if(&mut region, &plan, 0b0000_0110, x, ypcy, color);
        }

        let (xpcy, xmcy) = (x + cy, x - cy);
        if cx > 0 && cx != cy {
            let (ypcx, ymcx) = (y + cx, y - cx);
            plot_if(&mut region, &plan, 0b0000_1000, xmcy, ypcx, color);
            plot_if(&mut region, &plan, 0b0000_0001, xpcy, ypcx, color);
            plot_if(&mut region, &plan, 0b0001_0000, xmcy, ymcx, color);
            plot_if(&mut region, &plan, 0b1000_0000, xpcy, ymcx, color);
        } else if cx == 0 {
            plot_if(&mut region, &plan, 0b0001_1000, xmcy, y, color);
            plot_if(&mut region, &plan, 0b1000_0001, xpcy, y, color);
        }

        if plan.stop_start == cx {
            plan.toggle(plan.start_octant);
        }
        if plan.stop_end == cx {
            plan.toggle(plan.end_octant);
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

    target.release(region);
}

#[inline]
fn plot_if(region: &mut Region, plan: &OctantPlan, bits: u8, px: i64, py: i64, color: Rgba) {
    if plan.draws(bits) {
        region.plot(px, py, color);
    }
}
