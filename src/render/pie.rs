//! Circular sectors built as polygon fans.

use std::f64::consts::TAU;

use super::line::line;
use super::polygon::{fill, outline};
use super::span::pixel;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{trunc, Point};
use crate::region::RegionAccess;

/// A sector needs the center and at least two rim points.
const MIN_VERTICES: usize = 3;

/// Vertex list for a sector.
#[derive(Debug, Clone, PartialEq)]
enum Fan {
    /// The start angle lies past the end even after the 2π correction;
    /// only the radius at the start angle is drawn.
    Radial { center: Point, rim: Point },
    /// Center followed by rim points from the start to the end angle. Equal
    /// angles leave just the center and one rim point.
    Sector(Vec<Point>),
}

impl Fan {
    /// Build the fan for a circle of radius `rad > 0` centered at `(x, y)`.
    ///
    /// Angles are in degrees and reduced modulo 360 with the sign kept. Rim
    /// points are spaced about three pixels apart.
    fn new(x: i64, y: i64, rad: i64, start: f64, end: f64) -> Self {
        let (cx, cy, r) = (x as f64, y as f64, rad as f64);
        let delta = 3.0 / r;
        let start_angle = (start % 360.0) * (TAU / 360.0);
        let mut end_angle = (end % 360.0) * (TAU / 360.0);
        if start_angle > end_angle {
            end_angle += TAU;
        }

        let center = Point::new(cx, cy);
        let rim_at = |angle: f64| Point::new(cx + r * angle.cos(), cy + r * angle.sin());
        let rim = rim_at(start_angle);
        if start_angle > end_angle {
            return Self::Radial { center, rim };
        }

        let mut vertices = vec![center, rim];
        let mut angle = start_angle;
        while angle < end_angle {
            angle = (angle + delta).min(end_angle);
            vertices.push(rim_at(angle));
        }
        Self::Sector(vertices)
    }
}

/// Draw the outline of a circular sector: both radii and the arc between.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the radius is negative after
/// truncation, or if a non-zero radius sweeps an empty angle (the sector
/// would have only two vertices).
pub fn draw_pie<R: RegionAccess + ?Sized>(
    target: &mut R,
    x: f64,
    y: f64,
    radius: f64,
    start: f64,
    end: f64,
    color: Rgba,
) -> Result<()> {
    pie(target, x, y, radius, start, end, color, false)
}

/// Fill a circular sector from `start` to `end` degrees.
///
/// # Errors
///
/// Same as [`draw_pie`].
pub fn draw_filled_pie<R: RegionAccess + ?Sized>(
    target: &mut R,
    x: f64,
    y: f64,
    radius: f64,
    start: f64,
    end: f64,
    color: Rgba,
) -> Result<()> {
    pie(target, x, y, radius, start, end, color, true)
}

fn pie<R: RegionAccess + ?Sized>(
    target: &mut R,
    x: f64,
    y: f64,
    radius: f64,
    start: f64,
    end: f64,
    color: Rgba,
    filled: bool,
) -> Result<()> {
    let (x, y, rad) = (trunc(x), trunc(y), trunc(radius));
    if rad < 0 {
        return Err(Error::negative_radius("radius", rad));
    }
    if rad == 0 {
        pixel(target, x, y, color);
        return Ok(());
    }

    match Fan::new(x, y, rad, start, end) {
        Fan::Radial { center, rim } => {
            log::debug!("sweep {start}..{end} runs backwards, drawing the start radius only");
            let ((x1, y1), (x2, y2)) = (center.truncated(), rim.truncated());
            line(target, x1, y1, x2, y2, color);
        }
        Fan::Sector(vertices) if vertices.len() < MIN_VERTICES => {
            return Err(Error::too_few("vertices", MIN_VERTICES, vertices.len()));
        }
        Fan::Sector(vertices) => {
            let pts: Vec<(i64, i64)> = vertices.iter().map(|p| p.truncated()).collect();
            if filled {
                fill(target, &pts, color);
            } else {
                outline(target, &pts, color);
            }
        }
    }
    Ok(())
}
