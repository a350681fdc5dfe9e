//! Generalized Bézier curves over any number of control points.
//!
//! A curve with `n` control points is the degree `n - 1` Bernstein
//! polynomial, evaluated independently for x and y. The curve is sampled
//! `n * steps + 1` times after the start and the samples are joined with
//! straight lines.
//!
//! # References
//!
//! - Farin, G. (2002). "Curves and Surfaces for CAGD", ch. 4 The Bernstein Form.

use super::line::line;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{trunc, Point};
use crate::region::RegionAccess;

/// Minimum number of control points.
const MIN_CONTROLS: usize = 3;

/// Minimum number of samples per control point.
const MIN_STEPS: u32 = 2;

/// Evaluate the Bernstein polynomial with coefficients `data` at `t`.
///
/// `t` runs over `[0, data.len())`; values outside clamp to the first or
/// last coefficient. An empty slice evaluates to `0.0`.
#[must_use]
pub fn evaluate_bezier(data: &[f64], t: f64) -> f64 {
    let (Some(&first), Some(&last)) = (data.first(), data.last()) else {
        return 0.0;
    };
    if t < 0.0 {
        return first;
    }
    let len = data.len() as f64;
    if t >= len {
        return last;
    }

    let mu = t / len;
    let n = data.len() - 1;
    let mut muk = 1.0;
    let mut munk = (1.0 - mu).powf(n as f64);
    let mut result = 0.0;
    for (k, &coeff) in data.iter().enumerate() {
        let mut blend = muk * munk;
        muk *= mu;
        munk /= 1.0 - mu;

        // blend *= n! / (k! (n-k)!), interleaved to keep magnitudes small
        let (mut nn, mut kn, mut nkn) = (n, k, n - k);
        while nn >= 1 {
            blend *= nn as f64;
            nn -= 1;
            if kn > 1 {
                blend /= kn as f64;
                kn -= 1;
            }
            if nkn > 1 {
                blend /= nkn as f64;
                nkn -= 1;
            }
        }
        result += coeff * blend;
    }
    result
}

/// Streaming samples along the curve through a set of control points.
///
/// The first sample is the first control point rounded to the nearest
/// pixel; the remaining `controls.len() * steps + 1` samples are unrounded
/// and the final one equals the last control point. Samples are computed
/// one at a time, so memory use does not depend on `steps`.
#[derive(Debug, Clone)]
pub struct BezierSamples {
    xs: Vec<f64>,
    ys: Vec<f64>,
    step: f64,
    t: f64,
    started: bool,
    remaining: u64,
}

impl BezierSamples {
    /// Start sampling the curve through `controls`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if fewer than three control points
    /// or fewer than two steps are given.
    pub fn new(controls: &[Point], steps: u32) -> Result<Self> {
        if controls.len() < MIN_CONTROLS {
            return Err(Error::too_few("controls", MIN_CONTROLS, controls.len()));
        }
        if steps < MIN_STEPS {
            return Err(Error::InvalidArgument {
                name: "steps",
                reason: format!("at least {MIN_STEPS} steps required, got {steps}"),
            });
        }

        Ok(Self {
            xs: controls.iter().map(|p| p.x).collect(),
            ys: controls.iter().map(|p| p.y).collect(),
            step: 1.0 / f64::from(steps),
            t: 0.0,
            started: false,
            remaining: (controls.len() as u64)
                .saturating_mul(u64::from(steps))
                .saturating_add(1),
        })
    }
}

impl Iterator for BezierSamples {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if !self.started {
            self.started = true;
            return Some(Point::new(
                round_half_up(evaluate_bezier(&self.xs, 0.0)),
                round_half_up(evaluate_bezier(&self.ys, 0.0)),
            ));
        }
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.t += self.step;
        Some(Point::new(
            evaluate_bezier(&self.xs, self.t),
            evaluate_bezier(&self.ys, self.t),
        ))
    }
}

/// Collect every sample along the curve through `controls`.
///
/// See [`BezierSamples`] for the sampling rule.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if fewer than three control points or
/// fewer than two steps are given.
pub fn bezier_points(controls: &[Point], steps: u32) -> Result<Vec<Point>> {
    Ok(BezierSamples::new(controls, steps)?.collect())
}

/// Draw the curve through `controls` as a chain of line segments.
///
/// Each segment is drawn as soon as its end sample is evaluated.
///
/// # Errors
///
/// Same as [`BezierSamples::new`]; nothing is drawn on error.
pub fn draw_bezier<R: RegionAccess + ?Sized>(
    target: &mut R,
    controls: &[Point],
    steps: u32,
    color: Rgba,
) -> Result<()> {
    let mut samples = BezierSamples::new(controls, steps)?;
    let Some(first) = samples.next() else {
        return Ok(());
    };
    let (mut x1, mut y1) = (trunc(first.x), trunc(first.y));
    for p in samples {
        let (x2, y2) = (trunc(p.x), trunc(p.y));
        line(target, x1, y1, x2, y2, color);
        (x1, y1) = (x2, y2);
    }
    Ok(())
}

/// Round to nearest, halves toward positive infinity.
fn round_half_up(v: f64) -> f64 {
    let f = v.floor();
    if v - f >= 0.5 {
        f + 1.0
    } else {
        f
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use crate::render::draw_line;
    use approx::assert_relative_eq;

    fn controls(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_evaluate_endpoints() {
        let data = [2.0, 8.0, 5.0];
        assert_relative_eq!(evaluate_bezier(&data, 0.0), 2.0);
        assert_relative_eq!(evaluate_bezier(&data, -1.0), 2.0);
        assert_relative_eq!(evaluate_bezier(&data, 3.0), 5.0);
        assert_relative_eq!(evaluate_bezier(&data, 10.0), 5.0);
        assert_relative_eq!(evaluate_bezier(&[], 1.0), 0.0);
    }

    #[test]
    fn test_evaluate_quadratic_midpoint() {
        // t = 1.5 over three coefficients is mu = 0.5
        let data = [0.0, 10.0, 0.0];
        assert_relative_eq!(evaluate_bezier(&data, 1.5), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_constant_curve() {
        let data = [7.0; 6];
        for i in 0..12 {
            let t = f64::from(i) * 0.5;
            assert_relative_eq!(evaluate_bezier(&data, t), 7.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_points_count_and_ends() {
        let c = controls(&[(10.4, 20.6), (50.0, 80.0), (90.0, 20.0), (120.0, 60.0)]);
        let points = bezier_points(&c, 5).unwrap();
        assert_eq!(points.len(), 4 * 5 + 2);
        assert_eq!(points[0], Point::new(10.0, 21.0));
        assert_eq!(points[points.len() - 1], Point::new(120.0, 60.0));
    }

    #[test]
    fn test_round_half_up() {
        assert_relative_eq!(round_half_up(2.5), 3.0);
        assert_relative_eq!(round_half_up(-2.5), -2.0);
        assert_relative_eq!(round_half_up(2.4999), 2.0);
    }

    #[test]
    fn test_invalid_arguments() {
        let two = controls(&[(0.0, 0.0), (10.0, 10.0)]);
        let three = controls(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);
        assert!(bezier_points(&two, 4).is_err());
        assert!(bezier_points(&three, 1).is_err());
        assert!(bezier_points(&three, 0).is_err());

        let mut fb = Framebuffer::new(30, 30).unwrap();
        assert!(draw_bezier(&mut fb, &three, 1, Rgba::RED).is_err());
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_samples_stream_without_buffering() {
        let c = controls(&[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)]);
        let mut samples = BezierSamples::new(&c, u32::MAX).unwrap();
        assert_eq!(samples.next(), Some(Point::new(0.0, 0.0)));
        let second = samples.next().unwrap();
        assert!(second.x > 0.0 && second.x < 1e-6);
        assert_eq!(samples.take(1000).count(), 1000);
    }

    #[test]
    fn test_draw_matches_collected_points() {
        let c = controls(&[(3.0, 45.0), (12.5, 2.0), (30.0, 48.0), (47.0, 5.5)]);
        let mut a = Framebuffer::new(50, 50).unwrap();
        draw_bezier(&mut a, &c, 3, Rgba::GREEN).unwrap();

        let mut b = Framebuffer::new(50, 50).unwrap();
        for pair in bezier_points(&c, 3).unwrap().windows(2) {
            draw_line(&mut b, pair[0].x, pair[0].y, pair[1].x, pair[1].y, Rgba::GREEN);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_collinear_controls_draw_a_line() {
        // y sits inside the pixel row so rounding noise cannot cross it
        let c = controls(&[(10.0, 10.25), (20.0, 10.25), (30.0, 10.25)]);
        let mut a = Framebuffer::new(40, 20).unwrap();
        draw_bezier(&mut a, &c, 4, Rgba::RED).unwrap();

        let mut b = Framebuffer::new(40, 20).unwrap();
        draw_line(&mut b, 10.0, 10.0, 30.0, 10.0, Rgba::RED);
        assert_eq!(a, b);
    }

    #[test]
    fn test_curve_touches_both_ends() {
        let c = controls(&[(5.0, 40.0), (25.0, 0.0), (45.0, 40.0)]);
        let mut fb = Framebuffer::new(50, 50).unwrap();
        draw_bezier(&mut fb, &c, 8, Rgba::BLUE).unwrap();
        assert_eq!(fb.get_pixel(5, 40), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(45, 40), Some(Rgba::BLUE));
        // the curve never reaches its middle control point
        assert_eq!(fb.get_pixel(25, 0), Some(Rgba::TRANSPARENT));
    }
}
