//! Polygon outline and scanline fill.
//!
//! The fill walks every row between the lowest and highest vertex, collects
//! the x positions where the row crosses a non-horizontal edge, sorts them
//! and fills between consecutive pairs (even-odd rule). Each edge is
//! half-open in y so shared vertices count once, except on the last row
//! where the lower endpoint is included instead.
//!
//! # References
//!
//! - Foley, J. D. et al. (1990). "Computer Graphics: Principles and Practice",
//!   §3.6 Filling Polygons.

use super::line::line;
use super::span::hline;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::region::RegionAccess;

/// Minimum vertex count for a polygon.
const MIN_VERTICES: usize = 3;

/// Draw a closed polygon outline through `vertices`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if fewer than three vertices are given.
pub fn draw_polygon<R: RegionAccess + ?Sized>(
    target: &mut R,
    vertices: &[Point],
    color: Rgba,
) -> Result<()> {
    if vertices.len() < MIN_VERTICES {
        return Err(Error::too_few("vertices", MIN_VERTICES, vertices.len()));
    }
    outline(target, &truncate_all(vertices), color);
    Ok(())
}

/// Fill the polygon through `vertices` with the even-odd rule.
///
/// Self-intersecting outlines are allowed; overlapping lobes cancel.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if fewer than three vertices are given.
pub fn draw_filled_polygon<R: RegionAccess + ?Sized>(
    target: &mut R,
    vertices: &[Point],
    color: Rgba,
) -> Result<()> {
    if vertices.len() < MIN_VERTICES {
        return Err(Error::too_few("vertices", MIN_VERTICES, vertices.len()));
    }
    fill(target, &truncate_all(vertices), color);
    Ok(())
}

/// Draw the outline of the triangle `a`, `b`, `c`.
pub fn draw_trigon<R: RegionAccess + ?Sized>(
    target: &mut R,
    a: Point,
    b: Point,
    c: Point,
    color: Rgba,
) {
    outline(target, &truncate_all(&[a, b, c]), color);
}

/// Fill the triangle `a`, `b`, `c`.
pub fn draw_filled_trigon<R: RegionAccess + ?Sized>(
    target: &mut R,
    a: Point,
    b: Point,
    c: Point,
    color: Rgba,
) {
    fill(target, &truncate_all(&[a, b, c]), color);
}

/// Sorted x positions where row `y` crosses the edges of the polygon.
///
/// Vertices are truncated first, exactly as [`draw_filled_polygon`] does.
/// Consecutive pairs of the result are the spans that row fills.
#[must_use]
pub fn scanline_intersections(vertices: &[Point], y: i64) -> Vec<f64> {
    let pts = truncate_all(vertices);
    let Some(max_y) = pts.iter().map(|&(_, py)| py).max() else {
        return Vec::new();
    };
    let mut xs = Vec::new();
    crossings(&pts, y, max_y, &mut xs);
    xs
}

fn truncate_all(vertices: &[Point]) -> Vec<(i64, i64)> {
    vertices.iter().map(|p| p.truncated()).collect()
}

pub(crate) fn outline<R: RegionAccess + ?Sized>(target: &mut R, pts: &[(i64, i64)], color: Rgba) {
    for pair in pts.windows(2) {
        let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
        line(target, x1, y1, x2, y2, color);
    }
    if let (Some(&(x1, y1)), Some(&(x2, y2))) = (pts.last(), pts.first()) {
        line(target, x1, y1, x2, y2, color);
    }
}

pub(crate) fn fill<R: RegionAccess + ?Sized>(target: &mut R, pts: &[(i64, i64)], color: Rgba) {
    let (Some(min_y), Some(max_y)) = (
        pts.iter().map(|&(_, y)| y).min(),
        pts.iter().map(|&(_, y)| y).max(),
    ) else {
        return;
    };

    // Rows outside the accessor's i32 range can never be acquired.
    let rows = min_y.max(i64::from(i32::MIN))..=max_y.min(i64::from(i32::MAX));
    let mut xs = Vec::with_capacity(pts.len());
    for y in rows {
        crossings(pts, y, max_y, &mut xs);
        for pair in xs.chunks_exact(2) {
            hline(target, pair[0].ceil() as i64, pair[1].floor() as i64, y, color);
        }
        if xs.len() % 2 == 1 {
            log::trace!("row {y}: odd crossing count {}, last crossing unpaired", xs.len());
        }
    }
}

/// Collect the sorted crossings of row `y` into `xs`.
fn crossings(pts: &[(i64, i64)], y: i64, max_y: i64, xs: &mut Vec<f64>) {
    xs.clear();
    let n = pts.len();
    for (i, &b) in pts.iter().enumerate() {
        let a = pts[if i == 0 { n - 1 } else { i - 1 }];
        let ((x1, y1), (x2, y2)) = match a.1.cmp(&b.1) {
            std::cmp::Ordering::Less => (a, b),
            std::cmp::Ordering::Greater => (b, a),
            std::cmp::Ordering::Equal => continue,
        };
        if (y >= y1 && y < y2) || (y == max_y && y > y1 && y <= y2) {
            let t = (y - y1) as f64 / (y2 - y1) as f64;
            xs.push(t * (x2 - x1) as f64 + x1 as f64);
        }
    }
    xs.sort_by(f64::total_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use crate::render::draw_line;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_too_few_vertices() {
        let mut fb = Framebuffer::new(50, 50).unwrap();
        let two = pts(&[(1.0, 1.0), (10.0, 10.0)]);
        assert!(draw_polygon(&mut fb, &two, Rgba::RED).is_err());
        assert!(draw_filled_polygon(&mut fb, &two, Rgba::RED).is_err());
        assert!(draw_filled_polygon(&mut fb, &[], Rgba::RED).is_err());
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_outline_closes_the_loop() {
        let tri = pts(&[(10.0, 10.0), (40.0, 10.0), (10.0, 40.0)]);
        let mut a = Framebuffer::new(60, 60).unwrap();
        draw_polygon(&mut a, &tri, Rgba::RED).unwrap();

        let mut b = Framebuffer::new(60, 60).unwrap();
        draw_line(&mut b, 10.0, 10.0, 40.0, 10.0, Rgba::RED);
        draw_line(&mut b, 40.0, 10.0, 10.0, 40.0, Rgba::RED);
        draw_line(&mut b, 10.0, 40.0, 10.0, 10.0, Rgba::RED);
        assert_eq!(a, b);
    }

    #[test]
    fn test_trigon_matches_polygon() {
        let (p, q, r) = (
            Point::new(5.0, 30.0),
            Point::new(25.0, 3.0),
            Point::new(45.0, 40.0),
        );
        let mut a = Framebuffer::new(50, 50).unwrap();
        let mut b = Framebuffer::new(50, 50).unwrap();
        draw_filled_trigon(&mut a, p, q, r, Rgba::GREEN);
        draw_filled_polygon(&mut b, &[p, q, r], Rgba::GREEN).unwrap();
        assert_eq!(a, b);

        draw_trigon(&mut a, p, q, r, Rgba::BLUE);
        draw_polygon(&mut b, &[p, q, r], Rgba::BLUE).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_filled_square() {
        let square = pts(&[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (10.0, 20.0)]);
        let mut fb = Framebuffer::new(40, 40).unwrap();
        draw_filled_polygon(&mut fb, &square, Rgba::BLUE).unwrap();
        assert_eq!(fb.count_color(Rgba::BLUE), 11 * 11);
        assert_eq!(fb.get_pixel(9, 15), Some(Rgba::TRANSPARENT));
        assert_eq!(fb.get_pixel(21, 15), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_bowtie_is_two_bands() {
        let bowtie = pts(&[(100.0, 50.0), (150.0, 50.0), (100.0, 100.0), (150.0, 100.0)]);
        assert_eq!(scanline_intersections(&bowtie, 50), vec![100.0, 150.0]);
        assert_eq!(scanline_intersections(&bowtie, 75), vec![125.0, 125.0]);
        assert_eq!(scanline_intersections(&bowtie, 100), vec![100.0, 150.0]);

        let mut fb = Framebuffer::new(200, 150).unwrap();
        draw_filled_polygon(&mut fb, &bowtie, Rgba::RED).unwrap();
        assert_eq!(fb.get_pixel(100, 50), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(150, 50), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(125, 75), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(110, 75), Some(Rgba::TRANSPARENT));
        assert_eq!(fb.get_pixel(140, 75), Some(Rgba::TRANSPARENT));
        assert_eq!(fb.get_pixel(100, 100), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(150, 100), Some(Rgba::RED));
    }

    #[test]
    fn test_intersections_outside_rows() {
        let tri = pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)]);
        assert!(scanline_intersections(&tri, -1).is_empty());
        assert!(scanline_intersections(&tri, 11).is_empty());
        assert!(scanline_intersections(&[], 0).is_empty());
    }

    #[test]
    fn test_intersections_are_sorted() {
        let tri = pts(&[(30.0, 0.0), (0.0, 20.0), (40.0, 20.0)]);
        let xs = scanline_intersections(&tri, 10);
        assert_eq!(xs.len(), 2);
        assert!(xs[0] <= xs[1]);
    }

    #[test]
    fn test_fractional_vertices_truncate() {
        let a = pts(&[(10.9, 10.9), (30.2, 10.1), (20.5, 30.7)]);
        let b = pts(&[(10.0, 10.0), (30.0, 10.0), (20.0, 30.0)]);
        let mut fa = Framebuffer::new(40, 40).unwrap();
        let mut fb = Framebuffer::new(40, 40).unwrap();
        draw_filled_polygon(&mut fa, &a, Rgba::RED).unwrap();
        draw_filled_polygon(&mut fb, &b, Rgba::RED).unwrap();
        assert_eq!(fa, fb);
    }
}
