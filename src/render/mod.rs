//! Rasterization of 2D primitives.
//!
//! Every routine truncates its real-valued inputs toward zero, asks the
//! target for the region it needs and writes solid pixels into it. Nothing
//! is blended or anti-aliased.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer error-term line stepping
//! - **Midpoint Circle**: octant-masked arcs and rounded corners
//! - **Fixed-point Ellipse**: quarter walk mirrored into four quadrants
//! - **Scanline Polygon Fill**: even-odd spans between sorted edge crossings
//! - **Bernstein Curves**: Bézier evaluation for any number of control points
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae
//!   with a digital plotter."

mod arc;
mod bezier;
mod ellipse;
mod line;
mod pie;
mod polygon;
mod rect;
mod rounded;
mod span;

pub use arc::draw_arc;
pub use bezier::{bezier_points, draw_bezier, evaluate_bezier, BezierSamples};
pub use ellipse::{draw_circle, draw_ellipse, draw_filled_circle, draw_filled_ellipse};
pub use line::draw_line;
pub use pie::{draw_filled_pie, draw_pie};
pub use polygon::{
    draw_filled_polygon, draw_filled_trigon, draw_polygon, draw_trigon, scanline_intersections,
};
pub use rect::{draw_box, draw_rectangle};
pub use rounded::{draw_rounded_box, draw_rounded_rectangle};
pub use span::{draw_hline, draw_pixel, draw_vline};
