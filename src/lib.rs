//! # Trueno-Raster
//!
//! Pixel-exact rasterization of 2D primitives onto any pixel buffer that can
//! lend out rectangular regions.
//!
//! The crate draws points, axis-aligned runs, lines, rectangles, ellipses,
//! arcs, polygons, rounded rectangles, pies and Bézier curves with solid
//! colors. It never owns image memory: a drawing call acquires the region it
//! needs from a [`region::RegionAccess`] target, writes into it, and releases
//! it. [`framebuffer::Framebuffer`] is the bundled in-memory target.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut fb = Framebuffer::new(64, 64)?;
//! draw_filled_circle(&mut fb, 32.0, 32.0, 10.0, rgb(1.0, 0.0, 0.0))?;
//! draw_line(&mut fb, 0.0, 0.0, 63.0, 63.0, Rgba::BLUE);
//!
//! assert_eq!(fb.get_pixel(32, 32), Some(Rgba::BLUE));
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Conventions
//!
//! - Coordinates are `f64` and truncated toward zero before rasterizing.
//! - Spans and box corners are inclusive on both ends.
//! - Negative radii, too few vertices and too few curve steps are errors;
//!   nothing is drawn.
//! - A region the target cannot provide is not an error; the call draws
//!   nothing.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`color::Rgba`] and [`geometry::Point`]
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Foley, J. D. et al. (1990). *Computer Graphics: Principles and Practice*.
//! - Smith, A. R. (1978). "Color Gamut Transform Pairs." SIGGRAPH '78.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types, color space conversions and CSS formatting.
pub mod color;

/// In-memory RGBA framebuffer.
pub mod framebuffer;

/// Real-valued points and coordinate truncation.
pub mod geometry;

/// Region windows and the accessor capability drawing calls go through.
pub mod region;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of points, lines and shapes.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{hsl, hsla, hsv, hsva, rgb, rgba, Hsla, Hsva, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::Point;
    pub use crate::output::PngEncoder;
    pub use crate::region::{Region, RegionAccess};
    pub use crate::render::*;
}
