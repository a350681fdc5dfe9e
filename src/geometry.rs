//! Geometric inputs for the rasterizer.
//!
//! Callers describe shapes with real-valued coordinates. Every drawing
//! routine truncates them toward zero before any pixel math happens, so
//! `10.9` and `-10.9` address pixels `10` and `-10`. Truncated values are
//! clamped to `±COORD_LIMIT`, far outside anything a region can address.

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Integer pixel coordinates, truncated toward zero.
    #[must_use]
    pub fn truncated(self) -> (i64, i64) {
        (trunc(self.x), trunc(self.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Largest magnitude a truncated coordinate can take (2^40).
///
/// Sums and differences of a few clamped values stay well inside `i64`.
pub const COORD_LIMIT: i64 = 1 << 40;

/// Truncate a coordinate toward zero, clamped to `±COORD_LIMIT`.
///
/// NaN becomes 0. Clamped shapes end up outside any buffer and draw
/// nothing.
#[inline]
pub(crate) fn trunc(v: f64) -> i64 {
    (v.trunc() as i64).clamp(-COORD_LIMIT, COORD_LIMIT)
}
