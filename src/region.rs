//! Rectangular windows into an external pixel buffer.
//!
//! The rasterizer never owns image memory. Each drawing call asks its target
//! for one [`Region`] covering the shape's bounding box, writes cells in
//! local memory, and hands the region back exactly once. Targets implement
//! [`RegionAccess`]; [`crate::framebuffer::Framebuffer`] is the in-memory one.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// A row-major block of cells copied out of a pixel buffer.
///
/// Invariant: `width * height == cells.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    cells: Vec<Rgba>,
}

impl Region {
    /// Wrap existing cells as a region with origin `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionSize`] if `cells` does not hold exactly
    /// `width * height` entries.
    pub fn new(x: i32, y: i32, width: u32, height: u32, cells: Vec<Rgba>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(Error::RegionSize {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
            cells,
        })
    }

    /// A region with every cell set to `color`.
    #[must_use]
    pub fn filled(x: i32, y: i32, width: u32, height: u32, color: Rgba) -> Self {
        Self {
            x,
            y,
            width,
            height,
            cells: vec![color; width as usize * height as usize],
        }
    }

    /// X coordinate of the top-left cell in buffer space.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Y coordinate of the top-left cell in buffer space.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Rgba] {
        &self.cells
    }

    /// Cell at local coordinates, or `None` outside the region.
    #[must_use]
    pub fn cell(&self, lx: u32, ly: u32) -> Option<Rgba> {
        if lx >= self.width || ly >= self.height {
            return None;
        }
        Some(self.cells[ly as usize * self.width as usize + lx as usize])
    }

    /// Set the cell at buffer coordinates `(px, py)`.
    ///
    /// Points outside the region are ignored.
    #[inline]
    pub(crate) fn plot(&mut self, px: i64, py: i64, color: Rgba) {
        let lx = px - i64::from(self.x);
        let ly = py - i64::from(self.y);
        if lx < 0 || ly < 0 || lx >= i64::from(self.width) || ly >= i64::from(self.height) {
            return;
        }
        let idx = ly as usize * self.width as usize + lx as usize;
        self.cells[idx] = color;
    }

    /// Fill buffer-space cells `px1..=px2` on row `py`, clipped to the region.
    pub(crate) fn span(&mut self, px1: i64, px2: i64, py: i64, color: Rgba) {
        let ly = py - i64::from(self.y);
        if ly < 0 || ly >= i64::from(self.height) {
            return;
        }
        let lx1 = (px1 - i64::from(self.x)).max(0);
        let lx2 = (px2 - i64::from(self.x)).min(i64::from(self.width) - 1);
        if lx1 > lx2 {
            return;
        }
        let row = ly as usize * self.width as usize;
        self.cells[row + lx1 as usize..=row + lx2 as usize].fill(color);
    }

    /// Set every cell to `color`.
    pub(crate) fn fill(&mut self, color: Rgba) {
        self.cells.fill(color);
    }
}

/// Narrow capability over a pixel buffer: lend out a window, take it back.
///
/// `acquire` must return `None` rather than a partially populated region
/// when the window does not fit. `release` is called exactly once for every
/// region that was acquired, after all writes for that drawing call.
pub trait RegionAccess {
    /// Copy out the `width` x `height` window at `(x, y)`.
    fn acquire(&mut self, x: i32, y: i32, width: u32, height: u32) -> Option<Region>;

    /// Write a previously acquired region back at its origin.
    fn release(&mut self, region: Region);
}

/// Acquire the inclusive bounding box `[min_x, max_x] x [min_y, max_y]`.
///
/// Boxes whose origin or size do not fit the accessor's integer types,
/// including sizes that overflow `i64`, are treated like any other
/// unavailable window.
pub(crate) fn acquire_bounds<R: RegionAccess + ?Sized>(
    target: &mut R,
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
) -> Option<Region> {
    let extent = |lo: i64, hi: i64| {
        hi.checked_sub(lo)
            .and_then(|d| d.checked_add(1))
            .and_then(|n| u32::try_from(n).ok())
    };
    let dims = (
        i32::try_from(min_x).ok(),
        i32::try_from(min_y).ok(),
        extent(min_x, max_x),
        extent(min_y, max_y),
    );
    let (Some(x), Some(y), Some(width), Some(height)) = dims else {
        log::trace!("region [{min_x}, {min_y}]..=[{max_x}, {max_y}] out of accessor range");
        return None;
    };
    let region = target.acquire(x, y, width, height);
    if region.is_none() {
        log::trace!("region {width}x{height} at ({x}, {y}) unavailable, skipping");
    }
    region
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_cell_count() {
        assert!(Region::new(0, 0, 2, 3, vec![Rgba::BLACK; 6]).is_ok());
        let err = Region::new(0, 0, 2, 3, vec![Rgba::BLACK; 5]).unwrap_err();
        assert!(matches!(
            err,
            Error::RegionSize {
                expected: 6,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_plot_translates_to_local() {
        let mut region = Region::filled(10, 20, 3, 3, Rgba::WHITE);
        region.plot(11, 22, Rgba::RED);
        assert_eq!(region.cell(1, 2), Some(Rgba::RED));
        assert_eq!(region.cells().iter().filter(|&&c| c == Rgba::RED).count(), 1);
    }

    #[test]
    fn test_plot_outside_is_ignored() {
        let mut region = Region::filled(10, 20, 3, 3, Rgba::WHITE);
        region.plot(9, 20, Rgba::RED);
        region.plot(13, 20, Rgba::RED);
        region.plot(10, 23, Rgba::RED);
        assert!(region.cells().iter().all(|&c| c == Rgba::WHITE));
    }

    #[test]
    fn test_span_is_inclusive_and_clipped() {
        let mut region = Region::filled(0, 0, 5, 2, Rgba::WHITE);
        region.span(1, 3, 1, Rgba::BLUE);
        region.span(-4, 0, 0, Rgba::RED);
        region.span(4, 9, 0, Rgba::GREEN);
        assert_eq!(region.cell(0, 1), Some(Rgba::WHITE));
        assert_eq!(region.cell(1, 1), Some(Rgba::BLUE));
        assert_eq!(region.cell(3, 1), Some(Rgba::BLUE));
        assert_eq!(region.cell(4, 1), Some(Rgba::WHITE));
        assert_eq!(region.cell(0, 0), Some(Rgba::RED));
        assert_eq!(region.cell(4, 0), Some(Rgba::GREEN));
    }

    #[test]
    fn test_fill() {
        let mut region = Region::filled(0, 0, 4, 4, Rgba::WHITE);
        region.fill(Rgba::BLACK);
        assert!(region.cells().iter().all(|&c| c == Rgba::BLACK));
    }

    struct Unlimited(usize);

    impl RegionAccess for Unlimited {
        fn acquire(&mut self, x: i32, y: i32, width: u32, height: u32) -> Option<Region> {
            self.0 += 1;
            Some(Region::filled(x, y, width, height, Rgba::WHITE))
        }

        fn release(&mut self, _region: Region) {}
    }

    #[test]
    fn test_acquire_bounds_rejects_unrepresentable_boxes() {
        let mut target = Unlimited(0);
        assert!(acquire_bounds(&mut target, i64::MIN, 0, i64::MAX, 0).is_none());
        assert!(acquire_bounds(&mut target, 0, 0, 0, i64::MAX).is_none());
        assert!(acquire_bounds(&mut target, -5, 0, i64::from(u32::MAX), 0).is_none());
        let past = i64::from(i32::MAX) + 1;
        assert!(acquire_bounds(&mut target, past, 0, past, 0).is_none());
        assert_eq!(target.0, 0);

        assert!(acquire_bounds(&mut target, -3, -3, 3, 3).is_some());
        assert_eq!(target.0, 1);
    }

    #[test]
    fn test_cell_out_of_range() {
        let region = Region::filled(0, 0, 2, 2, Rgba::WHITE);
        assert_eq!(region.cell(2, 0), None);
        assert_eq!(region.cell(0, 2), None);
    }
}
