//! In-memory RGBA pixel buffer.
//!
//! [`Framebuffer`] is the reference [`RegionAccess`] target: it lends out
//! rectangular windows of its pixels and copies them back on release.
//! Rows are padded to a 64-byte stride.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::region::{Region, RegionAccess};

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// RGBA framebuffer with row-major, stride-padded storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order.
    /// Each pixel is 4 bytes: [R, G, B, A].
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions, cleared to
    /// transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(200, 100).unwrap();
    /// assert_eq!(fb.width(), 200);
    /// assert_eq!(fb.height(), 100);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);

        Ok(Self {
            width,
            height,
            pixels: vec![0; stride * (height as usize)],
            stride,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        let row_bytes = (self.width as usize) * 4;
        for row in self.pixels.chunks_exact_mut(self.stride) {
            for chunk in row[..row_bytes].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Coordinates of every pixel equal to `color`, row by row.
    #[must_use]
    pub fn painted(&self, color: Rgba) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get_pixel(x, y) == Some(color) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    /// Number of pixels equal to `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgba) -> usize {
        self.painted(color).len()
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// This is useful for encoding to formats like PNG that expect
    /// tightly-packed pixel data.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels.clone();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for row in self.pixels.chunks_exact(self.stride) {
            compact.extend_from_slice(&row[..row_bytes]);
        }
        compact
    }

    /// Whether the window lies entirely inside the buffer.
    fn contains(&self, x: i32, y: i32, width: u32, height: u32) -> bool {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return false;
        };
        width > 0
            && height > 0
            && u64::from(x) + u64::from(width) <= u64::from(self.width)
            && u64::from(y) + u64::from(height) <= u64::from(self.height)
    }
}

impl RegionAccess for Framebuffer {
    fn acquire(&mut self, x: i32, y: i32, width: u32, height: u32) -> Option<Region> {
        if !self.contains(x, y, width, height) {
            return None;
        }

        let (x0, y0) = (x as u32, y as u32);
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for row in y0..y0 + height {
            for col in x0..x0 + width {
                let idx = self.pixel_index(col, row);
                cells.push(Rgba::from_array([
                    self.pixels[idx],
                    self.pixels[idx + 1],
                    self.pixels[idx + 2],
                    self.pixels[idx + 3],
                ]));
            }
        }
        Region::new(x, y, width, height, cells).ok()
    }

    fn release(&mut self, region: Region) {
        if !self.contains(region.x(), region.y(), region.width(), region.height()) {
            log::warn!(
                "dropping {}x{} region at ({}, {}) outside the framebuffer",
                region.width(),
                region.height(),
                region.x(),
                region.y()
            );
            return;
        }

        let (x0, y0) = (region.x() as u32, region.y() as u32);
        let width = region.width() as usize;
        for (ly, row) in region.cells().chunks_exact(width).enumerate() {
            let start = self.pixel_index(x0, y0 + ly as u32);
            let dst = &mut self.pixels[start..start + width * 4];
            for (chunk, cell) in dst.chunks_exact_mut(4).zip(row) {
                chunk.copy_from_slice(&cell.to_array());
            }
        }
    }
}
