//! PNG output for rasterized framebuffers.
//!
//! Pure Rust encoding using the `png` crate: 8-bit RGBA, no stride padding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::framebuffer::Framebuffer;

/// PNG encoder for framebuffer output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Self::encode(fb, BufWriter::new(file))?;
        log::debug!("wrote {}x{} PNG to {}", fb.width(), fb.height(), path.display());
        Ok(())
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(fb, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(fb: &Framebuffer, sink: W) -> Result<()> {
        let mut encoder = png::Encoder::new(sink, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&fb.to_compact_pixels())?;
        writer.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::render::draw_line;

    fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_png_to_bytes() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        let bytes = PngEncoder::to_bytes(&fb).unwrap();
        // PNG magic bytes
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_png_preserves_drawn_pixels() {
        let mut fb = Framebuffer::new(7, 3).unwrap();
        draw_line(&mut fb, 0.0, 1.0, 6.0, 1.0, Rgba::BLUE);

        let (info, pixels) = decode(&PngEncoder::to_bytes(&fb).unwrap());
        assert_eq!((info.width, info.height), (7, 3));
        assert_eq!(pixels.len(), 7 * 3 * 4);
        let row = &pixels[7 * 4..14 * 4];
        assert!(row.chunks_exact(4).all(|px| px == Rgba::BLUE.to_array()));
        assert!(pixels[..7 * 4].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_png_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raster.png");
        let fb = Framebuffer::new(4, 4).unwrap();

        PngEncoder::write_to_file(&fb, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, PngEncoder::to_bytes(&fb).unwrap());
    }
}
