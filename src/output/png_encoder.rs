//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. Frames are written as RGBA8
//! with rows top-down, the way they sit in the framebuffer.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

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
        log::info!(
            "wrote {}x{} frame to {}",
            fb.width(),
            fb.height(),
            path.display()
        );
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
        // Compact pixels drop the row alignment padding
        writer.write_image_data(&fb.to_compact_pixels())?;
        writer.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_png_to_bytes() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        let bytes = PngEncoder::to_bytes(&fb).unwrap();
        // PNG magic bytes
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_png_decodes_to_same_pixels() {
        let mut fb = Framebuffer::new(7, 3).unwrap();
        fb.clear(Rgba::BLACK);
        fb.set_pixel(6, 0, Rgba::GREEN);

        let bytes = PngEncoder::to_bytes(&fb).unwrap();
        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();

        assert_eq!((info.width, info.height), (7, 3));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(&buf[6 * 4..7 * 4], &[0, 255, 0, 255]);
        assert_eq!(&buf[7 * 4..8 * 4], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let fb = Framebuffer::new(4, 4).unwrap();

        PngEncoder::write_to_file(&fb, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 8);
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let fb = Framebuffer::new(4, 4).unwrap();
        let err = PngEncoder::write_to_file(&fb, "/nonexistent/dir/frame.png").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
