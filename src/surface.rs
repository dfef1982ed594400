//! Drawing surfaces.
//!
//! [`Surface`] is the pixel sink every rasterizer writes into. Coordinates are
//! bottom-left origin; anything outside `[0, width) x [0, height)` is dropped
//! silently.
//!
//! Two implementations are provided:
//!
//! - [`Canvas`]: framebuffer-backed, with a pen color and a frame lifecycle.
//! - [`PixelRecorder`]: records the set of written pixels, for inspection.

use std::collections::BTreeMap;

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, PointF};
use crate::raster::{draw_line, DiskBrush, PixelBrush};

/// A pixel-addressable drawing target.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Set the color used by subsequent drawing calls.
    fn set_color(&mut self, color: Rgba);

    /// Write one pixel. Out-of-bounds positions are ignored.
    fn put_pixel(&mut self, x: i32, y: i32);

    /// Fill the horizontal span `x0..=x1` on row `y` (either order).
    fn fill_span(&mut self, x0: i32, x1: i32, y: i32) {
        if y < 0 || y >= self.height() as i32 {
            return;
        }
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let lo = lo.max(0);
        let hi = hi.min(self.width() as i32 - 1);
        for x in lo..=hi {
            self.put_pixel(x, y);
        }
    }

    /// Fill the rectangle with inclusive corners `(x0, y0)` and `(x1, y1)`.
    fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let (ylo, yhi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let ylo = ylo.max(0);
        let yhi = yhi.min(self.height() as i32 - 1);
        for y in ylo..=yhi {
            self.fill_span(x0, x1, y);
        }
    }

    /// Draw a segment between real-valued endpoints.
    ///
    /// Endpoints are rounded to the nearest pixel and stepped with Bresenham;
    /// `width > 1` thickens the line with a disk brush.
    fn line_segment(&mut self, from: PointF, to: PointF, width: u32) {
        let (a, b) = (from.round(), to.round());
        if width <= 1 {
            draw_line(self, a, b, &PixelBrush);
        } else {
            draw_line(self, a, b, &DiskBrush::for_width(width));
        }
    }
}

/// Framebuffer-backed surface with a pen color.
///
/// A frame is drawn between [`Canvas::begin_frame`] and [`Canvas::end_frame`];
/// [`Canvas::present`] hands out the finished pixels.
#[derive(Debug, Clone)]
pub struct Canvas {
    fb: Framebuffer,
    pen: Rgba,
    frames: u64,
}

impl Canvas {
    /// Create a canvas of the given size.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            fb: Framebuffer::new(width, height)?,
            pen: Rgba::WHITE,
            frames: 0,
        })
    }

    /// Replace the backing framebuffer with one of a new size.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width != self.fb.width() || height != self.fb.height() {
            self.fb = Framebuffer::new(width, height)?;
        }
        Ok(())
    }

    /// Start a frame by clearing to `background`.
    pub fn begin_frame(&mut self, background: Rgba) {
        self.fb.clear(background);
        self.pen = Rgba::WHITE;
    }

    /// Finish the current frame.
    pub fn end_frame(&mut self) {
        self.frames += 1;
        log::trace!("frame {} finished", self.frames);
    }

    /// The last finished frame.
    #[must_use]
    pub fn present(&self) -> &Framebuffer {
        &self.fb
    }

    /// Number of frames finished so far.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Current pen color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.pen
    }

    /// Read back a pixel in bottom-left coordinates.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let row = self.flip_row(y)?;
        let x = u32::try_from(x).ok()?;
        self.fb.get_pixel(x, row)
    }

    /// Map a bottom-up row to the framebuffer's top-down row.
    fn flip_row(&self, y: i32) -> Option<u32> {
        let y = u32::try_from(y).ok()?;
        (y < self.fb.height()).then(|| self.fb.height() - 1 - y)
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.fb.width()
    }

    fn height(&self) -> u32 {
        self.fb.height()
    }

    fn set_color(&mut self, color: Rgba) {
        self.pen = color;
    }

    fn put_pixel(&mut self, x: i32, y: i32) {
        let (Ok(x), Some(row)) = (u32::try_from(x), self.flip_row(y)) else {
            return;
        };
        self.fb.set_pixel(x, row, self.pen);
    }

    fn fill_span(&mut self, x0: i32, x1: i32, y: i32) {
        self.fill_rect(x0, y, x1, y);
    }

    fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let (xlo, xhi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (ylo, yhi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let w = self.fb.width() as i32;
        let h = self.fb.height() as i32;

        let xlo = xlo.max(0);
        let xhi = xhi.min(w - 1);
        let ylo = ylo.max(0);
        let yhi = yhi.min(h - 1);
        if xlo > xhi || ylo > yhi {
            return;
        }

        // Bottom-up rows ylo..=yhi are top-down rows (h-1-yhi)..=(h-1-ylo)
        let top = (h - 1 - yhi) as u32;
        self.fb.fill_rect(
            xlo as u32,
            top,
            (xhi - xlo + 1) as u32,
            (yhi - ylo + 1) as u32,
            self.pen,
        );
    }
}

/// Surface that records which pixels were written and in which color.
///
/// Later writes to the same pixel overwrite earlier ones, as on a real surface.
#[derive(Debug, Clone, Default)]
pub struct PixelRecorder {
    width: u32,
    height: u32,
    pen: Rgba,
    pixels: BTreeMap<Point, Rgba>,
    writes: usize,
}

impl PixelRecorder {
    /// Create an empty recorder for a surface of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pen: Rgba::WHITE,
            pixels: BTreeMap::new(),
            writes: 0,
        }
    }

    /// Distinct pixels written, in `(x, y)` order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.pixels.keys().copied()
    }

    /// Number of distinct pixels written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Total number of accepted writes, counting overdraw.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }

    /// Whether `p` was written.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.pixels.contains_key(&p)
    }

    /// Color last written at `p`.
    #[must_use]
    pub fn color_at(&self, p: Point) -> Option<Rgba> {
        self.pixels.get(&p).copied()
    }

    /// The full pixel map.
    #[must_use]
    pub fn pixels(&self) -> &BTreeMap<Point, Rgba> {
        &self.pixels
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.pixels.clear();
        self.writes = 0;
    }
}

impl Surface for PixelRecorder {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_color(&mut self, color: Rgba) {
        self.pen = color;
    }

    fn put_pixel(&mut self, x: i32, y: i32) {
        let p = Point::new(x, y);
        if p.in_bounds(self.width, self.height) {
            self.pixels.insert(p, self.pen);
            self.writes += 1;
        }
    }
}
