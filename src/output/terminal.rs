//! Terminal output encoder (ASCII/Unicode/ANSI).
//!
//! Downsamples a framebuffer onto a grid of character cells:
//! - ASCII: grayscale ramp ` .:-=+*#%@`
//! - Unicode: upper half blocks with true-color foreground/background, two
//!   pixel rows per cell
//! - ANSI: one true-color background cell per sample
//!
//! The same [`Viewport`] that drives sampling maps mouse cells back to surface
//! pixels, so clicks land where the user sees them.

use std::fmt::Write as FmtWrite;
use std::io::Write as IoWrite;

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    Ascii,
    /// Unicode half-block characters (2x vertical resolution)
    #[default]
    UnicodeHalfBlock,
    /// Unicode full blocks with ANSI 24-bit color
    AnsiTrueColor,
}

impl TerminalMode {
    /// Framebuffer rows sampled per text row.
    #[must_use]
    pub const fn samples_per_row(self) -> u32 {
        match self {
            Self::UnicodeHalfBlock => 2,
            Self::Ascii | Self::AnsiTrueColor => 1,
        }
    }

    /// Approximate width/height ratio of one sample.
    const fn char_aspect(self) -> f32 {
        match self {
            Self::UnicodeHalfBlock => 1.0,
            Self::Ascii | Self::AnsiTrueColor => 2.0,
        }
    }
}

/// Mapping between a framebuffer and a grid of character cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Text columns.
    pub cols: u32,
    /// Text rows.
    pub rows: u32,
    samples_per_row: u32,
    scale_x: f32,
    scale_y: f32,
    fb_width: u32,
    fb_height: u32,
}

impl Viewport {
    /// Fit a framebuffer of `fb_width` x `fb_height` into the requested cell
    /// grid, deriving a missing dimension from the aspect ratio.
    #[must_use]
    pub fn fit(
        fb_width: u32,
        fb_height: u32,
        cols: Option<u32>,
        rows: Option<u32>,
        mode: TerminalMode,
    ) -> Self {
        let fb_width = fb_width.max(1);
        let fb_height = fb_height.max(1);
        let fb_aspect = fb_width as f32 / fb_height as f32;
        let per_row = mode.samples_per_row();
        let char_aspect = mode.char_aspect();

        // Work in sample rows, then fold into text rows
        let (cols, sample_rows) = match (cols, rows) {
            (Some(w), Some(h)) => (w, h * per_row),
            (Some(w), None) => {
                let h = (w as f32 / fb_aspect / char_aspect).round() as u32;
                (w, h)
            }
            (None, Some(h)) => {
                let w = (h as f32 * per_row as f32 * fb_aspect * char_aspect).round() as u32;
                (w, h * per_row)
            }
            (None, None) => {
                // Default to 80 characters wide
                let w = 80u32.min(fb_width);
                let h = (w as f32 / fb_aspect / char_aspect).round() as u32;
                (w, h)
            }
        };
        let cols = cols.max(1);
        let rows = sample_rows.div_ceil(per_row).max(1);

        Self {
            cols,
            rows,
            samples_per_row: per_row,
            scale_x: fb_width as f32 / cols as f32,
            scale_y: fb_height as f32 / (rows * per_row) as f32,
            fb_width,
            fb_height,
        }
    }

    /// Framebuffer position (top-down) sampled for grid column `x`, sample row `sy`.
    fn sample_pos(&self, x: u32, sy: u32) -> (u32, u32) {
        let fx = (x as f32 * self.scale_x).min((self.fb_width - 1) as f32);
        let fy = (sy as f32 * self.scale_y).min((self.fb_height - 1) as f32);
        (fx as u32, fy as u32)
    }

    /// Surface pixel (bottom-left origin) under the center of a text cell.
    ///
    /// Returns `None` for cells outside the grid.
    #[must_use]
    pub fn cell_to_pixel(&self, col: u32, row: u32) -> Option<Point> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        let px = ((col as f32 + 0.5) * self.scale_x) as u32;
        let py = ((row as f32 + 0.5) * self.samples_per_row as f32 * self.scale_y) as u32;
        let px = px.min(self.fb_width - 1);
        let py = py.min(self.fb_height - 1);
        Some(Point::new(px as i32, (self.fb_height - 1 - py) as i32))
    }
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: Option<u32>,
    height: Option<u32>,
    invert: bool,
    line_ending: &'static str,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: TerminalMode::default(),
            width: None,
            height: None,
            invert: false,
            line_ending: "\n",
        }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target width in characters.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the target height in text rows.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Invert the output (light on dark vs dark on light).
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Line terminator; raw-mode terminals need `"\r\n"`.
    #[must_use]
    pub fn line_ending(mut self, line_ending: &'static str) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Current rendering mode.
    #[must_use]
    pub const fn current_mode(&self) -> TerminalMode {
        self.mode
    }

    /// Cell grid used for `fb`.
    #[must_use]
    pub fn viewport(&self, fb: &Framebuffer) -> Viewport {
        Viewport::fit(fb.width(), fb.height(), self.width, self.height, self.mode)
    }

    /// Render a framebuffer to a string.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        let vp = self.viewport(fb);
        match self.mode {
            TerminalMode::Ascii => self.render_ascii(fb, &vp),
            TerminalMode::UnicodeHalfBlock => self.render_unicode_half_block(fb, &vp),
            TerminalMode::AnsiTrueColor => self.render_ansi_true_color(fb, &vp),
        }
    }

    fn render_ascii(&self, fb: &Framebuffer, vp: &Viewport) -> String {
        let mut output = String::with_capacity((vp.cols as usize + 2) * vp.rows as usize);
        for y in 0..vp.rows {
            for x in 0..vp.cols {
                let idx = Self::luma_to_index(Self::luma(self.sample(fb, vp, x, y)));
                output.push(Self::ASCII_RAMP[idx]);
            }
            output.push_str(self.line_ending);
        }
        output
    }

    /// Each cell is `▀` with the top sample as foreground and the bottom one as background.
    fn render_unicode_half_block(&self, fb: &Framebuffer, vp: &Viewport) -> String {
        let mut output = String::with_capacity((vp.cols as usize * 40 + 8) * vp.rows as usize);
        for row in 0..vp.rows {
            for x in 0..vp.cols {
                let top = self.sample(fb, vp, x, row * 2);
                let bottom = self.sample(fb, vp, x, row * 2 + 1);
                let _ = write!(
                    output,
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                    top.r, top.g, top.b, bottom.r, bottom.g, bottom.b
                );
            }
            output.push_str("\x1b[0m");
            output.push_str(self.line_ending);
        }
        output
    }

    fn render_ansi_true_color(&self, fb: &Framebuffer, vp: &Viewport) -> String {
        let mut output = String::with_capacity((vp.cols as usize * 20 + 8) * vp.rows as usize);
        for y in 0..vp.rows {
            for x in 0..vp.cols {
                let Rgba { r, g, b, .. } = self.sample(fb, vp, x, y);
                let _ = write!(output, "\x1b[48;2;{r};{g};{b}m ");
            }
            output.push_str("\x1b[0m");
            output.push_str(self.line_ending);
        }
        output
    }

    /// Color at grid column `x`, sample row `sy`, inverted if requested.
    fn sample(&self, fb: &Framebuffer, vp: &Viewport, x: u32, sy: u32) -> Rgba {
        let (px, py) = vp.sample_pos(x, sy);
        let pixel = fb.get_pixel(px, py).unwrap_or(Rgba::BLACK);
        if self.invert {
            Rgba::rgb(255 - pixel.r, 255 - pixel.g, 255 - pixel.b)
        } else {
            pixel
        }
    }

    /// Rec. 709 luminance in `0.0..=1.0`.
    fn luma(pixel: Rgba) -> f32 {
        0.2126 * (f32::from(pixel.r) / 255.0)
            + 0.7152 * (f32::from(pixel.g) / 255.0)
            + 0.0722 * (f32::from(pixel.b) / 255.0)
    }

    fn luma_to_index(luma: f32) -> usize {
        let idx = (luma * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize;
        idx.min(Self::ASCII_RAMP.len() - 1)
    }

    /// Write the rendered frame to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: IoWrite>(&self, fb: &Framebuffer, out: &mut W) -> Result<()> {
        out.write_all(self.render(fb).as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Write the rendered frame to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout is closed.
    pub fn print(&self, fb: &Framebuffer) -> Result<()> {
        self.write_to(fb, &mut std::io::stdout().lock())
    }
}
