//! Color types and color space conversions.
//!
//! Provides an 8-bit RGBA color and an HSV color with the sector-based
//! HSV→RGB conversion used for the concentric ring gradient.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create an opaque color from unit-range channels (0.0-1.0).
    ///
    /// Channels are clamped and rounded to the nearest 8-bit value.
    #[must_use]
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

/// HSV color with unit-range components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue as a fraction of a full turn (wraps into 0.0-1.0).
    pub h: f32,
    /// Saturation (0.0-1.0).
    pub s: f32,
    /// Value (0.0-1.0).
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color.
    #[must_use]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Convert to unit-range RGB channels.
    #[must_use]
    pub fn to_rgb(self) -> (f32, f32, f32) {
        let Self { h, s, v } = self;
        if s <= 1e-6 {
            return (v, v, v);
        }

        let h = h.rem_euclid(1.0);
        let hf = h * 6.0;
        let sector = hf.floor();
        let f = hf - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match (sector as i32).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    }

    /// Convert to an opaque RGBA color.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let (r, g, b) = self.to_rgb();
        Rgba::from_unit(r, g, b)
    }
}

impl From<Hsv> for Rgba {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgba()
    }
}

/// Hue span covered by the ring gradient (red through violet, stopping short of red).
pub const RING_HUE_SPAN: f32 = 0.85;

/// Color of ring `index` out of `count` concentric rings.
///
/// Hue runs linearly from 0.0 on the innermost ring to [`RING_HUE_SPAN`] on the
/// outermost, at saturation 0.95 and full value. A single ring gets hue 0.
#[must_use]
pub fn ring_color(index: usize, count: usize) -> Rgba {
    let t = if count <= 1 {
        0.0
    } else {
        index as f32 / (count - 1) as f32
    };
    Hsv::new(RING_HUE_SPAN * t, 0.95, 1.0).to_rgba()
}
