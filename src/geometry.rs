//! Geometric primitives for rasterization and clipping.
//!
//! All integer coordinates use a pixel-indexed space with the origin at the
//! bottom-left corner of the surface.

/// An integer pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row, counted from the bottom).
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp both coordinates into `[0, width) x [0, height)`.
    #[must_use]
    pub fn clamp_to(self, width: u32, height: u32) -> Self {
        Self::new(
            clamp_coord(self.x, width),
            clamp_coord(self.y, height),
        )
    }

    /// Check whether the point lies inside `[0, width) x [0, height)`.
    #[must_use]
    pub fn in_bounds(self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < width && (self.y as u32) < height
    }

    /// Convert to a real-valued point.
    #[must_use]
    pub fn to_f64(self) -> PointF {
        PointF::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A real-valued point, produced by clipping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl PointF {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round to the nearest pixel.
    #[must_use]
    pub fn round(self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }
}

/// A line segment between two pixel positions.
///
/// Direction is irrelevant for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    /// First endpoint.
    pub a: Point,
    /// Second endpoint.
    pub b: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }
}

/// Which edge of a [`ClipRect`] an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The `xmin` edge.
    Left,
    /// The `xmax` edge.
    Right,
    /// The `ymin` edge.
    Bottom,
    /// The `ymax` edge.
    Top,
}

/// An axis-aligned clip rectangle with inclusive integer bounds.
///
/// Every mutating method leaves the rectangle normalized
/// (`xmin <= xmax`, `ymin <= ymax`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClipRect {
    /// Left bound.
    pub xmin: i32,
    /// Bottom bound.
    pub ymin: i32,
    /// Right bound.
    pub xmax: i32,
    /// Top bound.
    pub ymax: i32,
}

impl ClipRect {
    /// Create a rectangle from its bounds, swapping inverted pairs.
    #[must_use]
    pub fn new(xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> Self {
        let mut rect = Self {
            xmin,
            ymin,
            xmax,
            ymax,
        };
        rect.normalize();
        rect
    }

    /// Width in pixels (`xmax - xmin`).
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.xmax - self.xmin
    }

    /// Height in pixels (`ymax - ymin`).
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.ymax - self.ymin
    }

    /// Check whether a point lies inside (bounds inclusive).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Swap bounds that ended up inverted.
    pub fn normalize(&mut self) {
        if self.xmin > self.xmax {
            std::mem::swap(&mut self.xmin, &mut self.xmax);
        }
        if self.ymin > self.ymax {
            std::mem::swap(&mut self.ymin, &mut self.ymax);
        }
    }

    /// Clamp every bound into the surface, then normalize.
    pub fn clamp_to(&mut self, width: u32, height: u32) {
        self.xmin = clamp_coord(self.xmin, width);
        self.xmax = clamp_coord(self.xmax, width);
        self.ymin = clamp_coord(self.ymin, height);
        self.ymax = clamp_coord(self.ymax, height);
        self.normalize();
    }

    /// Translate the whole rectangle.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.xmin = self.xmin.saturating_add(dx);
        self.xmax = self.xmax.saturating_add(dx);
        self.ymin = self.ymin.saturating_add(dy);
        self.ymax = self.ymax.saturating_add(dy);
    }

    /// Move one edge outward by `amount` (inward when negative), then normalize.
    pub fn grow_edge(&mut self, edge: Edge, amount: i32) {
        match edge {
            Edge::Left => self.xmin = self.xmin.saturating_sub(amount),
            Edge::Right => self.xmax = self.xmax.saturating_add(amount),
            Edge::Bottom => self.ymin = self.ymin.saturating_sub(amount),
            Edge::Top => self.ymax = self.ymax.saturating_add(amount),
        }
        self.normalize();
    }
}

/// Clamp a coordinate into `[0, extent)`; a zero extent clamps to 0.
fn clamp_coord(v: i32, extent: u32) -> i32 {
    let hi = i32::try_from(extent).unwrap_or(i32::MAX).saturating_sub(1).max(0);
    v.clamp(0, hi)
}
