//! Brushes that thicken a single algorithmic point into a pixel footprint.

use super::MidpointOctant;
use crate::geometry::Point;
use crate::surface::Surface;

/// A stamp applied at every point a rasterizer emits.
///
/// Brushes clip against the surface through the surface's own bounds checks,
/// so a stamp hanging off an edge is partially drawn.
pub trait Brush {
    /// Stamp the brush centered on `at`.
    fn stamp<S: Surface + ?Sized>(&self, surface: &mut S, at: Point);
}

/// One pixel per point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelBrush;

impl Brush for PixelBrush {
    fn stamp<S: Surface + ?Sized>(&self, surface: &mut S, at: Point) {
        surface.put_pixel(at.x, at.y);
    }
}

/// Filled disk built from midpoint-circle spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskBrush {
    radius: u32,
}

impl DiskBrush {
    /// Disk of the given radius.
    #[must_use]
    pub const fn new(radius: u32) -> Self {
        Self { radius }
    }

    /// Disk for a line of width `w`: radius `w / 2`.
    #[must_use]
    pub const fn for_width(w: u32) -> Self {
        Self::new(w / 2)
    }

    /// Brush radius in pixels.
    #[must_use]
    pub const fn radius(&self) -> u32 {
        self.radius
    }
}

impl Brush for DiskBrush {
    fn stamp<S: Surface + ?Sized>(&self, surface: &mut S, at: Point) {
        if self.radius == 0 {
            surface.put_pixel(at.x, at.y);
            return;
        }
        let Point { x: cx, y: cy } = at;
        // Rows revisited through symmetry just refill the same span
        for Point { x, y } in MidpointOctant::new(self.radius) {
            surface.fill_span(cx.saturating_sub(x), cx.saturating_add(x), cy.saturating_add(y));
            surface.fill_span(cx.saturating_sub(x), cx.saturating_add(x), cy.saturating_sub(y));
            surface.fill_span(cx.saturating_sub(y), cx.saturating_add(y), cy.saturating_add(x));
            surface.fill_span(cx.saturating_sub(y), cx.saturating_add(y), cy.saturating_sub(x));
        }
    }
}

/// Filled axis-aligned square of side `2r + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareBrush {
    radius: u32,
}

impl SquareBrush {
    /// Square with the given half-side.
    #[must_use]
    pub const fn new(radius: u32) -> Self {
        Self { radius }
    }

    /// Square for a ring of thickness `w`: radius `max(0, (w - 1) / 2)`.
    #[must_use]
    pub const fn for_width(w: u32) -> Self {
        Self::new(w.saturating_sub(1) / 2)
    }

    /// Half-side in pixels.
    #[must_use]
    pub const fn radius(&self) -> u32 {
        self.radius
    }
}

impl Brush for SquareBrush {
    fn stamp<S: Surface + ?Sized>(&self, surface: &mut S, at: Point) {
        let r = i32::try_from(self.radius).unwrap_or(i32::MAX);
        surface.fill_rect(
            at.x.saturating_sub(r),
            at.y.saturating_sub(r),
            at.x.saturating_add(r),
            at.y.saturating_add(r),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelRecorder;

    #[test]
    fn test_pixel_brush() {
        let mut rec = PixelRecorder::new(10, 10);
        PixelBrush.stamp(&mut rec, Point::new(3, 3));
        assert_eq!(rec.len(), 1);
    }

    #[test]
    fn test_disk_radius_from_width() {
        assert_eq!(DiskBrush::for_width(7).radius(), 3);
        assert_eq!(DiskBrush::for_width(2).radius(), 1);
        assert_eq!(DiskBrush::for_width(1).radius(), 0);
    }

    #[test]
    fn test_square_radius_from_width() {
        assert_eq!(SquareBrush::for_width(0).radius(), 0);
        assert_eq!(SquareBrush::for_width(1).radius(), 0);
        assert_eq!(SquareBrush::for_width(2).radius(), 0);
        assert_eq!(SquareBrush::for_width(5).radius(), 2);
        assert_eq!(SquareBrush::for_width(6).radius(), 2);
    }

    #[test]
    fn test_disk_radius_one_is_plus_shape() {
        let mut rec = PixelRecorder::new(10, 10);
        DiskBrush::new(1).stamp(&mut rec, Point::new(5, 5));
        let got: Vec<Point> = rec.points().collect();
        assert_eq!(
            got,
            vec![
                Point::new(4, 5),
                Point::new(5, 4),
                Point::new(5, 5),
                Point::new(5, 6),
                Point::new(6, 5),
            ]
        );
    }

    #[test]
    fn test_disk_radius_three_footprint() {
        let mut rec = PixelRecorder::new(20, 20);
        DiskBrush::new(3).stamp(&mut rec, Point::new(10, 10));
        assert_eq!(rec.len(), 37);
        assert!(rec.contains(Point::new(13, 11)));
        assert!(rec.contains(Point::new(12, 12)));
        assert!(!rec.contains(Point::new(13, 12)));
    }

    #[test]
    fn test_disk_is_solid() {
        let mut rec = PixelRecorder::new(64, 64);
        DiskBrush::new(12).stamp(&mut rec, Point::new(32, 32));
        // Every row of the disk is one contiguous span
        for y in 20..=44 {
            let xs: Vec<i32> = rec.points().filter(|p| p.y == y).map(|p| p.x).collect();
            assert!(!xs.is_empty(), "row {y} empty");
            let span = xs[xs.len() - 1] - xs[0] + 1;
            assert_eq!(span as usize, xs.len(), "row {y} has gaps");
        }
    }

    #[test]
    fn test_square_brush_footprint() {
        let mut rec = PixelRecorder::new(20, 20);
        SquareBrush::new(2).stamp(&mut rec, Point::new(10, 10));
        assert_eq!(rec.len(), 25);
        assert!(rec.contains(Point::new(8, 12)));
        assert!(!rec.contains(Point::new(7, 10)));
    }

    #[test]
    fn test_stamps_clip_at_edges() {
        let mut rec = PixelRecorder::new(20, 20);
        SquareBrush::new(2).stamp(&mut rec, Point::new(0, 0));
        assert_eq!(rec.len(), 9);

        rec.clear();
        DiskBrush::new(3).stamp(&mut rec, Point::new(19, 19));
        assert!(rec.len() < 37);
        assert!(rec.contains(Point::new(19, 19)));
        assert!(rec.contains(Point::new(16, 19)));
    }
}
