//! Liang-Barsky parametric line clipping.

use crate::geometry::{ClipRect, PointF, Segment};

/// Magnitude below which a direction component counts as parallel to a boundary.
pub const PARALLEL_EPSILON: f64 = 1e-9;

/// Visible part of a clipped segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clipped {
    /// Visible start point.
    pub start: PointF,
    /// Visible end point.
    pub end: PointF,
    /// Parameter where the segment enters the rectangle.
    pub u_enter: f64,
    /// Parameter where the segment leaves the rectangle.
    pub u_exit: f64,
}

impl Clipped {
    /// Whether the visible part collapsed to a single point (corner touch).
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.u_exit - self.u_enter <= f64::EPSILON
    }
}

/// Clip segment `from`-`to` against `rect`.
///
/// Tests the left, right, bottom and top boundaries in that order, narrowing
/// the visible parameter interval `[u1, u2]` from `[0, 1]`. Returns `None` as
/// soon as the interval empties or the segment runs parallel outside a
/// boundary.
///
/// # Example
///
/// ```
/// use raster_demos::geometry::{ClipRect, PointF};
/// use raster_demos::raster::liang_barsky;
///
/// let rect = ClipRect::new(0, 0, 10, 10);
/// let clipped = liang_barsky(&rect, PointF::new(-5.0, 5.0), PointF::new(15.0, 5.0)).unwrap();
/// assert_eq!(clipped.start, PointF::new(0.0, 5.0));
/// assert_eq!(clipped.end, PointF::new(10.0, 5.0));
/// ```
#[must_use]
pub fn liang_barsky(rect: &ClipRect, from: PointF, to: PointF) -> Option<Clipped> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let p = [-dx, dx, -dy, dy];
    let q = [
        from.x - f64::from(rect.xmin),
        f64::from(rect.xmax) - from.x,
        from.y - f64::from(rect.ymin),
        f64::from(rect.ymax) - from.y,
    ];

    let mut u1 = 0.0_f64;
    let mut u2 = 1.0_f64;

    for (&pi, &qi) in p.iter().zip(q.iter()) {
        if pi.abs() < PARALLEL_EPSILON {
            if qi < 0.0 {
                return None;
            }
            continue;
        }

        let r = qi / pi;
        if pi < 0.0 {
            u1 = u1.max(r);
        } else {
            u2 = u2.min(r);
        }
        if u1 > u2 {
            return None;
        }
    }

    Some(Clipped {
        start: PointF::new(from.x + u1 * dx, from.y + u1 * dy),
        end: PointF::new(from.x + u2 * dx, from.y + u2 * dy),
        u_enter: u1,
        u_exit: u2,
    })
}

/// Clip an integer segment against `rect`.
#[must_use]
pub fn clip_segment(rect: &ClipRect, segment: &Segment) -> Option<Clipped> {
    liang_barsky(rect, segment.a.to_f64(), segment.b.to_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn unit_rect() -> ClipRect {
        ClipRect::new(0, 0, 10, 10)
    }

    fn clip(x0: f64, y0: f64, x1: f64, y1: f64) -> Option<Clipped> {
        liang_barsky(&unit_rect(), PointF::new(x0, y0), PointF::new(x1, y1))
    }

    #[test]
    fn test_horizontal_crossing() {
        let c = clip(-5.0, 5.0, 15.0, 5.0).unwrap();
        assert_abs_diff_eq!(c.start.x, 0.0);
        assert_abs_diff_eq!(c.start.y, 5.0);
        assert_abs_diff_eq!(c.end.x, 10.0);
        assert_abs_diff_eq!(c.end.y, 5.0);
        assert_abs_diff_eq!(c.u_enter, 0.25);
        assert_abs_diff_eq!(c.u_exit, 0.75);
    }

    #[test]
    fn test_fully_outside_diagonal() {
        assert!(clip(20.0, 20.0, 30.0, 30.0).is_none());
    }

    #[test]
    fn test_fully_inside_unchanged() {
        let c = clip(2.0, 3.0, 8.0, 7.5).unwrap();
        assert_abs_diff_eq!(c.start.x, 2.0);
        assert_abs_diff_eq!(c.start.y, 3.0);
        assert_abs_diff_eq!(c.end.x, 8.0);
        assert_abs_diff_eq!(c.end.y, 7.5);
        assert!(!c.is_point());
    }

    #[test]
    fn test_outside_each_single_side() {
        assert!(clip(-5.0, 2.0, -1.0, 8.0).is_none(), "left");
        assert!(clip(11.0, 2.0, 15.0, 8.0).is_none(), "right");
        assert!(clip(2.0, -5.0, 8.0, -1.0).is_none(), "bottom");
        assert!(clip(2.0, 11.0, 8.0, 15.0).is_none(), "top");
    }

    #[test]
    fn test_parallel_outside() {
        // Vertical line left of the rectangle: dx == 0 and q < 0
        assert!(clip(-1.0, -5.0, -1.0, 15.0).is_none());
        // Horizontal line above
        assert!(clip(-5.0, 12.0, 15.0, 12.0).is_none());
    }

    #[test]
    fn test_parallel_on_boundary_is_visible() {
        let c = clip(0.0, -5.0, 0.0, 15.0).unwrap();
        assert_abs_diff_eq!(c.start.y, 0.0);
        assert_abs_diff_eq!(c.end.y, 10.0);
    }

    #[test]
    fn test_corner_touch_is_single_point() {
        let c = clip(-5.0, 5.0, 5.0, 15.0).unwrap();
        assert!(c.is_point());
        assert_abs_diff_eq!(c.start.x, 0.0);
        assert_abs_diff_eq!(c.start.y, 10.0);
        assert_abs_diff_eq!(c.end.x, 0.0);
        assert_abs_diff_eq!(c.end.y, 10.0);
    }

    #[test]
    fn test_corner_miss_is_empty() {
        assert!(clip(-5.0, 6.0, 4.0, 15.0).is_none());
    }

    #[test]
    fn test_reversed_direction() {
        let c = clip(15.0, 5.0, -5.0, 5.0).unwrap();
        assert_abs_diff_eq!(c.start.x, 10.0);
        assert_abs_diff_eq!(c.end.x, 0.0);
    }

    #[test]
    fn test_degenerate_point_segment() {
        assert!(clip(3.0, 3.0, 3.0, 3.0).is_some());
        assert!(clip(-3.0, 3.0, -3.0, 3.0).is_none());
    }

    #[test]
    fn test_zero_area_rect() {
        let rect = ClipRect::new(5, 0, 5, 10);
        let c = liang_barsky(&rect, PointF::new(0.0, 5.0), PointF::new(10.0, 5.0)).unwrap();
        assert!(c.is_point());
        assert_abs_diff_eq!(c.start.x, 5.0);
    }

    #[test]
    fn test_clip_integer_segment() {
        let seg = Segment::new(Point::new(-10, 0), Point::new(10, 20));
        let c = clip_segment(&unit_rect(), &seg).unwrap();
        assert_abs_diff_eq!(c.start.x, 0.0);
        assert_abs_diff_eq!(c.start.y, 10.0);
        assert!(c.is_point());
    }

    proptest! {
        #[test]
        fn prop_inside_segment_is_identity(
            x0 in 0.0f64..=10.0, y0 in 0.0f64..=10.0,
            x1 in 0.0f64..=10.0, y1 in 0.0f64..=10.0,
        ) {
            let c = clip(x0, y0, x1, y1).unwrap();
            prop_assert!((c.start.x - x0).abs() < 1e-9);
            prop_assert!((c.start.y - y0).abs() < 1e-9);
            prop_assert!((c.end.x - x1).abs() < 1e-9);
            prop_assert!((c.end.y - y1).abs() < 1e-9);
        }

        #[test]
        fn prop_result_lies_in_rect(
            x0 in -50.0f64..50.0, y0 in -50.0f64..50.0,
            x1 in -50.0f64..50.0, y1 in -50.0f64..50.0,
        ) {
            if let Some(c) = clip(x0, y0, x1, y1) {
                for p in [c.start, c.end] {
                    prop_assert!(p.x >= -1e-9 && p.x <= 10.0 + 1e-9);
                    prop_assert!(p.y >= -1e-9 && p.y <= 10.0 + 1e-9);
                }
                prop_assert!(c.u_enter <= c.u_exit);
                prop_assert!(c.u_enter >= 0.0 && c.u_exit <= 1.0);
            }
        }

        #[test]
        fn prop_clipping_is_idempotent(
            x0 in -50.0f64..50.0, y0 in -50.0f64..50.0,
            x1 in -50.0f64..50.0, y1 in -50.0f64..50.0,
        ) {
            if let Some(c) = clip(x0, y0, x1, y1) {
                let again = clip(c.start.x, c.start.y, c.end.x, c.end.y);
                prop_assert!(again.is_some());
                let again = again.unwrap();
                prop_assert!((again.start.x - c.start.x).abs() < 1e-6);
                prop_assert!((again.end.y - c.end.y).abs() < 1e-6);
            }
        }
    }
}
