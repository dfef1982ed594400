//! Midpoint circle stepping.

use std::iter::FusedIterator;

use super::Brush;
use crate::geometry::Point;
use crate::surface::Surface;

/// Lazy octant of a midpoint circle, as offsets from the center.
///
/// Starts at `(0, r)` with decision `d = 1 - r` and walks x upward until
/// `x >= y`, stepping y down on "outside" decisions. The last offset may sit
/// one step past the 45° diagonal; symmetric expansion covers it either way.
#[derive(Debug, Clone)]
pub struct MidpointOctant {
    x: i32,
    y: i32,
    d: i64,
    done: bool,
}

impl MidpointOctant {
    /// Start the octant for `radius`.
    #[must_use]
    pub fn new(radius: u32) -> Self {
        let r = i32::try_from(radius).unwrap_or(i32::MAX);
        Self {
            x: 0,
            y: r,
            d: 1 - i64::from(r),
            done: false,
        }
    }
}

impl Iterator for MidpointOctant {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let p = Point::new(self.x, self.y);

        if self.x >= self.y {
            self.done = true;
        } else {
            self.x += 1;
            if self.d < 0 {
                self.d += 2 * i64::from(self.x) + 1;
            } else {
                self.y -= 1;
                self.d += 2 * i64::from(self.x - self.y) + 1;
            }
        }

        Some(p)
    }
}

impl FusedIterator for MidpointOctant {}

/// The eight reflections of octant offset `o` around `center`.
///
/// Axis and diagonal offsets produce repeated points; callers overdraw them.
#[must_use]
pub fn symmetric_points(center: Point, o: Point) -> [Point; 8] {
    let Point { x: cx, y: cy } = center;
    let Point { x, y } = o;
    [
        Point::new(cx + x, cy + y),
        Point::new(cx - x, cy + y),
        Point::new(cx + x, cy - y),
        Point::new(cx - x, cy - y),
        Point::new(cx + y, cy + x),
        Point::new(cx - y, cy + x),
        Point::new(cx + y, cy - x),
        Point::new(cx - y, cy - x),
    ]
}

/// All boundary points of a circle, eight per octant step.
///
/// # Example
///
/// ```
/// use raster_demos::geometry::Point;
/// use raster_demos::raster::circle_points;
///
/// let ring: Vec<Point> = circle_points(Point::new(0, 0), 5).collect();
/// assert!(ring.contains(&Point::new(3, 4)));
/// assert!(ring.contains(&Point::new(-5, 0)));
/// ```
pub fn circle_points(center: Point, radius: u32) -> impl Iterator<Item = Point> + Clone {
    MidpointOctant::new(radius).flat_map(move |o| symmetric_points(center, o))
}

/// Draw a circle outline, stamping `brush` at every boundary point.
pub fn draw_circle<S, B>(surface: &mut S, center: Point, radius: u32, brush: &B)
where
    S: Surface + ?Sized,
    B: Brush + ?Sized,
{
    for p in circle_points(center, radius) {
        brush.stamp(surface, p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{PixelBrush, SquareBrush};
    use crate::surface::PixelRecorder;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn octant(r: u32) -> Vec<(i32, i32)> {
        MidpointOctant::new(r).map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_radius_five_octant() {
        assert_eq!(octant(5), vec![(0, 5), (1, 5), (2, 5), (3, 4), (4, 3)]);
    }

    #[test]
    fn test_radius_five_expansion_contains_reference_points() {
        let ring: HashSet<Point> = circle_points(Point::ORIGIN, 5).collect();
        for (x, y) in [(0, 5), (1, 5), (2, 5), (3, 4), (4, 3), (5, 0)] {
            assert!(ring.contains(&Point::new(x, y)), "missing ({x}, {y})");
        }
    }

    #[test]
    fn test_radius_zero_is_center() {
        assert_eq!(octant(0), vec![(0, 0)]);
        let ring: HashSet<Point> = circle_points(Point::new(4, 7), 0).collect();
        assert_eq!(ring.len(), 1);
        assert!(ring.contains(&Point::new(4, 7)));
    }

    #[test]
    fn test_radius_one() {
        assert_eq!(octant(1), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_overdraw_is_kept() {
        // Axis points of the first step repeat under symmetry
        let all: Vec<Point> = circle_points(Point::ORIGIN, 5).collect();
        let unique: HashSet<Point> = all.iter().copied().collect();
        assert_eq!(all.len(), 5 * 8);
        assert!(unique.len() < all.len());
    }

    #[test]
    fn test_draw_circle_outline() {
        let mut rec = PixelRecorder::new(100, 100);
        draw_circle(&mut rec, Point::new(50, 50), 20, &PixelBrush);
        assert!(rec.contains(Point::new(70, 50)));
        assert!(rec.contains(Point::new(50, 30)));
        assert!(!rec.contains(Point::new(50, 50)));
    }

    #[test]
    fn test_draw_circle_thick_ring() {
        let mut rec = PixelRecorder::new(100, 100);
        draw_circle(&mut rec, Point::new(50, 50), 20, &SquareBrush::for_width(5));
        // Square brush of radius 2 widens the ring to 18..=22 on the x axis
        for x in 68..=72 {
            assert!(rec.contains(Point::new(x, 50)), "x={x} not covered");
        }
        assert!(!rec.contains(Point::new(67, 50)));
        assert!(!rec.contains(Point::new(50, 50)));
    }

    #[test]
    fn test_draw_circle_partially_off_surface() {
        let mut rec = PixelRecorder::new(10, 10);
        draw_circle(&mut rec, Point::new(0, 0), 5, &PixelBrush);
        assert!(rec.contains(Point::new(5, 0)));
        assert!(rec.contains(Point::new(3, 4)));
        assert!(rec.points().all(|p| p.x >= 0 && p.y >= 0));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn prop_octant_near_circle_and_monotone(r in 0u32..2000) {
            let pts: Vec<Point> = MidpointOctant::new(r).collect();
            let r2 = i64::from(r) * i64::from(r);
            for p in &pts {
                let d2 = i64::from(p.x) * i64::from(p.x) + i64::from(p.y) * i64::from(p.y);
                prop_assert!((d2 - r2).abs() <= i64::from(r), "{:?} off by {}", p, d2 - r2);
            }
            for w in pts.windows(2) {
                prop_assert!(w[1].x >= w[0].x);
                prop_assert!(w[1].y <= w[0].y);
            }
        }

        #[test]
        fn prop_expansion_is_symmetric(r in 0u32..300) {
            let ring: HashSet<Point> = circle_points(Point::ORIGIN, r).collect();
            for p in &ring {
                prop_assert!(ring.contains(&Point::new(-p.x, p.y)));
                prop_assert!(ring.contains(&Point::new(p.x, -p.y)));
                prop_assert!(ring.contains(&Point::new(p.y, p.x)));
            }
        }
    }
}
