//! Bresenham line stepping for all eight octants.

use std::iter::FusedIterator;

use super::Brush;
use crate::geometry::Point;
use crate::surface::Surface;

/// Lazy Bresenham point sequence between two endpoints.
///
/// Walks the driving axis (the larger delta, ties go to x) one pixel per step
/// and steps the minor axis whenever the error accumulator turns
/// non-negative. Emits `max(|dx|, |dy|) + 1` points including both endpoints,
/// with no gaps and no repeats. Cloning gives an independent restart.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    cur: Point,
    end: Point,
    sx: i32,
    sy: i32,
    major: i64,
    minor: i64,
    y_major: bool,
    err: i64,
    remaining: u64,
}

impl BresenhamLine {
    /// Start a new line from `from` to `to`.
    #[must_use]
    pub fn new(from: Point, to: Point) -> Self {
        let dx = (i64::from(to.x) - i64::from(from.x)).abs();
        let dy = (i64::from(to.y) - i64::from(from.y)).abs();
        let y_major = dy > dx;
        let (major, minor) = if y_major { (dy, dx) } else { (dx, dy) };

        Self {
            cur: from,
            end: to,
            sx: if from.x < to.x { 1 } else { -1 },
            sy: if from.y < to.y { 1 } else { -1 },
            major,
            minor,
            y_major,
            err: 2 * minor - major,
            remaining: major as u64 + 1,
        }
    }

    /// Whether the line is driven along y (|dy| > |dx|).
    #[must_use]
    pub const fn is_steep(&self) -> bool {
        self.y_major
    }
}

impl Iterator for BresenhamLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let p = self.cur;

        let reached = if self.y_major {
            self.cur.y == self.end.y
        } else {
            self.cur.x == self.end.x
        };
        if reached {
            self.remaining = 0;
            return Some(p);
        }

        if self.err >= 0 {
            if self.y_major {
                self.cur.x += self.sx;
            } else {
                self.cur.y += self.sy;
            }
            self.err -= 2 * self.major;
        }
        if self.y_major {
            self.cur.y += self.sy;
        } else {
            self.cur.x += self.sx;
        }
        self.err += 2 * self.minor;

        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for BresenhamLine {}

impl FusedIterator for BresenhamLine {}

/// Bresenham points from `from` to `to`.
///
/// # Example
///
/// ```
/// use raster_demos::geometry::Point;
/// use raster_demos::raster::bresenham;
///
/// let pts: Vec<_> = bresenham(Point::new(0, 0), Point::new(5, 2))
///     .map(|p| (p.x, p.y))
///     .collect();
/// assert_eq!(pts, vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
/// ```
#[must_use]
pub fn bresenham(from: Point, to: Point) -> BresenhamLine {
    BresenhamLine::new(from, to)
}

/// Draw a line, stamping `brush` at every Bresenham point.
pub fn draw_line<S, B>(surface: &mut S, from: Point, to: Point, brush: &B)
where
    S: Surface + ?Sized,
    B: Brush + ?Sized,
{
    for p in bresenham(from, to) {
        brush.stamp(surface, p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{DiskBrush, PixelBrush};
    use crate::surface::PixelRecorder;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn collect(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
        bresenham(Point::new(x0, y0), Point::new(x1, y1))
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[test]
    fn test_shallow_first_octant() {
        assert_eq!(
            collect(0, 0, 5, 2),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]
        );
    }

    #[test]
    fn test_steep_line_is_y_driven() {
        let line = bresenham(Point::new(0, 0), Point::new(2, 5));
        assert!(line.is_steep());
        assert_eq!(
            line.map(|p| (p.x, p.y)).collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (1, 2), (1, 3), (2, 4), (2, 5)]
        );
    }

    #[test]
    fn test_diagonal_tie_goes_to_x() {
        let line = bresenham(Point::new(0, 0), Point::new(-3, 3));
        assert!(!line.is_steep());
        assert_eq!(
            line.map(|p| (p.x, p.y)).collect::<Vec<_>>(),
            vec![(0, 0), (-1, 1), (-2, 2), (-3, 3)]
        );
    }

    #[test]
    fn test_negative_directions() {
        assert_eq!(
            collect(5, 2, 0, 0),
            vec![(5, 2), (4, 2), (3, 1), (2, 1), (1, 0), (0, 0)]
        );
        assert_eq!(collect(0, 0, 0, -3), vec![(0, 0), (0, -1), (0, -2), (0, -3)]);
    }

    #[test]
    fn test_single_point() {
        assert_eq!(collect(7, -4, 7, -4), vec![(7, -4)]);
    }

    #[test]
    fn test_restartable_by_clone() {
        let line = bresenham(Point::new(-3, 8), Point::new(11, 1));
        let first: Vec<_> = line.clone().collect();
        let second: Vec<_> = line.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_exact_size() {
        let mut line = bresenham(Point::new(0, 0), Point::new(10, 4));
        assert_eq!(line.len(), 11);
        line.next();
        assert_eq!(line.len(), 10);
    }

    #[test]
    fn test_draw_line_thin_pixels() {
        let mut rec = PixelRecorder::new(100, 100);
        draw_line(&mut rec, Point::new(10, 50), Point::new(90, 50), &PixelBrush);
        assert_eq!(rec.len(), 81);
        assert!(rec.contains(Point::new(10, 50)));
        assert!(rec.contains(Point::new(90, 50)));
    }

    #[test]
    fn test_draw_line_thick_covers_band() {
        let mut rec = PixelRecorder::new(100, 100);
        draw_line(&mut rec, Point::new(10, 50), Point::new(90, 50), &DiskBrush::for_width(7));
        // Radius-3 disk swept horizontally covers rows 47..=53
        for y in 47..=53 {
            assert!(rec.contains(Point::new(50, y)), "row {y} not covered");
        }
        assert!(!rec.contains(Point::new(50, 54)));
    }

    #[test]
    fn test_draw_line_out_of_bounds_clipped() {
        let mut rec = PixelRecorder::new(100, 100);
        draw_line(&mut rec, Point::new(-10, -10), Point::new(110, 110), &PixelBrush);
        assert_eq!(rec.len(), 100);
        assert!(rec.contains(Point::new(50, 50)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn prop_count_and_endpoints(
            x0 in -300i32..300, y0 in -300i32..300,
            x1 in -300i32..300, y1 in -300i32..300,
        ) {
            let pts: Vec<Point> = bresenham(Point::new(x0, y0), Point::new(x1, y1)).collect();
            let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
            prop_assert_eq!(pts.len(), expected);
            prop_assert_eq!(pts[0], Point::new(x0, y0));
            prop_assert_eq!(*pts.last().unwrap(), Point::new(x1, y1));
        }

        #[test]
        fn prop_eight_connected_without_repeats(
            x0 in -300i32..300, y0 in -300i32..300,
            x1 in -300i32..300, y1 in -300i32..300,
        ) {
            let pts: Vec<Point> = bresenham(Point::new(x0, y0), Point::new(x1, y1)).collect();
            for w in pts.windows(2) {
                prop_assert!((w[1].x - w[0].x).abs() <= 1);
                prop_assert!((w[1].y - w[0].y).abs() <= 1);
                prop_assert!(w[0] != w[1]);
            }
            let unique: HashSet<Point> = pts.iter().copied().collect();
            prop_assert_eq!(unique.len(), pts.len());
        }
    }
}
