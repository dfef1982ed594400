//! Rasterization and clipping algorithms.
//!
//! Integer-only pixel stepping plus parametric segment clipping.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: all-octant integer line stepping
//! - **Midpoint Circle**: one-octant decision-variable stepping, expanded by symmetry
//! - **Brushes**: pixel, filled disk and filled square stamps for thickness
//! - **Liang-Barsky**: parametric clipping against an axis-aligned rectangle
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A new concept and method for line clipping."

mod brush;
mod circle;
mod clip;
mod line;

pub use brush::{Brush, DiskBrush, PixelBrush, SquareBrush};
pub use circle::{circle_points, draw_circle, symmetric_points, MidpointOctant};
pub use clip::{clip_segment, liang_barsky, Clipped, PARALLEL_EPSILON};
pub use line::{bresenham, draw_line, BresenhamLine};
