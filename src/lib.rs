//! # Raster-Demos
//!
//! Classic 2D rasterization algorithms driven by small interactive demos.
//!
//! Three scenes share one surface abstraction and one event model:
//!
//! - **Line**: Bresenham line stepping in all octants, thickened with a disk brush
//! - **Circles**: concentric midpoint circles with a square brush and an HSV gradient
//! - **Clip**: Liang-Barsky segment clipping against a movable rectangle
//!
//! Frames are written to PNG, printed to the terminal, or shown live in an
//! interactive terminal session with mouse input.
//!
//! ## Quick Start
//!
//! ```rust
//! use raster_demos::prelude::*;
//!
//! let mut session = Session::new(DemoKind::Line, &Config::default())?;
//! session.handle(&Event::Key(Action::ToggleThickness))?;
//! let png = PngEncoder::to_bytes(session.frame())?;
//! assert!(!png.is_empty());
//! # Ok::<(), raster_demos::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A new concept and method for line clipping."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and color space conversions.
pub mod color;

/// Core framebuffer for pixel storage.
pub mod framebuffer;

/// Geometric primitives (points, segments, clip rectangles).
pub mod geometry;

/// Drawing surfaces (framebuffer canvas, pixel recorder).
pub mod surface;

/// Rasterization and clipping algorithms.
pub mod raster;

// ============================================================================
// Demo Modules
// ============================================================================

/// The three interactive demos and their event model.
pub mod demos;

/// Key bindings, mouse mapping and event scripts.
pub mod input;

/// Session driver and interactive terminal front-end.
pub mod app;

/// YAML configuration.
pub mod config;

// ============================================================================
// Output Modules
// ============================================================================

/// Output encoders (PNG, terminal).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster-demos operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use raster_demos::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::{ReplaySummary, Session};
    pub use crate::color::{Hsv, Rgba};
    pub use crate::config::Config;
    pub use crate::demos::{Action, Button, Demo, DemoKind, Event, Response};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{ClipRect, Edge, Point, PointF, Segment};
    pub use crate::input::{parse_script, InputHandler};
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::raster::{Brush, DiskBrush, PixelBrush, SquareBrush};
    pub use crate::surface::{Canvas, PixelRecorder, Surface};
}
