//! Liang-Barsky clipping demo.
//!
//! Left-click stages a point, right-click commits a segment from the staged
//! point. Every segment is drawn in grey, with its visible part inside the clip
//! rectangle overdrawn in cyan.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{sanitize_size, Action, Button, Demo, DemoKind, Event, Response};
use crate::color::Rgba;
use crate::config::ClipConfig;
use crate::geometry::{ClipRect, Point, PointF, Segment};
use crate::raster::{clip_segment, Clipped};
use crate::surface::Surface;

/// Upper bound on segments produced by one randomize action.
pub const MAX_RANDOM_SEGMENTS: usize = 10_000;
/// Allowed move and resize steps, in pixels.
pub const STEP_RANGE: RangeInclusive<i32> = 1..=1000;

const RECT_COLOR: Rgba = Rgba::rgb(255, 210, 60);
const SEGMENT_COLOR: Rgba = Rgba::rgb(140, 140, 150);
const CLIPPED_COLOR: Rgba = Rgba::rgb(90, 240, 255);

/// The ten segments the demo starts with.
#[must_use]
pub fn seed_segments() -> Vec<Segment> {
    (0..10)
        .map(|i| {
            let odd = i % 2 == 1;
            Segment::from_coords(
                30 + 80 * i,
                20 + if odd { 480 } else { 80 },
                850 - 60 * i,
                550 - if odd { 450 } else { 120 },
            )
        })
        .collect()
}

/// Scene state of the clipping demo.
#[derive(Debug, Clone)]
pub struct ClipDemo {
    width: u32,
    height: u32,
    rect: ClipRect,
    segments: Vec<Segment>,
    pending: Option<Point>,
    move_step: i32,
    resize_step: i32,
    random_segments: usize,
    rng: StdRng,
}

impl ClipDemo {
    /// Create the demo with the seeded segments and the configured rectangle.
    #[must_use]
    pub fn new(config: &ClipConfig) -> Self {
        let (width, height) = sanitize_size(config.width, config.height);
        let [xmin, ymin, xmax, ymax] = config.rect;
        let mut rect = ClipRect::new(xmin, ymin, xmax, ymax);
        rect.clamp_to(width, height);

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            width,
            height,
            rect,
            segments: seed_segments(),
            pending: None,
            move_step: config.move_step.clamp(*STEP_RANGE.start(), *STEP_RANGE.end()),
            resize_step: config.resize_step.clamp(*STEP_RANGE.start(), *STEP_RANGE.end()),
            random_segments: config.random_segments.min(MAX_RANDOM_SEGMENTS),
            rng,
        }
    }

    /// Current clip rectangle.
    #[must_use]
    pub const fn rect(&self) -> ClipRect {
        self.rect
    }

    /// Committed segments, oldest first.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Staged first point of the next segment.
    #[must_use]
    pub const fn pending(&self) -> Option<Point> {
        self.pending
    }

    /// Visible part of every segment that intersects the rectangle.
    pub fn visible(&self) -> impl Iterator<Item = Clipped> + '_ {
        self.segments
            .iter()
            .filter_map(|s| clip_segment(&self.rect, s))
    }

    fn click(&mut self, button: Button, at: Point) -> Response {
        let at = at.clamp_to(self.width, self.height);
        match button {
            Button::Primary => {
                self.pending = Some(at);
                Response::Redraw
            }
            Button::Secondary => match self.pending.take() {
                Some(a) => {
                    self.segments.push(Segment::new(a, at));
                    log::debug!("segment {} committed", self.segments.len());
                    Response::Redraw
                }
                None => Response::Ignored,
            },
        }
    }

    fn random_segment(&mut self) -> Segment {
        let w = i32::try_from(self.width).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height).unwrap_or(i32::MAX);
        Segment::from_coords(
            self.rng.gen_range(0..w),
            self.rng.gen_range(0..h),
            self.rng.gen_range(0..w),
            self.rng.gen_range(0..h),
        )
    }

    fn apply(&mut self, action: Action) -> Response {
        match action {
            Action::Quit => return Response::Quit,
            Action::MoveClip(dir) => {
                let (dx, dy) = dir.delta();
                self.rect
                    .translate(dx.saturating_mul(self.move_step), dy.saturating_mul(self.move_step));
            }
            Action::GrowClip(edge) => self.rect.grow_edge(edge, self.resize_step),
            Action::ShrinkClip(edge) => self.rect.grow_edge(edge, -self.resize_step),
            Action::Randomize => {
                let fresh: Vec<Segment> = (0..self.random_segments)
                    .map(|_| self.random_segment())
                    .collect();
                self.segments = fresh;
            }
            Action::Clear => {
                self.segments.clear();
                self.pending = None;
            }
            _ => return Response::Ignored,
        }
        self.rect.clamp_to(self.width, self.height);
        log::debug!("clip {action:?}: {}", self.status());
        Response::Redraw
    }
}

impl Demo for ClipDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Clip
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn background(&self) -> Rgba {
        Rgba::from_unit(0.07, 0.08, 0.11)
    }

    fn help(&self) -> &'static str {
        "LMB: P1 | RMB: P2 (commit) | WASD: move | Arrows: grow | Shift+Arrows: shrink | R: random | C: clear | Esc: quit"
    }

    fn status(&self) -> String {
        let r = &self.rect;
        format!(
            "rect=({},{})-({},{}) segments={}",
            r.xmin,
            r.ymin,
            r.xmax,
            r.ymax,
            self.segments.len()
        )
    }

    fn dispatch(&mut self, event: &Event) -> Response {
        match *event {
            Event::Click { button, at } => self.click(button, at),
            Event::Key(action) => self.apply(action),
            Event::Resize { width, height } => {
                (self.width, self.height) = sanitize_size(width, height);
                self.rect.clamp_to(self.width, self.height);
                Response::Redraw
            }
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        let r = &self.rect;
        let corners = [
            PointF::new(f64::from(r.xmin), f64::from(r.ymin)),
            PointF::new(f64::from(r.xmax), f64::from(r.ymin)),
            PointF::new(f64::from(r.xmax), f64::from(r.ymax)),
            PointF::new(f64::from(r.xmin), f64::from(r.ymax)),
        ];
        surface.set_color(RECT_COLOR);
        for i in 0..corners.len() {
            surface.line_segment(corners[i], corners[(i + 1) % corners.len()], 2);
        }

        surface.set_color(SEGMENT_COLOR);
        for s in &self.segments {
            surface.line_segment(s.a.to_f64(), s.b.to_f64(), 1);
        }

        surface.set_color(CLIPPED_COLOR);
        for c in self.visible() {
            surface.line_segment(c.start, c.end, 2);
        }
    }
}
