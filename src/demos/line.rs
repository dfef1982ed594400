//! Bresenham line demo.
//!
//! Click twice to place the endpoints; a third click starts over. The line is
//! drawn thin or with a disk brush of adjustable width.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{sanitize_size, Action, Button, Demo, DemoKind, Event, Response};
use crate::color::Rgba;
use crate::config::LineConfig;
use crate::geometry::Point;
use crate::raster::{draw_line, DiskBrush, PixelBrush};
use crate::surface::Surface;

/// Allowed line widths.
pub const WIDTH_RANGE: RangeInclusive<u32> = 1..=99;

/// Side of the square endpoint markers.
const MARKER_SIZE: i32 = 6;

/// Endpoint entry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    /// No endpoint placed.
    Empty,
    /// First endpoint placed.
    OnePoint(Point),
    /// Both endpoints placed; the line is visible.
    TwoPoints(Point, Point),
}

/// Scene state of the line demo.
#[derive(Debug, Clone)]
pub struct LineDemo {
    width: u32,
    height: u32,
    state: LineState,
    thick: bool,
    line_width: u32,
    rng: StdRng,
}

impl LineDemo {
    /// Create the demo with both configured endpoints already placed.
    #[must_use]
    pub fn new(config: &LineConfig) -> Self {
        let (width, height) = sanitize_size(config.width, config.height);
        Self {
            width,
            height,
            state: LineState::TwoPoints(
                Point::new(config.start[0], config.start[1]),
                Point::new(config.end[0], config.end[1]),
            ),
            thick: config.thick,
            line_width: config
                .line_width
                .clamp(*WIDTH_RANGE.start(), *WIDTH_RANGE.end()),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Current endpoint state.
    #[must_use]
    pub const fn state(&self) -> LineState {
        self.state
    }

    /// Whether thick mode is on.
    #[must_use]
    pub const fn is_thick(&self) -> bool {
        self.thick
    }

    /// Current line width.
    #[must_use]
    pub const fn line_width(&self) -> u32 {
        self.line_width
    }

    /// Width actually used for drawing: 1 in thin mode.
    #[must_use]
    pub const fn effective_width(&self) -> u32 {
        if self.thick {
            self.line_width
        } else {
            1
        }
    }

    fn click(&mut self, at: Point) {
        let at = at.clamp_to(self.width, self.height);
        self.state = match self.state {
            LineState::Empty => LineState::OnePoint(at),
            LineState::OnePoint(p1) => LineState::TwoPoints(p1, at),
            LineState::TwoPoints(..) => LineState::Empty,
        };
        log::debug!("line endpoints -> {:?}", self.state);
    }

    fn random_point(&mut self) -> Point {
        let w = i32::try_from(self.width).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height).unwrap_or(i32::MAX);
        Point::new(self.rng.gen_range(0..w), self.rng.gen_range(0..h))
    }

    fn apply(&mut self, action: Action) -> Response {
        match action {
            Action::Quit => return Response::Quit,
            Action::ToggleThickness => self.thick = !self.thick,
            Action::IncreaseWidth => {
                self.line_width = (self.line_width + 1).min(*WIDTH_RANGE.end());
            }
            Action::DecreaseWidth => {
                self.line_width = self.line_width.saturating_sub(1).max(*WIDTH_RANGE.start());
            }
            Action::Clear => self.state = LineState::Empty,
            Action::Randomize => {
                let p1 = self.random_point();
                let p2 = self.random_point();
                self.state = LineState::TwoPoints(p1, p2);
            }
            _ => return Response::Ignored,
        }
        log::debug!("line {action:?}: {}", self.status());
        Response::Redraw
    }

    fn draw_axes(&self, surface: &mut dyn Surface) {
        let w = self.width as i32;
        let h = self.height as i32;
        surface.set_color(Rgba::from_unit(0.15, 0.15, 0.16));
        surface.fill_span(0, w - 1, h / 2);
        surface.fill_rect(w / 2, 0, w / 2, h - 1);
    }
}

impl Demo for LineDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Line
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn background(&self) -> Rgba {
        Rgba::from_unit(0.05, 0.06, 0.08)
    }

    fn help(&self) -> &'static str {
        "Left-click: set P1, P2 | T: thick on/off | +/-: width | C: clear | R: random | Esc: quit"
    }

    fn status(&self) -> String {
        format!(
            "W={} ({})",
            self.line_width,
            if self.thick { "Thick" } else { "Thin" }
        )
    }

    fn dispatch(&mut self, event: &Event) -> Response {
        match *event {
            Event::Click {
                button: Button::Primary,
                at,
            } => {
                self.click(at);
                Response::Redraw
            }
            Event::Click { .. } => Response::Ignored,
            Event::Key(action) => self.apply(action),
            Event::Resize { width, height } => {
                (self.width, self.height) = sanitize_size(width, height);
                Response::Redraw
            }
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        self.draw_axes(surface);

        let LineState::TwoPoints(p1, p2) = self.state else {
            return;
        };

        surface.set_color(Rgba::WHITE);
        let w = self.effective_width();
        if w <= 1 {
            draw_line(surface, p1, p2, &PixelBrush);
        } else {
            draw_line(surface, p1, p2, &DiskBrush::for_width(w));
        }

        surface.set_color(Rgba::from_unit(0.2, 0.8, 1.0));
        let half = MARKER_SIZE / 2;
        for p in [p1, p2] {
            surface.fill_rect(p.x - half, p.y - half, p.x + half - 1, p.y + half - 1);
        }
    }
}
