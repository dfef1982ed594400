//! Concentric midpoint circles with an HSV gradient.
//!
//! Ring `i` has radius `base_radius + i * radius_step` and thickness
//! `max(1, base_thickness + i * thickness_step)`, drawn with a square brush.

use std::ops::RangeInclusive;

use super::{sanitize_size, Action, Demo, DemoKind, Event, Response};
use crate::color::{ring_color, Rgba};
use crate::config::CirclesConfig;
use crate::geometry::Point;
use crate::raster::{draw_circle, SquareBrush};
use crate::surface::Surface;

/// Allowed ring counts.
pub const COUNT_RANGE: RangeInclusive<u32> = 1..=200;
/// Allowed radius increments.
pub const RADIUS_STEP_RANGE: RangeInclusive<u32> = 1..=50;
/// Allowed innermost ring thicknesses.
pub const BASE_THICKNESS_RANGE: RangeInclusive<u32> = 1..=30;
/// Allowed thickness increments.
pub const THICKNESS_STEP_RANGE: RangeInclusive<u32> = 0..=10;

/// One derived ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    /// Outline radius in pixels.
    pub radius: u32,
    /// Brush thickness in pixels.
    pub thickness: u32,
}

/// Counters the rings are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingParams {
    /// Number of rings.
    pub count: u32,
    /// Radius of ring 0.
    pub base_radius: u32,
    /// Radius increment per ring.
    pub radius_step: u32,
    /// Thickness of ring 0.
    pub base_thickness: u32,
    /// Thickness increment per ring.
    pub thickness_step: u32,
}

impl RingParams {
    /// Params from a config section, clamped into their bounds.
    #[must_use]
    pub fn from_config(config: &CirclesConfig) -> Self {
        Self {
            count: clamp(config.count, &COUNT_RANGE),
            base_radius: config.base_radius,
            radius_step: clamp(config.radius_step, &RADIUS_STEP_RANGE),
            base_thickness: clamp(config.base_thickness, &BASE_THICKNESS_RANGE),
            thickness_step: clamp(config.thickness_step, &THICKNESS_STEP_RANGE),
        }
    }

    /// Ring `i`.
    #[must_use]
    pub fn ring(&self, i: u32) -> Ring {
        Ring {
            radius: self
                .base_radius
                .saturating_add(i.saturating_mul(self.radius_step)),
            thickness: self
                .base_thickness
                .saturating_add(i.saturating_mul(self.thickness_step))
                .max(1),
        }
    }

    /// All rings, innermost first.
    pub fn rings(&self) -> impl Iterator<Item = Ring> + '_ {
        (0..self.count).map(|i| self.ring(i))
    }
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

fn step(value: &mut u32, range: &RangeInclusive<u32>, up: bool) {
    *value = if up {
        value.saturating_add(1)
    } else {
        value.saturating_sub(1)
    };
    *value = clamp(*value, range);
}

/// Scene state of the circles demo.
#[derive(Debug, Clone)]
pub struct CirclesDemo {
    width: u32,
    height: u32,
    params: RingParams,
    defaults: RingParams,
}

impl CirclesDemo {
    /// Create the demo from its config section.
    #[must_use]
    pub fn new(config: &CirclesConfig) -> Self {
        let (width, height) = sanitize_size(config.width, config.height);
        let params = RingParams::from_config(config);
        Self {
            width,
            height,
            params,
            defaults: params,
        }
    }

    /// Current ring parameters.
    #[must_use]
    pub const fn params(&self) -> &RingParams {
        &self.params
    }

    /// Center shared by all rings.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    fn apply(&mut self, action: Action) -> Response {
        let p = &mut self.params;
        match action {
            Action::Quit => return Response::Quit,
            Action::MoreCircles => step(&mut p.count, &COUNT_RANGE, true),
            Action::FewerCircles => step(&mut p.count, &COUNT_RANGE, false),
            Action::IncreaseRadiusStep => step(&mut p.radius_step, &RADIUS_STEP_RANGE, true),
            Action::DecreaseRadiusStep => step(&mut p.radius_step, &RADIUS_STEP_RANGE, false),
            Action::IncreaseThicknessStep => {
                step(&mut p.thickness_step, &THICKNESS_STEP_RANGE, true);
            }
            Action::DecreaseThicknessStep => {
                step(&mut p.thickness_step, &THICKNESS_STEP_RANGE, false);
            }
            Action::IncreaseBaseThickness => {
                step(&mut p.base_thickness, &BASE_THICKNESS_RANGE, true);
            }
            Action::DecreaseBaseThickness => {
                step(&mut p.base_thickness, &BASE_THICKNESS_RANGE, false);
            }
            Action::Reset => *p = self.defaults,
            _ => return Response::Ignored,
        }
        log::debug!("circles {action:?}: {}", self.status());
        Response::Redraw
    }
}

impl Demo for CirclesDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Circles
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn background(&self) -> Rgba {
        Rgba::from_unit(0.06, 0.07, 0.10)
    }

    fn help(&self) -> &'static str {
        "+/-: count | ./,: radius step | ]/[: thickness step | }/{: base thickness | R: reset | Esc: quit"
    }

    fn status(&self) -> String {
        let p = &self.params;
        format!(
            "N={} radiusStep={} baseThick={} thickStep={}",
            p.count, p.radius_step, p.base_thickness, p.thickness_step
        )
    }

    fn dispatch(&mut self, event: &Event) -> Response {
        match *event {
            Event::Click { .. } => Response::Ignored,
            Event::Key(action) => self.apply(action),
            Event::Resize { width, height } => {
                (self.width, self.height) = sanitize_size(width, height);
                Response::Redraw
            }
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        let center = self.center();
        let count = self.params.count as usize;
        for (i, ring) in self.params.rings().enumerate() {
            surface.set_color(ring_color(i, count));
            draw_circle(
                surface,
                center,
                ring.radius,
                &SquareBrush::for_width(ring.thickness),
            );
        }
    }
}
