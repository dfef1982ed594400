//! The three interactive demos and their shared event model.
//!
//! Each demo is a small state machine behind the [`Demo`] trait: events come in
//! through [`Demo::dispatch`], which mutates scene state and answers with a
//! [`Response`]; [`Demo::render`] walks the state and draws into a
//! [`Surface`]. Rendering never mutates state, so redraws are idempotent.

pub mod circles;
pub mod clip;
pub mod line;

use std::fmt;

use crate::color::Rgba;
use crate::config::Config;
use crate::geometry::{Edge, Point};
use crate::surface::{Canvas, Surface};

pub use circles::CirclesDemo;
pub use clip::ClipDemo;
pub use line::LineDemo;

/// Which demo to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    /// Bresenham line with optional thickness.
    Line,
    /// Concentric midpoint circles with a color gradient.
    Circles,
    /// Liang-Barsky segment clipping.
    Clip,
}

impl DemoKind {
    /// All demos, in menu order.
    pub const ALL: [Self; 3] = [Self::Line, Self::Circles, Self::Clip];

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Circles => "circles",
            Self::Clip => "clip",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mouse button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Left button.
    Primary,
    /// Right button.
    Secondary,
}

/// Direction of a clip rectangle move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward larger y.
    Up,
    /// Toward smaller y.
    Down,
    /// Toward smaller x.
    Left,
    /// Toward larger x.
    Right,
}

impl Direction {
    /// Unit offset in bottom-left coordinates.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Named action produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// End the session.
    Quit,
    /// Flip thick-line mode.
    ToggleThickness,
    /// Widen the line.
    IncreaseWidth,
    /// Narrow the line.
    DecreaseWidth,
    /// Drop the drawn primitives.
    Clear,
    /// Replace primitives with random ones.
    Randomize,
    /// Restore default parameters.
    Reset,
    /// Add a ring.
    MoreCircles,
    /// Remove a ring.
    FewerCircles,
    /// Space rings further apart.
    IncreaseRadiusStep,
    /// Space rings closer together.
    DecreaseRadiusStep,
    /// Thicken outer rings faster.
    IncreaseThicknessStep,
    /// Thicken outer rings slower.
    DecreaseThicknessStep,
    /// Thicken the innermost ring.
    IncreaseBaseThickness,
    /// Thin the innermost ring.
    DecreaseBaseThickness,
    /// Translate the clip rectangle.
    MoveClip(Direction),
    /// Move one clip edge outward.
    GrowClip(Edge),
    /// Move one clip edge inward.
    ShrinkClip(Edge),
}

/// Input delivered to a demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Mouse click at a surface position (bottom-left origin).
    Click {
        /// Button pressed.
        button: Button,
        /// Position on the surface.
        at: Point,
    },
    /// Key press already mapped to an action.
    Key(Action),
    /// The surface changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}

/// What the front-end should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// State changed; render a new frame.
    Redraw,
    /// Nothing changed.
    Ignored,
    /// End the session.
    Quit,
}

/// An interactive rasterization demo.
pub trait Demo {
    /// Which demo this is.
    fn kind(&self) -> DemoKind;

    /// Current surface size.
    fn size(&self) -> (u32, u32);

    /// Frame clear color.
    fn background(&self) -> Rgba;

    /// One-line key binding summary.
    fn help(&self) -> &'static str;

    /// One-line description of the current parameters.
    fn status(&self) -> String;

    /// Apply an event to the scene.
    fn dispatch(&mut self, event: &Event) -> Response;

    /// Draw the scene. Does not clear the surface.
    fn render(&self, surface: &mut dyn Surface);
}

/// Build the demo `kind` from its configuration section.
#[must_use]
pub fn build(kind: DemoKind, config: &Config) -> Box<dyn Demo> {
    match kind {
        DemoKind::Line => Box::new(LineDemo::new(&config.line)),
        DemoKind::Circles => Box::new(CirclesDemo::new(&config.circles)),
        DemoKind::Clip => Box::new(ClipDemo::new(&config.clip)),
    }
}

/// Render one full frame of `demo` into `canvas`, resizing it first if needed.
///
/// # Errors
///
/// Returns an error if the demo reports a zero-sized surface.
pub fn render_frame(demo: &dyn Demo, canvas: &mut Canvas) -> crate::Result<()> {
    let (width, height) = demo.size();
    canvas.resize(width, height)?;
    canvas.begin_frame(demo.background());
    demo.render(canvas);
    canvas.end_frame();
    Ok(())
}

/// Clamp a resize request to at least one pixel per axis.
pub(crate) fn sanitize_size(width: u32, height: u32) -> (u32, u32) {
    (width.max(1), height.max(1))
}
