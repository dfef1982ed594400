//! Session driver and the interactive terminal front-end.
//!
//! A [`Session`] owns one demo and the canvas it renders into. Events are fed
//! either from a parsed script ([`Session::replay`]) or live from the terminal
//! ([`run_interactive`]); both go through [`Session::handle`].

use std::io::{self, stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, KeyEventKind};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::config::Config;
use crate::demos::{self, Demo, DemoKind, Event, Response};
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::input::InputHandler;
use crate::output::{TerminalEncoder, TerminalMode, Viewport};
use crate::surface::Canvas;

/// Counters from replaying a batch of events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Events dispatched (including the quitting one).
    pub events: usize,
    /// Events that caused a redraw.
    pub redraws: usize,
    /// Events the demo ignored.
    pub ignored: usize,
    /// Whether a quit event ended the replay early.
    pub quit: bool,
}

/// One running demo and its canvas.
pub struct Session {
    demo: Box<dyn Demo>,
    canvas: Canvas,
    input: InputHandler,
    finished: bool,
}

impl Session {
    /// Build demo `kind` from `config` and render its first frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be created.
    pub fn new(kind: DemoKind, config: &Config) -> Result<Self> {
        let demo = demos::build(kind, config);
        let (width, height) = demo.size();
        let mut session = Self {
            canvas: Canvas::new(width, height)?,
            demo,
            input: InputHandler::new(kind),
            finished: false,
        };
        session.redraw()?;
        log::info!("{kind} demo ready at {width}x{height}");
        Ok(session)
    }

    /// The running demo.
    #[must_use]
    pub fn demo(&self) -> &dyn Demo {
        self.demo.as_ref()
    }

    /// Key bindings for the running demo.
    #[must_use]
    pub const fn input(&self) -> &InputHandler {
        &self.input
    }

    /// The canvas holding the last frame.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The last rendered frame.
    #[must_use]
    pub fn frame(&self) -> &Framebuffer {
        self.canvas.present()
    }

    /// Whether a quit event was received.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Dispatch one event, redrawing if the demo asks for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the redraw fails.
    pub fn handle(&mut self, event: &Event) -> Result<Response> {
        let response = self.demo.dispatch(event);
        match response {
            Response::Redraw => self.redraw()?,
            Response::Quit => {
                log::info!("{} demo quit", self.demo.kind());
                self.finished = true;
            }
            Response::Ignored => log::trace!("ignored {event:?}"),
        }
        Ok(response)
    }

    /// Render a fresh frame of the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be resized.
    pub fn redraw(&mut self) -> Result<()> {
        demos::render_frame(self.demo.as_ref(), &mut self.canvas)
    }

    /// Dispatch `events` in order, stopping after a quit.
    ///
    /// # Errors
    ///
    /// Returns an error if a redraw fails.
    pub fn replay(&mut self, events: &[Event]) -> Result<ReplaySummary> {
        let mut summary = ReplaySummary::default();
        for event in events {
            summary.events += 1;
            match self.handle(event)? {
                Response::Redraw => summary.redraws += 1,
                Response::Ignored => summary.ignored += 1,
                Response::Quit => {
                    summary.quit = true;
                    break;
                }
            }
        }
        log::info!(
            "replayed {} events ({} redraws, {} ignored)",
            summary.events,
            summary.redraws,
            summary.ignored
        );
        Ok(summary)
    }

    /// Demo name, parameters and key help on one line.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "[{}] {} | {}",
            self.demo.kind(),
            self.demo.status(),
            self.demo.help()
        )
    }
}

/// Pick an encoder that fits `fb` into a `cols` x `rows` terminal, keeping one
/// row for the status line.
#[must_use]
pub fn fit_to_terminal(mode: TerminalMode, fb: &Framebuffer, cols: u16, rows: u16) -> TerminalEncoder {
    let cols = u32::from(cols).max(1);
    let rows = u32::from(rows).saturating_sub(1).max(1);
    let encoder = TerminalEncoder::new().mode(mode).line_ending("\r\n");
    let by_width = Viewport::fit(fb.width(), fb.height(), Some(cols), None, mode);
    if by_width.rows <= rows {
        encoder.width(cols)
    } else {
        encoder.height(rows)
    }
}

/// Run `session` interactively until the demo quits.
///
/// Enters raw mode on the alternate screen with mouse capture, and always
/// restores the terminal before returning.
///
/// # Errors
///
/// Returns an error if terminal I/O or rendering fails.
pub fn run_interactive(session: &mut Session, mode: TerminalMode) -> Result<()> {
    enable_raw_mode()?;
    let guard = RestoreGuard::new(restore_terminal);
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let result = event_loop(session, mode);
    let restored = guard.finish();

    result?;
    restored?;
    Ok(())
}

/// Leave the alternate screen and raw mode, attempting both steps.
fn restore_terminal() -> io::Result<()> {
    let screen = execute!(stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
    let raw = disable_raw_mode();
    screen.and(raw)
}

/// Runs a restore action exactly once: on [`RestoreGuard::finish`], or on
/// drop when an early return skips it.
struct RestoreGuard<F: FnMut() -> io::Result<()>> {
    restore: Option<F>,
}

impl<F: FnMut() -> io::Result<()>> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    fn finish(mut self) -> io::Result<()> {
        self.restore.take().map_or(Ok(()), |mut restore| restore())
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            if let Err(e) = restore() {
                log::warn!("failed to restore terminal: {e}");
            }
        }
    }
}

fn event_loop(session: &mut Session, mode: TerminalMode) -> Result<()> {
    let poll_timeout = Duration::from_millis(100);
    let mut out = io::BufWriter::new(stdout());
    let mut dirty = true;
    let mut viewport = None;

    while !session.is_finished() {
        if dirty {
            let (cols, rows) = terminal::size()?;
            let encoder = fit_to_terminal(mode, session.frame(), cols, rows);
            viewport = Some(encoder.viewport(session.frame()));

            queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
            out.write_all(encoder.render(session.frame()).as_bytes())?;
            let status: String = session.status_line().chars().take(usize::from(cols)).collect();
            out.write_all(status.as_bytes())?;
            out.flush()?;
            dirty = false;
        }

        if !event::poll(poll_timeout)? {
            continue;
        }
        let demo_event = match event::read()? {
            event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                session.input().handle_key(key).map(Event::Key)
            }
            event::Event::Mouse(mouse) => viewport
                .as_ref()
                .and_then(|vp| session.input().handle_mouse(mouse, vp)),
            event::Event::Resize(..) => {
                dirty = true;
                None
            }
            _ => None,
        };

        if let Some(demo_event) = demo_event {
            if session.handle(&demo_event)? == Response::Redraw {
                dirty = true;
            }
        }
    }

    Ok(())
}
