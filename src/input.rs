//! Input handling: key bindings, mouse mapping and event scripts.
//!
//! Terminal key and mouse events are translated into demo [`Event`]s here, so
//! the demos never see crossterm types. Event scripts use the same bindings:
//! `key r` in a script does exactly what pressing `r` does.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::demos::{Action, Button, DemoKind, Direction, Event};
use crate::error::{Error, Result};
use crate::geometry::{Edge, Point};
use crate::output::Viewport;

/// Per-demo key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHandler {
    kind: DemoKind,
}

impl InputHandler {
    /// Creates the input handler for one demo.
    #[must_use]
    pub const fn new(kind: DemoKind) -> Self {
        Self { kind }
    }

    /// Demo whose bindings are active.
    #[must_use]
    pub const fn kind(&self) -> DemoKind {
        self.kind
    }

    /// Handles a key event and returns the bound action, if any.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> Option<Action> {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'C') => Some(Action::Quit),
                _ => None,
            };
        }

        match event.code {
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => return Some(Action::Quit),
            _ => {}
        }

        match self.kind {
            DemoKind::Line => Self::line_key(event.code),
            DemoKind::Circles => Self::circles_key(event.code),
            DemoKind::Clip => Self::clip_key(event.code, event.modifiers),
        }
    }

    fn line_key(code: KeyCode) -> Option<Action> {
        match code {
            KeyCode::Char('t' | 'T') => Some(Action::ToggleThickness),
            KeyCode::Char('+' | '=') => Some(Action::IncreaseWidth),
            KeyCode::Char('-' | '_') => Some(Action::DecreaseWidth),
            KeyCode::Char('c' | 'C') => Some(Action::Clear),
            KeyCode::Char('r' | 'R') => Some(Action::Randomize),
            _ => None,
        }
    }

    fn circles_key(code: KeyCode) -> Option<Action> {
        match code {
            KeyCode::Char('+' | '=') => Some(Action::MoreCircles),
            KeyCode::Char('-' | '_') => Some(Action::FewerCircles),
            KeyCode::Char('.') => Some(Action::IncreaseRadiusStep),
            KeyCode::Char(',') => Some(Action::DecreaseRadiusStep),
            KeyCode::Char(']') => Some(Action::IncreaseThicknessStep),
            KeyCode::Char('[') => Some(Action::DecreaseThicknessStep),
            KeyCode::Char('}') => Some(Action::IncreaseBaseThickness),
            KeyCode::Char('{') => Some(Action::DecreaseBaseThickness),
            KeyCode::Char('r' | 'R') => Some(Action::Reset),
            _ => None,
        }
    }

    fn clip_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let edge = match code {
            KeyCode::Up => Some(Edge::Top),
            KeyCode::Down => Some(Edge::Bottom),
            KeyCode::Left => Some(Edge::Left),
            KeyCode::Right => Some(Edge::Right),
            _ => None,
        };
        if let Some(edge) = edge {
            return Some(if modifiers.contains(KeyModifiers::SHIFT) {
                Action::ShrinkClip(edge)
            } else {
                Action::GrowClip(edge)
            });
        }

        match code {
            KeyCode::Char('w' | 'W') => Some(Action::MoveClip(Direction::Up)),
            KeyCode::Char('s' | 'S') => Some(Action::MoveClip(Direction::Down)),
            KeyCode::Char('a' | 'A') => Some(Action::MoveClip(Direction::Left)),
            KeyCode::Char('d' | 'D') => Some(Action::MoveClip(Direction::Right)),
            KeyCode::Char('r' | 'R') => Some(Action::Randomize),
            KeyCode::Char('c' | 'C') => Some(Action::Clear),
            _ => None,
        }
    }

    /// Maps a mouse press to a click on the surface shown through `viewport`.
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent, viewport: &Viewport) -> Option<Event> {
        let button = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Button::Primary,
            MouseEventKind::Down(MouseButton::Right) => Button::Secondary,
            _ => return None,
        };
        let at = viewport.cell_to_pixel(u32::from(event.column), u32::from(event.row))?;
        Some(Event::Click { button, at })
    }
}

/// Parses a key name such as `r`, `+`, `esc`, `shift+up` or `ctrl+c`.
///
/// # Errors
///
/// Returns a message naming the unrecognized key.
pub fn parse_key(name: &str) -> std::result::Result<KeyEvent, String> {
    let mut modifiers = KeyModifiers::empty();
    let mut rest = name;
    loop {
        let lower = rest.to_ascii_lowercase();
        if rest.len() > 1 && lower.starts_with("shift+") {
            modifiers |= KeyModifiers::SHIFT;
            rest = &rest["shift+".len()..];
        } else if rest.len() > 1 && lower.starts_with("ctrl+") {
            modifiers |= KeyModifiers::CONTROL;
            rest = &rest["ctrl+".len()..];
        } else {
            break;
        }
    }

    let mut chars = rest.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => KeyCode::Char(c),
        _ => match rest.to_ascii_lowercase().as_str() {
            "esc" | "escape" => KeyCode::Esc,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" => KeyCode::Enter,
            "space" => KeyCode::Char(' '),
            _ => return Err(format!("unknown key '{name}'")),
        },
    };
    Ok(KeyEvent::new(code, modifiers))
}

/// Parses an event script into demo events.
///
/// One event per line; blank lines and `#` comments are skipped:
///
/// ```text
/// click left 120 80     # bottom-left coordinates
/// key shift+up
/// resize 640 480
/// ```
///
/// # Errors
///
/// Returns [`Error::ScriptParse`] with the 1-indexed line of the first
/// malformed entry, including keys not bound in this demo.
pub fn parse_script(text: &str, handler: &InputHandler) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split_once('#').map_or(raw, |(code, _)| code).trim();
        if line.is_empty() {
            continue;
        }
        let event = parse_line(line, handler).map_err(|message| Error::ScriptParse {
            line: idx + 1,
            message,
        })?;
        events.push(event);
    }
    log::debug!("parsed {} script events", events.len());
    Ok(events)
}

fn parse_line(line: &str, handler: &InputHandler) -> std::result::Result<Event, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["click", button, x, y] => {
            let button = match button.to_ascii_lowercase().as_str() {
                "left" | "primary" => Button::Primary,
                "right" | "secondary" => Button::Secondary,
                other => return Err(format!("unknown mouse button '{other}'")),
            };
            let at = Point::new(number(x)?, number(y)?);
            Ok(Event::Click { button, at })
        }
        ["key", name] => {
            let key = parse_key(name)?;
            handler
                .handle_key(key)
                .map(Event::Key)
                .ok_or_else(|| format!("key '{name}' is not bound in the {} demo", handler.kind()))
        }
        ["resize", w, h] => Ok(Event::Resize {
            width: number(w)?,
            height: number(h)?,
        }),
        [cmd, ..] if matches!(*cmd, "click" | "key" | "resize") => {
            Err(format!("wrong number of arguments for '{cmd}'"))
        }
        [cmd, ..] => Err(format!("unknown command '{cmd}'")),
        [] => Err("empty line".to_string()),
    }
}

fn number<T: std::str::FromStr>(token: &str) -> std::result::Result<T, String> {
    token
        .parse()
        .map_err(|_| format!("invalid number '{token}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn key_event_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_actions_in_every_demo() {
        for kind in DemoKind::ALL {
            let handler = InputHandler::new(kind);
            assert_eq!(handler.handle_key(key_event(KeyCode::Esc)), Some(Action::Quit));
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char('q'))),
                Some(Action::Quit)
            );
            assert_eq!(
                handler.handle_key(key_event_with(KeyCode::Char('c'), KeyModifiers::CONTROL)),
                Some(Action::Quit)
            );
        }
    }

    #[test]
    fn test_line_bindings() {
        let handler = InputHandler::new(DemoKind::Line);
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('t'))),
            Some(Action::ToggleThickness)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('+'))),
            Some(Action::IncreaseWidth)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('-'))),
            Some(Action::DecreaseWidth)
        );
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('c'))), Some(Action::Clear));
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('r'))),
            Some(Action::Randomize)
        );
        assert_eq!(handler.handle_key(key_event(KeyCode::Up)), None);
    }

    #[test]
    fn test_circles_bindings() {
        let handler = InputHandler::new(DemoKind::Circles);
        let cases = [
            ('+', Action::MoreCircles),
            ('-', Action::FewerCircles),
            ('.', Action::IncreaseRadiusStep),
            (',', Action::DecreaseRadiusStep),
            (']', Action::IncreaseThicknessStep),
            ('[', Action::DecreaseThicknessStep),
            ('}', Action::IncreaseBaseThickness),
            ('{', Action::DecreaseBaseThickness),
            ('r', Action::Reset),
        ];
        for (c, action) in cases {
            assert_eq!(handler.handle_key(key_event(KeyCode::Char(c))), Some(action), "{c}");
        }
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('t'))), None);
    }

    #[test]
    fn test_clip_bindings() {
        let handler = InputHandler::new(DemoKind::Clip);
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('w'))),
            Some(Action::MoveClip(Direction::Up))
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('a'))),
            Some(Action::MoveClip(Direction::Left))
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Right)),
            Some(Action::GrowClip(Edge::Right))
        );
        assert_eq!(
            handler.handle_key(key_event_with(KeyCode::Down, KeyModifiers::SHIFT)),
            Some(Action::ShrinkClip(Edge::Bottom))
        );
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!(parse_key("r").unwrap(), key_event(KeyCode::Char('r')));
        assert_eq!(parse_key("+").unwrap(), key_event(KeyCode::Char('+')));
        assert_eq!(parse_key("ESC").unwrap(), key_event(KeyCode::Esc));
        assert_eq!(
            parse_key("shift+up").unwrap(),
            key_event_with(KeyCode::Up, KeyModifiers::SHIFT)
        );
        assert_eq!(
            parse_key("ctrl+c").unwrap(),
            key_event_with(KeyCode::Char('c'), KeyModifiers::CONTROL)
        );
        assert!(parse_key("f13").is_err());
    }

    #[test]
    fn test_parse_script() {
        let script = "
# draw one segment
click left 10 20
click right 300 40   # commit

key shift+left
resize 640 480
";
        let events = parse_script(script, &InputHandler::new(DemoKind::Clip)).unwrap();
        assert_eq!(
            events,
            vec![
                Event::Click {
                    button: Button::Primary,
                    at: Point::new(10, 20)
                },
                Event::Click {
                    button: Button::Secondary,
                    at: Point::new(300, 40)
                },
                Event::Key(Action::ShrinkClip(Edge::Left)),
                Event::Resize {
                    width: 640,
                    height: 480
                },
            ]
        );
    }

    #[test]
    fn test_parse_script_errors_carry_line() {
        let handler = InputHandler::new(DemoKind::Line);
        let cases = [
            ("key t\nclick middle 1 2\n", 2),
            ("\n\nresize 10\n", 3),
            ("jump 1 2", 1),
            ("click left x 2", 1),
            ("key t\nkey .", 2),
        ];
        for (script, expected) in cases {
            match parse_script(script, &handler) {
                Err(Error::ScriptParse { line, .. }) => assert_eq!(line, expected, "{script:?}"),
                other => panic!("expected script error for {script:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_handle_mouse_maps_through_viewport() {
        let handler = InputHandler::new(DemoKind::Line);
        let vp = Viewport::fit(100, 100, Some(20), Some(10), crate::output::TerminalMode::Ascii);
        let press = |kind, column, row| MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        };

        assert_eq!(
            handler.handle_mouse(press(MouseEventKind::Down(MouseButton::Left), 0, 0), &vp),
            Some(Event::Click {
                button: Button::Primary,
                at: Point::new(2, 94)
            })
        );
        assert_eq!(
            handler.handle_mouse(press(MouseEventKind::Down(MouseButton::Right), 0, 0), &vp),
            Some(Event::Click {
                button: Button::Secondary,
                at: Point::new(2, 94)
            })
        );
        assert_eq!(
            handler.handle_mouse(press(MouseEventKind::Moved, 0, 0), &vp),
            None
        );
        // Status line below the image
        assert_eq!(
            handler.handle_mouse(press(MouseEventKind::Down(MouseButton::Left), 0, 10), &vp),
            None
        );
    }
}
