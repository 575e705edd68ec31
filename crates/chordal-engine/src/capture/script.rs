use std::fmt;

use crate::coords::SurfaceSize;
use crate::input::{
    InputEvent, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

/// A parse error from a pointer replay script.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptError {
    pub message: String,
    /// 1-based source line number where the error occurred.
    pub line: usize,
}

impl ScriptError {
    fn new(msg: impl Into<String>, line: usize) -> Self {
        Self { message: msg.into(), line }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "replay script error at line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ScriptError {}

/// One scripted pointer event, in surface-local pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ScriptEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
}

impl ScriptEvent {
    /// Expands into the engine input event a real pointer would produce.
    pub fn to_input_event(self) -> InputEvent {
        match self {
            ScriptEvent::Move { x, y } => InputEvent::PointerMoved(PointerMoveEvent { x, y }),
            ScriptEvent::Down { x, y } => InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x,
                y,
                modifiers: Modifiers::default(),
            }),
            ScriptEvent::Up { x, y } => InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Released,
                x,
                y,
                modifiers: Modifiers::default(),
            }),
        }
    }
}

/// A parsed pointer script: a surface size plus an ordered event list.
///
/// Format, one directive per line:
///
/// ```text
/// # comment
/// surface 700 700
/// down 350 350
/// move 500 350
/// up 500 350
/// ```
///
/// `surface W H` must come first (and appear exactly once); coordinates are
/// surface-local pixels. Blank lines and `#` comments are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayScript {
    pub surface: SurfaceSize,
    pub events: Vec<ScriptEvent>,
}

impl ReplayScript {
    pub fn parse(src: &str) -> Result<Self, ScriptError> {
        let mut surface: Option<SurfaceSize> = None;
        let mut events = Vec::new();

        for (idx, raw) in src.lines().enumerate() {
            let line_no = idx + 1;
            let line = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            let mut parts = line.split_whitespace();
            let Some(directive) = parts.next() else {
                continue;
            };

            let x = parse_coord(parts.next(), directive, line_no)?;
            let y = parse_coord(parts.next(), directive, line_no)?;
            if let Some(extra) = parts.next() {
                return Err(ScriptError::new(
                    format!("unexpected trailing token `{extra}`"),
                    line_no,
                ));
            }

            match directive {
                "surface" => {
                    if surface.is_some() {
                        return Err(ScriptError::new("duplicate `surface` directive", line_no));
                    }
                    let size = SurfaceSize::new(x, y);
                    if !size.is_valid() {
                        return Err(ScriptError::new(
                            format!("invalid surface size {x} x {y}"),
                            line_no,
                        ));
                    }
                    surface = Some(size);
                }
                "down" | "move" | "up" => {
                    if surface.is_none() {
                        return Err(ScriptError::new(
                            "pointer event before `surface` directive",
                            line_no,
                        ));
                    }
                    events.push(match directive {
                        "down" => ScriptEvent::Down { x, y },
                        "move" => ScriptEvent::Move { x, y },
                        _ => ScriptEvent::Up { x, y },
                    });
                }
                other => {
                    return Err(ScriptError::new(format!("unknown directive `{other}`"), line_no));
                }
            }
        }

        let Some(surface) = surface else {
            return Err(ScriptError::new("missing `surface` directive", 1));
        };

        Ok(Self { surface, events })
    }
}

fn parse_coord(token: Option<&str>, directive: &str, line: usize) -> Result<f32, ScriptError> {
    let Some(token) = token else {
        return Err(ScriptError::new(
            format!("`{directive}` expects two coordinates"),
            line,
        ));
    };
    token
        .parse::<f32>()
        .map_err(|_| ScriptError::new(format!("invalid coordinate `{token}`"), line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(src: &str) -> ScriptError {
        ReplayScript::parse(src).unwrap_err()
    }

    #[test]
    fn parses_demo_shaped_script() {
        let script = ReplayScript::parse(
            "# demo\nsurface 700 700\ndown 350 350\nmove 500 350\nup 500 350\n",
        )
        .unwrap();
        assert_eq!(script.surface, SurfaceSize::new(700.0, 700.0));
        assert_eq!(
            script.events,
            vec![
                ScriptEvent::Down { x: 350.0, y: 350.0 },
                ScriptEvent::Move { x: 500.0, y: 350.0 },
                ScriptEvent::Up { x: 500.0, y: 350.0 },
            ]
        );
    }

    #[test]
    fn trailing_comments_and_blank_lines_are_skipped() {
        let script =
            ReplayScript::parse("surface 10 10\n\ndown 1 2 # press\n").unwrap();
        assert_eq!(script.events.len(), 1);
    }

    #[test]
    fn missing_surface_is_an_error() {
        assert_eq!(err("down 1 2\n").line, 1);
        assert_eq!(err("").message, "missing `surface` directive");
    }

    #[test]
    fn zero_surface_is_rejected() {
        let e = err("surface 0 700\n");
        assert!(e.message.contains("invalid surface size"));
    }

    #[test]
    fn unknown_directive_reports_line_number() {
        let e = err("surface 10 10\nclick 1 2\n");
        assert_eq!(e.line, 2);
        assert!(e.message.contains("unknown directive"));
    }

    #[test]
    fn short_line_is_rejected() {
        let e = err("surface 10 10\nmove 5\n");
        assert_eq!(e.line, 2);
        assert!(e.message.contains("expects two coordinates"));
    }

    #[test]
    fn down_expands_to_left_button_press() {
        let ev = ScriptEvent::Down { x: 3.0, y: 4.0 }.to_input_event();
        assert_eq!(
            ev,
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 3.0,
                y: 4.0,
                modifiers: Modifiers::default(),
            })
        );
    }
}
