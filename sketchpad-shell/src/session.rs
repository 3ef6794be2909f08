//! A drawing session: the current canvas plus command dispatch.

use sketchpad_core::{Canvas, InvalidArgument};
use thiserror::Error;

use crate::parser::{Command, CommandParser, ParseError};

/// Result of executing a line — tells the driver what to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The canvas changed. Holds its new rendering.
    Rendered(String),
    /// Text asked for explicitly (`P`, `H`). Always shown.
    Output(String),
    /// Blank line or comment.
    Nothing,
    Quit,
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Canvas(#[from] InvalidArgument),

    #[error("no canvas yet, create one with 'C width height'")]
    NoCanvas,
}

#[derive(Debug, Default)]
pub struct Session {
    canvas: Option<Canvas>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Execute one input line — parse it and route it to the canvas.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, ShellError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Outcome::Nothing);
        }

        match CommandParser::parse(trimmed)? {
            Command::Create { width, height } => {
                // A rejected size keeps whatever canvas was there before.
                let canvas = Canvas::create(width, height)?;
                let rendered = canvas.print();
                self.canvas = Some(canvas);
                Ok(Outcome::Rendered(rendered))
            }
            Command::Line { x1, y1, x2, y2 } => {
                let canvas = self.canvas_mut()?;
                canvas.draw_line(x1, y1, x2, y2)?;
                Ok(Outcome::Rendered(canvas.print()))
            }
            Command::Rectangle { x1, y1, x2, y2 } => {
                let canvas = self.canvas_mut()?;
                canvas.draw_rectangle(x1, y1, x2, y2)?;
                Ok(Outcome::Rendered(canvas.print()))
            }
            Command::Print => {
                let canvas = self.canvas.as_ref().ok_or(ShellError::NoCanvas)?;
                Ok(Outcome::Output(canvas.print()))
            }
            Command::Help => Ok(Outcome::Output(help_text())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    fn canvas_mut(&mut self) -> Result<&mut Canvas, ShellError> {
        self.canvas.as_mut().ok_or(ShellError::NoCanvas)
    }
}

fn help_text() -> String {
    [
        "Commands (one per line, letters are case-insensitive):",
        "",
        "  C w h              Create a new w x h canvas",
        "  L x1 y1 x2 y2      Draw a horizontal or vertical line",
        "  R x1 y1 x2 y2      Draw a rectangle outline",
        "  P                  Print the canvas",
        "  H, help            Show this help",
        "  Q, quit            Quit",
        "",
        "  Coordinates start at 1 in the top-left corner.",
        "  Lines starting with '#' are ignored.",
    ]
    .join("\n")
}
