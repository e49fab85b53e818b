use std::collections::VecDeque;
use std::io::{self, BufRead};

use thiserror::Error;

use crate::shape::{Point, Shape};

/// Errors produced while reading a console command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("{command}: missing argument '{name}'")]
    MissingArgument {
        command: &'static str,
        name: &'static str,
    },

    #[error("{command}: argument '{name}' is not an integer: '{token}'")]
    InvalidNumber {
        command: &'static str,
        name: &'static str,
        token: String,
    },

    #[error("{command}: argument '{name}' must not be negative, got {value}")]
    Negative {
        command: &'static str,
        name: &'static str,
        value: i32,
    },

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl CommandError {
    /// Argument errors leave the rest of the line unusable; an unknown word
    /// is dropped on its own.
    pub fn skips_rest_of_line(&self) -> bool {
        matches!(
            self,
            CommandError::MissingArgument { .. }
                | CommandError::InvalidNumber { .. }
                | CommandError::Negative { .. }
        )
    }
}

/// A console command with its arguments already parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddPoint { x: i32, y: i32 },
    AddLine { x1: i32, y1: i32, x2: i32, y2: i32 },
    AddRect { x: i32, y: i32, width: i32, height: i32 },
    AddCircle { cx: i32, cy: i32, radius: i32 },
    Draw,
    Help,
    Exit,
}

impl Command {
    /// Shape added to the document by this command, if any
    pub fn shape(&self) -> Option<Shape> {
        match *self {
            Command::AddPoint { x, y } => Some(Shape::point(x, y)),
            Command::AddLine { x1, y1, x2, y2 } => {
                Some(Shape::line(Point::new(x1, y1), Point::new(x2, y2)))
            }
            Command::AddRect { x, y, width, height } => Some(Shape::Rectangle {
                top_left: Point::new(x, y),
                width,
                height,
            }),
            Command::AddCircle { cx, cy, radius } => Some(Shape::Circle {
                center: Point::new(cx, cy),
                radius,
            }),
            Command::Draw | Command::Help | Command::Exit => None,
        }
    }

    /// Read the next command from `tokens`. `Ok(None)` means the input ended
    /// cleanly between two commands.
    pub fn read<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Option<Self>, CommandError> {
        let Some(word) = tokens.next_token()? else {
            return Ok(None);
        };

        let command = match word.as_str() {
            "addpoint" => {
                let mut args = Args::new("addpoint", tokens);
                Command::AddPoint {
                    x: args.int("x")?,
                    y: args.int("y")?,
                }
            }
            "addline" => {
                let mut args = Args::new("addline", tokens);
                Command::AddLine {
                    x1: args.int("x1")?,
                    y1: args.int("y1")?,
                    x2: args.int("x2")?,
                    y2: args.int("y2")?,
                }
            }
            "addrect" => {
                let mut args = Args::new("addrect", tokens);
                Command::AddRect {
                    x: args.int("x")?,
                    y: args.int("y")?,
                    width: args.size("width")?,
                    height: args.size("height")?,
                }
            }
            "addcircle" => {
                let mut args = Args::new("addcircle", tokens);
                Command::AddCircle {
                    cx: args.int("cx")?,
                    cy: args.int("cy")?,
                    radius: args.size("radius")?,
                }
            }
            "draw" => Command::Draw,
            "help" => Command::Help,
            "exit" => Command::Exit,
            _ => return Err(CommandError::Unknown(word)),
        };
        Ok(Some(command))
    }
}

/// Argument cursor for a single command
struct Args<'a, R> {
    command: &'static str,
    tokens: &'a mut TokenReader<R>,
}

impl<'a, R: BufRead> Args<'a, R> {
    fn new(command: &'static str, tokens: &'a mut TokenReader<R>) -> Self {
        Self { command, tokens }
    }

    fn int(&mut self, name: &'static str) -> Result<i32, CommandError> {
        let token = self
            .tokens
            .next_token()?
            .ok_or(CommandError::MissingArgument { command: self.command, name })?;
        token.parse().map_err(|_| CommandError::InvalidNumber {
            command: self.command,
            name,
            token,
        })
    }

    fn size(&mut self, name: &'static str) -> Result<i32, CommandError> {
        let value = self.int(name)?;
        if value < 0 {
            return Err(CommandError::Negative { command: self.command, name, value });
        }
        Ok(value)
    }
}

/// Splits a line based reader into whitespace separated tokens.
/// Tokens may continue across line breaks.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            // Bytes that are not UTF-8 still make a token, so they end up as an unknown command
            self.pending.extend(
                line.split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
    }

    /// Drop whatever is left of the current line
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }
}
