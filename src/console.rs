use std::io::{self, BufRead, Write};

use crate::command::{Command, CommandError, TokenReader};
use crate::document::SharedDocument;

pub const BANNER: &str = "Commands: addpoint x y | addline x1 y1 x2 y2 | addrect x y w h | addcircle x y r | draw | help | exit";
pub const PROMPT: &str = "Enter command: ";

/// How the console hands news to whatever draws the document
pub trait RenderSignal: Send {
    /// The document changed and should be redrawn
    fn request_redraw(&self);

    /// The console is done; the view should shut down
    fn close(&self);
}

/// Signal for running without a window
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWindow;

impl RenderSignal for NoWindow {
    fn request_redraw(&self) {}

    fn close(&self) {}
}

/// Why the console loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleExit {
    /// The user typed `exit`
    Command,
    /// Standard input was closed
    EndOfInput,
}

/// Blocking text command loop
pub struct Console<R, W, S> {
    tokens: TokenReader<R>,
    output: W,
    document: SharedDocument,
    signal: S,
}

impl<R: BufRead, W: Write, S: RenderSignal> Console<R, W, S> {
    pub fn new(input: R, output: W, document: SharedDocument, signal: S) -> Self {
        Self {
            tokens: TokenReader::new(input),
            output,
            document,
            signal,
        }
    }

    /// Run until `exit` or end of input. The render signal is closed on the
    /// way out, also when reading fails.
    pub fn run(mut self) -> io::Result<ConsoleExit> {
        let result = self.run_loop();
        self.signal.close();
        result
    }

    fn run_loop(&mut self) -> io::Result<ConsoleExit> {
        writeln!(self.output, "{BANNER}")?;
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            match Command::read(&mut self.tokens) {
                Ok(Some(Command::Exit)) => {
                    log::info!("Console exit requested");
                    return Ok(ConsoleExit::Command);
                }
                Ok(Some(command)) => self.execute(command)?,
                Ok(None) => {
                    writeln!(self.output)?;
                    log::info!("Console input closed");
                    return Ok(ConsoleExit::EndOfInput);
                }
                Err(CommandError::Io(err)) => return Err(err),
                Err(err) => {
                    log::debug!("Rejected console input: {err}");
                    if err.skips_rest_of_line() {
                        self.tokens.discard_pending();
                    }
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        if let Some(shape) = command.shape() {
            self.document.add(shape);
            self.signal.request_redraw();
            return writeln!(self.output, "{} added.", shape.kind());
        }

        match command {
            Command::Draw => {
                let shapes = self.document.snapshot();
                if shapes.is_empty() {
                    writeln!(self.output, "Nothing to draw.")?;
                }
                for shape in &shapes {
                    writeln!(self.output, "{}", shape.describe())?;
                }
                Ok(())
            }
            Command::Help => writeln!(self.output, "{BANNER}"),
            _ => Ok(()),
        }
    }
}
