use crate::{io::SessionIo, stack::BoundedStack};
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    ExecutableCommand,
};
use std::{
    fmt::Display,
    io::{self, Stdout, Write},
};

/// A `crossterm`-based implementation of `SessionIo`.
///
/// Write errors don't interrupt the session. The first one is kept, and
/// handed back by `finish`.
#[derive(Debug)]
pub struct TerminalIo<W: Write = Stdout> {
    out: W,
    color: bool,
    trace: bool,
    error: Option<io::Error>,
}

impl TerminalIo {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalIo<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            color: true,
            trace: false,
            error: None,
        }
    }

    #[must_use]
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Print the stack to stderr after every command.
    #[must_use]
    pub fn trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Flush, and return the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn line(&mut self, color: Color, text: impl Display) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.try_line(color, text) {
            self.error = Some(e);
        }
    }

    fn try_line(&mut self, color: Color, text: impl Display) -> io::Result<()> {
        if self.color {
            self.out
                .execute(SetForegroundColor(color))?
                .execute(Print(text))?
                .execute(ResetColor)?;
        } else {
            self.out.execute(Print(text))?;
        }
        writeln!(self.out)
    }
}

fn describe(value: Option<i32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "empty".to_string(),
    }
}

impl<W: Write + std::fmt::Debug> SessionIo for TerminalIo<W> {
    fn update(&mut self, stack: &BoundedStack) {
        if self.trace {
            eprintln!("{stack:?}");
        }
    }

    fn pushed(&mut self, value: i32) {
        self.line(Color::Green, format_args!("push {value}"));
    }

    fn push_rejected(&mut self, value: i32, capacity: usize) {
        self.line(
            Color::Yellow,
            format_args!("push {value}: rejected, stack is full (capacity {capacity})"),
        );
    }

    fn popped(&mut self, value: Option<i32>) {
        let color = if value.is_some() { Color::Cyan } else { Color::Red };
        self.line(color, format_args!("pop -> {}", describe(value)));
    }

    fn peeked(&mut self, value: Option<i32>) {
        let color = if value.is_some() { Color::Cyan } else { Color::Red };
        self.line(color, format_args!("peek -> {}", describe(value)));
    }

    fn dumped(&mut self, stack: &BoundedStack) {
        // The listing ends in a newline of its own.
        let listing = stack.listing().to_string();
        self.line(Color::Blue, listing.trim_end());
    }
}
