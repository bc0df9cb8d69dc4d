//! Single-line status display.
//!
//! Each message replaces the previous one on the same terminal line; the line
//! is only terminated when the caller ends it (after a drop is finished).

use std::io::{self, Write};

pub struct StatusLine<W> {
    out: W,
    /// Chars of the message currently on the line.
    shown: usize,
}

impl StatusLine<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> StatusLine<W> {
    pub fn new(out: W) -> Self {
        Self { out, shown: 0 }
    }

    /// Replace the visible status with `message`.
    pub fn show(&mut self, message: &str) -> io::Result<()> {
        let len = message.chars().count();
        let pad = self.shown.saturating_sub(len);
        write!(self.out, "\r{message}{:pad$}", "")?;
        self.out.flush()?;
        self.shown = len;
        Ok(())
    }

    /// Terminate the current line so the next message starts fresh.
    pub fn end(&mut self) -> io::Result<()> {
        if self.shown > 0 {
            writeln!(self.out)?;
            self.out.flush()?;
            self.shown = 0;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}
