//! `urldrop zone` – interactive drop zone.
//!
//! Each line read from stdin is one drop event (terminals paste the paths of
//! files dragged onto the window). With auto-close on, the zone ends shortly
//! after a drop that opened at least one tab.

use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use urldrop_core::batch::opened_message;
use urldrop_core::config::Preferences;
use urldrop_core::opener::TabOpener;
use urldrop_core::source::{files_from_paths, parse_drop_line};
use urldrop_core::{handle, DropSink};

use crate::cli::frame::ZoneFrame;
use crate::cli::sink::{make_opener, TerminalSink};
use crate::cli::status::StatusLine;

/// Pause between the success message and closing, so the message can be read.
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_millis(500);

/// Why the zone stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneExit {
    AutoClosed,
    EndOfInput,
}

/// Zone wiring: terminal sink plus the auto-close request raised on success.
pub struct ZoneSink<O, W> {
    inner: TerminalSink<O, W>,
    auto_close: bool,
    close_requested: bool,
}

impl<O: TabOpener, W: Write> ZoneSink<O, W> {
    pub fn new(inner: TerminalSink<O, W>, auto_close: bool) -> Self {
        Self {
            inner,
            auto_close,
            close_requested: false,
        }
    }
}

impl<O: TabOpener, W: Write> DropSink for ZoneSink<O, W> {
    fn status(&mut self, message: &str) {
        self.inner.status(message);
    }

    fn open(&mut self, url: &str) {
        self.inner.open(url);
    }

    fn complete(&mut self, valid: usize) {
        self.inner.status(&opened_message(valid));
        if self.auto_close && valid > 0 {
            self.close_requested = true;
        }
    }
}

pub async fn run_zone(prefs: &Preferences, auto_close: bool, print: bool) -> Result<()> {
    eprint!("{}", ZoneFrame::from_prefs(prefs).render());
    if auto_close {
        eprintln!("(auto-close on: the zone closes after a successful drop)");
    }

    let sink = TerminalSink::new(make_opener(prefs, print), StatusLine::stderr());
    let mut sink = ZoneSink::new(sink, auto_close);
    let exit = drive_zone(BufReader::new(tokio::io::stdin()), &mut sink).await?;
    tracing::info!(?exit, "zone closed");
    Ok(())
}

/// Run drops from `input` until auto-close triggers or input ends.
pub async fn drive_zone<R, O, W>(input: R, sink: &mut ZoneSink<O, W>) -> Result<ZoneExit>
where
    R: AsyncBufRead + Unpin,
    O: TabOpener,
    W: Write,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("read drop line")? {
        let files = files_from_paths(parse_drop_line(&line));
        handle(&files, sink).await;
        sink.inner.end_drop();

        if sink.close_requested {
            tokio::time::sleep(AUTO_CLOSE_DELAY).await;
            return Ok(ZoneExit::AutoClosed);
        }
    }
    Ok(ZoneExit::EndOfInput)
}
