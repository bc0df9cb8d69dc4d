//! Terminal wiring for the drop handler: status on stderr, tabs via an opener.

use std::io::Write;
use urldrop_core::config::Preferences;
use urldrop_core::opener::{open_or_warn, PrintOpener, SystemOpener, TabOpener};
use urldrop_core::DropSink;

use super::status::StatusLine;

/// Opener for a command: print URLs with `--print`, otherwise the configured browser.
pub fn make_opener(prefs: &Preferences, print: bool) -> Box<dyn TabOpener> {
    if print {
        Box::new(PrintOpener::stdout())
    } else {
        Box::new(SystemOpener::new(prefs.browser.clone()))
    }
}

/// Drop sink that shows status on a single terminal line and opens tabs.
pub struct TerminalSink<O, W> {
    opener: O,
    status: StatusLine<W>,
}

impl<O: TabOpener, W: Write> TerminalSink<O, W> {
    pub fn new(opener: O, status: StatusLine<W>) -> Self {
        Self { opener, status }
    }

    /// Finish the status line after a drop.
    pub fn end_drop(&mut self) {
        if let Err(err) = self.status.end() {
            tracing::warn!(error = %err, "failed to write status");
        }
    }

    #[cfg(test)]
    pub fn parts(&self) -> (&O, &StatusLine<W>) {
        (&self.opener, &self.status)
    }
}

impl<O: TabOpener, W: Write> DropSink for TerminalSink<O, W> {
    fn status(&mut self, message: &str) {
        if let Err(err) = self.status.show(message) {
            tracing::warn!(error = %err, "failed to write status");
        }
    }

    fn open(&mut self, url: &str) {
        open_or_warn(&mut self.opener, url);
    }
}
