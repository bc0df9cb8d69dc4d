//! `urldrop open <path>...` – treat the given files as one drop.

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use urldrop_core::config::Preferences;
use urldrop_core::opener::TabOpener;
use urldrop_core::source::files_from_paths;
use urldrop_core::{handle, BatchSummary};

use crate::cli::sink::{make_opener, TerminalSink};
use crate::cli::status::StatusLine;

pub async fn run_open(paths: &[PathBuf], prefs: &Preferences, print: bool) -> Result<()> {
    let mut sink = TerminalSink::new(make_opener(prefs, print), StatusLine::stderr());
    let summary = open_paths(paths, &mut sink).await;
    tracing::debug!(?summary, "open finished");
    Ok(())
}

/// Run `paths` through the drop handler as a single drop and end the status line.
pub async fn open_paths<O, W>(
    paths: &[PathBuf],
    sink: &mut TerminalSink<O, W>,
) -> Option<BatchSummary>
where
    O: TabOpener,
    W: Write,
{
    let files = files_from_paths(paths.iter().cloned());
    let summary = handle(&files, sink).await;
    sink.end_drop();
    summary
}
