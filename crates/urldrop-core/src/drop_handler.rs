//! Drop handling: turn one drop event into opened tabs and status lines.
//!
//! The handler is shared by every drop surface. Each surface supplies a
//! [`DropSink`] for status output, tab opening and the success report; the
//! handler owns the per-drop [`Batch`] and is the only code that touches it.
//!
//! Reads of `.url` files run concurrently on the tokio runtime. Their results
//! are folded into the batch one at a time on the handler's task, so sink
//! callbacks never run concurrently and completion order does not matter.

use std::future::Future;
use std::pin::Pin;

use tokio::task::JoinSet;

use crate::batch::{
    opened_message, processing_message, Batch, BatchSummary, FileOutcome, NO_FILES_MESSAGE,
    NO_VALID_MESSAGE,
};
use crate::error::ReadError;
use crate::shortcut::{extract_url, has_shortcut_extension};

/// Pending text read of a dropped file.
pub type ReadFuture = Pin<Box<dyn Future<Output = Result<String, ReadError>> + Send + 'static>>;

/// A file delivered by a drop event: a name plus a lazy, asynchronous text read.
pub trait DroppedFile {
    /// File name as shown to the user (no directory part).
    fn name(&self) -> &str;

    /// Start reading the file's text. Only called for `.url` files.
    fn read_text(&self) -> ReadFuture;
}

/// Callbacks a drop surface provides to the handler.
pub trait DropSink {
    /// Replace the visible status line.
    fn status(&mut self, message: &str);

    /// Open `url` in a new background tab. Fire-and-forget.
    fn open(&mut self, url: &str);

    /// Batch finished with `valid` opened tabs (`valid > 0`).
    fn complete(&mut self, valid: usize) {
        self.status(&opened_message(valid));
    }
}

/// Process one drop event.
///
/// Returns `None` for an empty drop (only "No files detected." is reported),
/// otherwise the batch summary, which has already been reported to `sink`.
pub async fn handle<F, S>(files: &[F], sink: &mut S) -> Option<BatchSummary>
where
    F: DroppedFile,
    S: DropSink + ?Sized,
{
    if files.is_empty() {
        sink.status(NO_FILES_MESSAGE);
        return None;
    }

    let total = files.len();
    sink.status(&processing_message(total));
    tracing::info!(total, "processing drop");

    let mut batch = Batch::new(total);
    let mut finished = None;
    let mut reads = JoinSet::new();

    for file in files {
        let name = file.name().to_string();
        if !has_shortcut_extension(&name) {
            tracing::debug!(%name, "not a .url file; skipping");
            if let Some(summary) = batch.resolve(FileOutcome::Skipped) {
                finished = Some(finish(sink, summary));
            }
            continue;
        }
        let read = file.read_text();
        reads.spawn(async move { (name, read.await) });
    }

    while let Some(joined) = reads.join_next().await {
        let outcome = match joined {
            Ok((name, Ok(text))) => match extract_url(&text) {
                Some(url) => {
                    tracing::debug!(%name, %url, "opening shortcut target");
                    sink.open(url);
                    FileOutcome::Opened
                }
                None => {
                    tracing::debug!(%name, "no URL= line found");
                    FileOutcome::NoUrl
                }
            },
            Ok((name, Err(err))) => {
                tracing::debug!(%name, error = %err, "read failed");
                FileOutcome::ReadFailed
            }
            Err(join_err) => {
                let err = ReadError::Task(join_err.to_string());
                tracing::debug!(error = %err, "read failed");
                FileOutcome::ReadFailed
            }
        };
        if let Some(summary) = batch.resolve(outcome) {
            finished = Some(finish(sink, summary));
        }
    }

    debug_assert!(batch.is_finalized());
    finished
}

fn finish<S: DropSink + ?Sized>(sink: &mut S, summary: BatchSummary) -> BatchSummary {
    tracing::info!(opened = summary.opened(), "drop finished");
    match summary {
        BatchSummary::Opened(valid) => sink.complete(valid),
        BatchSummary::NoneValid => sink.status(NO_VALID_MESSAGE),
    }
    summary
}
