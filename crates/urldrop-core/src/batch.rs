//! Per-drop batch accounting.
//!
//! A `Batch` is created for every non-empty drop and tracks how many files have
//! resolved and how many tabs were opened. Each file resolves exactly once
//! (skipped, read failure, no URL, or opened); the batch finalizes on the
//! resolution that makes `processed == total`.

/// Status shown when a drop carries no files at all.
pub const NO_FILES_MESSAGE: &str = "No files detected.";

/// Status shown when a batch finishes without opening anything.
pub const NO_VALID_MESSAGE: &str = "No valid .url files found.";

/// Status shown when a batch starts.
pub fn processing_message(total: usize) -> String {
    format!("Processing {total} file(s)...")
}

/// Status shown when a batch finishes with at least one opened tab.
pub fn opened_message(valid: usize) -> String {
    format!("Opened {valid} tab(s).")
}

/// How a single dropped file resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Name does not end in `.url`; never read.
    Skipped,
    /// The text read failed.
    ReadFailed,
    /// Read succeeded but no `URL=` value was found.
    NoUrl,
    /// A URL was extracted and handed to the opener.
    Opened,
}

/// Final result of a batch, produced exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchSummary {
    /// At least one tab was opened.
    Opened(usize),
    /// Every file was skipped, unreadable, or had no URL.
    NoneValid,
}

impl BatchSummary {
    /// Number of tabs opened by the batch.
    pub fn opened(&self) -> usize {
        match self {
            BatchSummary::Opened(n) => *n,
            BatchSummary::NoneValid => 0,
        }
    }

    /// The status line for this summary.
    pub fn message(&self) -> String {
        match self {
            BatchSummary::Opened(n) => opened_message(*n),
            BatchSummary::NoneValid => NO_VALID_MESSAGE.to_string(),
        }
    }
}

/// Tally for one drop event. Invariant: `processed <= total`.
#[derive(Debug)]
pub struct Batch {
    total: usize,
    processed: usize,
    valid_opened: usize,
    finalized: bool,
}

impl Batch {
    /// Start a batch of `total` files. `total` must be non-zero; empty drops never create a batch.
    pub fn new(total: usize) -> Self {
        debug_assert!(total > 0, "empty drops do not create a batch");
        Self {
            total,
            processed: 0,
            valid_opened: 0,
            finalized: false,
        }
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn valid_opened(&self) -> usize {
        self.valid_opened
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Record one file's resolution and run the completion check.
    ///
    /// Returns the summary on the resolution that completes the batch, `None`
    /// otherwise. Resolutions beyond `total` are ignored so `processed` never
    /// exceeds `total`.
    pub fn resolve(&mut self, outcome: FileOutcome) -> Option<BatchSummary> {
        if self.processed >= self.total {
            tracing::warn!(
                ?outcome,
                total = self.total,
                "file resolved after batch was complete; ignoring"
            );
            return None;
        }
        if outcome == FileOutcome::Opened {
            self.valid_opened += 1;
        }
        self.processed += 1;
        self.check_completion()
    }

    /// Completion check. Safe to call any number of times: yields the summary
    /// only on the first call that observes `processed == total`.
    pub fn check_completion(&mut self) -> Option<BatchSummary> {
        if self.finalized || self.processed != self.total {
            return None;
        }
        self.finalized = true;
        Some(if self.valid_opened > 0 {
            BatchSummary::Opened(self.valid_opened)
        } else {
            BatchSummary::NoneValid
        })
    }
}
