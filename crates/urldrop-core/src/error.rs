//! Error types surfaced by the core library.

use std::path::PathBuf;

/// Reading a dropped file's text failed. Never shown to the user; the file is
/// counted as processed without a URL.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The background read task panicked or was aborted.
    #[error("read task did not complete: {0}")]
    Task(String),
    #[error("{0}")]
    Unreadable(String),
}

/// Handing a URL to the browser failed.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("launch browser for {url}: {source}")]
    Launch {
        url: String,
        #[source]
        source: std::io::Error,
    },
    #[error("write url: {0}")]
    Write(#[from] std::io::Error),
}

/// A preference key or value given by the user was rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PrefError {
    #[error("unknown preference '{0}' (expected width, height, auto-close or browser)")]
    UnknownKey(String),
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
