pub mod config;
pub mod logging;

pub mod batch;
pub mod drop_handler;
pub mod error;
pub mod opener;
pub mod shortcut;
pub mod source;

pub use batch::{Batch, BatchSummary, FileOutcome};
pub use drop_handler::{handle, DropSink, DroppedFile};
pub use error::{OpenError, PrefError, ReadError};
