//! CLI command handlers. Each command is in its own file.

mod completions;
mod config;
mod open;
mod zone;

pub use completions::{run_completions, run_man};
pub use config::run_config;
pub use open::run_open;
pub use zone::run_zone;
