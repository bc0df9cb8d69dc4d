//! CLI for urldrop.

mod commands;
mod frame;
mod sink;
mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urldrop_core::config::{PreferenceStore, TomlPreferenceStore};

use commands::{run_completions, run_config, run_man, run_open, run_zone};

/// Top-level CLI for urldrop.
#[derive(Debug, Parser)]
#[command(name = "urldrop")]
#[command(about = "urldrop: open the targets of Windows .url shortcuts in your browser", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Open the targets of the given shortcut files as one drop.
    Open {
        /// Dropped files; anything not ending in .url is skipped.
        paths: Vec<PathBuf>,
        /// Print the URLs to stdout instead of opening them.
        #[arg(long)]
        print: bool,
    },

    /// Interactive drop zone: drag files onto the terminal and press Enter.
    Zone {
        /// Close the zone after a drop that opened at least one tab.
        #[arg(long, conflicts_with = "no_auto_close")]
        auto_close: bool,
        /// Keep the zone open after successful drops.
        #[arg(long)]
        no_auto_close: bool,
        /// Print the URLs to stdout instead of opening them.
        #[arg(long)]
        print: bool,
    },

    /// Show or change preferences.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Render the man page to stdout.
    Man,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ConfigAction {
    /// Print all preferences.
    Show,
    /// Print the config file location.
    Path,
    /// Change one preference (width, height, auto-close, browser).
    Set {
        /// Preference name.
        key: String,
        /// New value.
        value: String,
    },
    /// Restore every preference to its default.
    Reset,
}

/// `--auto-close` / `--no-auto-close` as an override of the stored preference.
fn auto_close_override(auto_close: bool, no_auto_close: bool) -> Option<bool> {
    match (auto_close, no_auto_close) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let store = TomlPreferenceStore::open_default()?;
        if let CliCommand::Config { action } = &cli.command {
            return run_config(&store, action, &mut std::io::stdout());
        }

        let prefs = store.load()?;
        tracing::debug!("loaded preferences: {:?}", prefs);

        match cli.command {
            CliCommand::Open { paths, print } => run_open(&paths, &prefs, print).await?,
            CliCommand::Zone {
                auto_close,
                no_auto_close,
                print,
            } => {
                let auto_close =
                    auto_close_override(auto_close, no_auto_close).unwrap_or(prefs.auto_close);
                run_zone(&prefs, auto_close, print).await?;
            }
            CliCommand::Config { .. } | CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
