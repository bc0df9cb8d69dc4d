//! `urldrop config ...` – show and change preferences.

use anyhow::Result;
use std::io::Write;
use urldrop_core::config::{self, Preference, PreferenceStore, Preferences};

use crate::cli::ConfigAction;

pub fn run_config<S, W>(store: &S, action: &ConfigAction, out: &mut W) -> Result<()>
where
    S: PreferenceStore + ?Sized,
    W: Write,
{
    match action {
        ConfigAction::Show => {
            let prefs = store.load()?;
            for key in Preference::ALL {
                writeln!(out, "{} = {}", key.name(), prefs.get(key))?;
            }
        }
        ConfigAction::Path => {
            writeln!(out, "{}", config::config_path()?.display())?;
        }
        ConfigAction::Set { key, value } => {
            let key: Preference = key.parse()?;
            let mut prefs = store.load()?;
            prefs.set(key, value)?;
            store.save(&prefs)?;
            tracing::info!("preference {} set to {}", key.name(), prefs.get(key));
            writeln!(out, "{} = {}", key.name(), prefs.get(key))?;
        }
        ConfigAction::Reset => {
            store.save(&Preferences::default())?;
            writeln!(out, "Preferences reset to defaults.")?;
        }
    }
    Ok(())
}
