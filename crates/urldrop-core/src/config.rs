use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::PrefError;

/// Default drop zone width in pixels.
pub const DEFAULT_DROP_ZONE_WIDTH: u32 = 450;
/// Default drop zone height in pixels.
pub const DEFAULT_DROP_ZONE_HEIGHT: u32 = 250;
/// Smallest accepted drop zone dimension in pixels.
pub const MIN_DROP_ZONE_PX: u32 = 100;
/// Largest accepted drop zone dimension in pixels.
pub const MAX_DROP_ZONE_PX: u32 = 2000;

/// User preferences loaded from `~/.config/urldrop/config.toml`.
///
/// Missing keys take their defaults; a stored size of 0 also means "default".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Drop zone width in pixels.
    #[serde(default = "default_width")]
    pub drop_zone_width: u32,
    /// Drop zone height in pixels.
    #[serde(default = "default_height")]
    pub drop_zone_height: u32,
    /// Close the drop zone after a drop that opened at least one tab.
    #[serde(default)]
    pub auto_close: bool,
    /// Application used to open URLs (None = system default browser).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
}

fn default_width() -> u32 {
    DEFAULT_DROP_ZONE_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_DROP_ZONE_HEIGHT
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            drop_zone_width: DEFAULT_DROP_ZONE_WIDTH,
            drop_zone_height: DEFAULT_DROP_ZONE_HEIGHT,
            auto_close: false,
            browser: None,
        }
    }
}

impl Preferences {
    /// Width to draw with: the stored value, or the default when unset (0) or out of range.
    pub fn width(&self) -> u32 {
        px_or_default(self.drop_zone_width, DEFAULT_DROP_ZONE_WIDTH)
    }

    /// Height to draw with: the stored value, or the default when unset (0) or out of range.
    pub fn height(&self) -> u32 {
        px_or_default(self.drop_zone_height, DEFAULT_DROP_ZONE_HEIGHT)
    }

    /// Replace sizes outside `MIN_DROP_ZONE_PX..=MAX_DROP_ZONE_PX` with their defaults.
    pub fn normalized(mut self) -> Self {
        self.drop_zone_width = self.width();
        self.drop_zone_height = self.height();
        self
    }

    /// Update one preference from user input.
    pub fn set(&mut self, key: Preference, value: &str) -> std::result::Result<(), PrefError> {
        match key {
            Preference::Width => self.drop_zone_width = parse_px(key, value)?,
            Preference::Height => self.drop_zone_height = parse_px(key, value)?,
            Preference::AutoClose => self.auto_close = parse_flag(key, value)?,
            Preference::Browser => {
                let value = value.trim();
                self.browser = if value.is_empty() || value.eq_ignore_ascii_case("default") {
                    None
                } else {
                    Some(value.to_string())
                };
            }
        }
        Ok(())
    }

    /// Current value of one preference, formatted for display.
    pub fn get(&self, key: Preference) -> String {
        match key {
            Preference::Width => format!("{}px", self.width()),
            Preference::Height => format!("{}px", self.height()),
            Preference::AutoClose => self.auto_close.to_string(),
            Preference::Browser => self
                .browser
                .clone()
                .unwrap_or_else(|| "default".to_string()),
        }
    }
}

/// User-facing preference keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Width,
    Height,
    AutoClose,
    Browser,
}

impl Preference {
    pub const ALL: [Preference; 4] = [
        Preference::Width,
        Preference::Height,
        Preference::AutoClose,
        Preference::Browser,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preference::Width => "width",
            Preference::Height => "height",
            Preference::AutoClose => "auto-close",
            Preference::Browser => "browser",
        }
    }
}

impl FromStr for Preference {
    type Err = PrefError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "width" | "drop-zone-width" => Ok(Preference::Width),
            "height" | "drop-zone-height" => Ok(Preference::Height),
            "auto-close" | "autoclose" => Ok(Preference::AutoClose),
            "browser" => Ok(Preference::Browser),
            _ => Err(PrefError::UnknownKey(s.to_string())),
        }
    }
}

fn px_or_default(px: u32, default: u32) -> u32 {
    if (MIN_DROP_ZONE_PX..=MAX_DROP_ZONE_PX).contains(&px) {
        px
    } else {
        default
    }
}

fn parse_px(key: Preference, value: &str) -> std::result::Result<u32, PrefError> {
    let raw = value.trim();
    let digits = raw.strip_suffix("px").unwrap_or(raw).trim();
    let invalid = |reason: String| PrefError::InvalidValue {
        key: key.name(),
        value: value.to_string(),
        reason,
    };
    let px: u32 = digits
        .parse()
        .map_err(|_| invalid("expected a whole number of pixels".to_string()))?;
    if !(MIN_DROP_ZONE_PX..=MAX_DROP_ZONE_PX).contains(&px) {
        return Err(invalid(format!(
            "must be between {MIN_DROP_ZONE_PX} and {MAX_DROP_ZONE_PX}"
        )));
    }
    Ok(px)
}

fn parse_flag(key: Preference, value: &str) -> std::result::Result<bool, PrefError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(PrefError::InvalidValue {
            key: key.name(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

/// Where preferences live. Read once at startup, written on user changes.
pub trait PreferenceStore {
    fn load(&self) -> Result<Preferences>;
    fn save(&self, prefs: &Preferences) -> Result<()>;
}

/// TOML file store; creates the file with defaults on first load.
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore {
    path: PathBuf,
}

impl TomlPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default XDG location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(config_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            let prefs = Preferences::default();
            self.save(&prefs)?;
            tracing::info!("created default config at {}", self.path.display());
            return Ok(prefs);
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("read config: {}", self.path.display()))?;
        let stored: Preferences = toml::from_str(&data)
            .with_context(|| format!("parse config: {}", self.path.display()))?;
        let prefs = stored.clone().normalized();
        if prefs != stored {
            tracing::warn!(
                width = stored.drop_zone_width,
                height = stored.drop_zone_height,
                "drop zone size out of range in {}; using defaults",
                self.path.display()
            );
        }
        Ok(prefs)
    }

    fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let toml = toml::to_string_pretty(prefs).context("serialize config")?;
        fs::write(&self.path, toml)
            .with_context(|| format!("write config: {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory store, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    prefs: RefCell<Preferences>,
}

impl MemoryPreferenceStore {
    pub fn new(prefs: Preferences) -> Self {
        Self {
            prefs: RefCell::new(prefs),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Preferences> {
        Ok(self.prefs.borrow().clone())
    }

    fn save(&self, prefs: &Preferences) -> Result<()> {
        *self.prefs.borrow_mut() = prefs.clone();
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urldrop")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}
