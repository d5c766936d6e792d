//! Simulator configuration persistence.
//!
//! Stores the tooltip delegate settings and the locale setup as JSON at
//! `~/.config/tippy-sim/config.json`. Loaded once on startup; a missing or
//! unreadable file yields the defaults the page was built with.

use crate::error::Result;
use crate::i18n::loader::DEFAULT_BASE_PATH;
use crate::tooltip::TooltipProps;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tippy-sim")
        .join("config.json")
}

/// Locale setup: where resources live and which languages to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nConfig {
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Fallback when the selected language cannot be loaded.
    #[serde(default = "default_lang")]
    pub default_lang: String,
    /// Language selected at startup.
    #[serde(default = "initial_lang")]
    pub initial_lang: String,
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.into()
}

fn default_lang() -> String {
    "sv-se".into()
}

fn initial_lang() -> String {
    "en-us".into()
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            default_lang: default_lang(),
            initial_lang: initial_lang(),
        }
    }
}

/// Persisted simulator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub tooltip: TooltipProps,
    #[serde(default)]
    pub i18n: I18nConfig,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tooltip: TooltipProps::default(),
            i18n: I18nConfig::default(),
            path: default_path(),
        }
    }
}

impl AppConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&default_path())
    }

    /// Load from `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        config.path = path.to_path_buf();
        config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist current config to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
