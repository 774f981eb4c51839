//! User configuration file handling
//!
//! Manages settings from ~/.config/panelcut/settings.json

use crate::core::settings::EngineSettings;
use crate::editing::PageGeometry;
use crate::logging;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/panelcut/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gutter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_margin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inset_margin: Option<f64>,
}

impl ConfigFile {
    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        logging::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or `None` if missing or unreadable
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse settings.json: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read settings.json: {}", e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// A config file spelling out every built-in default
    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self {
            gutter: Some(settings.gutter),
            preview_scale: Some(settings.preview_scale),
            page_width: Some(settings.page.width),
            page_height: Some(settings.page.height),
            live_margin: Some(settings.page.live_margin),
            inset_margin: Some(settings.page.inset_margin),
        }
    }

    /// Overlay the values this file sets onto `base`
    pub fn apply_to(&self, base: EngineSettings) -> EngineSettings {
        let page = PageGeometry {
            width: self.page_width.unwrap_or(base.page.width),
            height: self.page_height.unwrap_or(base.page.height),
            live_margin: self.live_margin.unwrap_or(base.page.live_margin),
            inset_margin: self.inset_margin.unwrap_or(base.page.inset_margin),
        };
        EngineSettings {
            gutter: self.gutter.unwrap_or(base.gutter),
            preview_scale: self.preview_scale.unwrap_or(base.preview_scale),
            page,
        }
    }

    /// Initialize the user configuration directory
    ///
    /// Creates ~/.config/panelcut with a logs/ directory and a settings.json
    /// holding the built-in defaults. An existing settings file is left alone.
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = logging::config_dir();
        fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        logging::initialize_logs_directory()?;
        println!("Created logs directory: {:?}", logging::logs_dir());

        let settings_path = Self::config_path();
        if !settings_path.exists() {
            Self::from_settings(&EngineSettings::default()).save()?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        Ok(())
    }
}
