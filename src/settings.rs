//! Persistent CLI settings
//!
//! Stored in ~/.config/netview/settings.json (or the platform equivalent).

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the view file, overriding the settings file
pub const VIEW_FILE_ENV: &str = "NETVIEW_VIEW_FILE";

/// Output format for CLI results
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact JSON, one document per line
    Json,
    /// Pretty-printed JSON
    Text,
}

/// User settings for the `netview` binary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// View configuration file used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_file: Option<PathBuf>,
    /// Default output format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl Settings {
    /// Pick the view file: explicit flag, then environment, then settings
    pub fn resolve_view_file(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| std::env::var_os(VIEW_FILE_ENV).map(PathBuf::from))
            .or_else(|| self.view_file.clone())
    }
}

/// Settings store - reads and writes the settings file
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create store using default path (~/.config/netview/settings.json)
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not find config directory".into()))?
            .join("netview");

        Ok(Self {
            path: config_dir.join("settings.json"),
        })
    }

    /// Create store at a custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file is missing
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::Config(format!("Failed to read settings: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Write settings, creating the config directory if needed
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::Config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, content)
            .map_err(|e| Error::Config(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }
}
