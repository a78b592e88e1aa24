use crate::{Platform, ScanlistError, ScanlistResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// App-private directory used when no permission is involved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivateDir {
    #[default]
    Documents,
    Cache,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub confirm_before_export: Option<bool>,
    #[serde(default)]
    pub timestamped_filenames: Option<bool>,
    #[serde(default)]
    pub private_dir: Option<PrivateDir>,
    #[serde(default)]
    pub downloads_dir: Option<PathBuf>,
    #[serde(default)]
    pub documents_dir: Option<PathBuf>,
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    /// Program used to hand an exported file to the system.
    #[serde(default)]
    pub share_command: Option<String>,
    #[serde(default)]
    pub platform: Option<Platform>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/scanlist/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("scanlist/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("scanlist\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the default location, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Load from an explicit path. Unlike [`AppConfig::load`], errors are
    /// reported since the caller asked for this file.
    pub fn load_from(path: &Path) -> ScanlistResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ScanlistError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn effective_confirm_before_export(&self) -> bool {
        self.confirm_before_export.unwrap_or(true)
    }

    pub fn effective_timestamped_filenames(&self) -> bool {
        self.timestamped_filenames.unwrap_or(true)
    }

    pub fn effective_private_dir(&self) -> PrivateDir {
        self.private_dir.unwrap_or_default()
    }

    pub fn effective_platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }
}
