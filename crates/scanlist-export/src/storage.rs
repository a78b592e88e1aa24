//! Where exported files land.

use scanlist_core::{AppConfig, Platform, PrivateDir};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

const ANDROID_DOWNLOADS: &str = "/storage/emulated/0/Download";
const APP_DIR: &str = "scanlist";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Shared downloads; needs the storage permission on Android.
    Downloads,
    Documents,
    Cache,
}

impl Destination {
    /// Name used in notices, e.g. "Error writing to Downloads".
    pub fn label(self) -> &'static str {
        match self {
            Destination::Downloads => "Downloads",
            Destination::Documents => "Documents",
            Destination::Cache => "Cache",
        }
    }

    /// Private directory to retry in after a failed write to `self`.
    pub fn fallback(self) -> Destination {
        match self {
            Destination::Downloads | Destination::Cache => Destination::Documents,
            Destination::Documents => Destination::Cache,
        }
    }
}

impl From<PrivateDir> for Destination {
    fn from(dir: PrivateDir) -> Self {
        match dir {
            PrivateDir::Documents => Destination::Documents,
            PrivateDir::Cache => Destination::Cache,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolved directories for each destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub downloads: PathBuf,
    pub documents: PathBuf,
    pub cache: PathBuf,
}

impl StorageLayout {
    /// Explicit directories for each destination.
    pub fn new(downloads: PathBuf, documents: PathBuf, cache: PathBuf) -> Self {
        Self {
            downloads,
            documents,
            cache,
        }
    }

    /// All three destinations under one root, e.g. a temp dir or `--output-dir`.
    pub fn under(root: &Path) -> Self {
        Self::new(
            root.join("Download"),
            root.join("documents"),
            root.join("cache"),
        )
    }

    /// Platform defaults with config overrides applied.
    pub fn resolve(platform: Platform, config: &AppConfig) -> Self {
        let fallback_root = std::env::temp_dir().join(APP_DIR);

        let default_downloads = match platform {
            Platform::Android => PathBuf::from(ANDROID_DOWNLOADS),
            _ => dirs::download_dir()
                .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
                .unwrap_or_else(|| fallback_root.join("Download")),
        };
        let default_documents = dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR).join("documents"))
            .unwrap_or_else(|| fallback_root.join("documents"));
        let default_cache = dirs::cache_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| fallback_root.join("cache"));

        Self::new(
            config.downloads_dir.clone().unwrap_or(default_downloads),
            config.documents_dir.clone().unwrap_or(default_documents),
            config.cache_dir.clone().unwrap_or(default_cache),
        )
    }

    /// Directory the export for `destination` is written into.
    pub fn dir(&self, destination: Destination) -> &Path {
        match destination {
            Destination::Downloads => &self.downloads,
            Destination::Documents => &self.documents,
            Destination::Cache => &self.cache,
        }
    }
}
