//! Serialize, persist and share the item list.
//!
//! Every failure is turned into a [`Notice`] where it happens and ends the
//! run; nothing is retried. The caller re-triggers the export if it wants
//! another attempt.

use crate::{
    AtomicWriter, Destination, ExportError, Notice, PermissionGate, PermissionRationale,
    ShareTarget, SpreadsheetPayload, StorageLayout, XlsxWorkbook,
};
use chrono::Utc;
use scanlist_core::{AppConfig, Platform, PrivateDir};
use scanlist_domain::{Item, ItemExporter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const FILE_STEM: &str = "items";
const FILE_EXT: &str = "xlsx";

/// Builds export file names.
#[derive(Debug, Clone, Copy)]
pub struct FileNamer {
    timestamped: bool,
}

impl FileNamer {
    pub fn new(timestamped: bool) -> Self {
        Self { timestamped }
    }

    /// `items_<millis>.xlsx`, or `items.xlsx` without timestamps.
    pub fn file_name(&self, now_millis: i64) -> String {
        if self.timestamped {
            format!("{}_{}.{}", FILE_STEM, now_millis, FILE_EXT)
        } else {
            format!("{}.{}", FILE_STEM, FILE_EXT)
        }
    }
}

/// Platform and storage choices, resolved once from config.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub platform: Platform,
    pub layout: StorageLayout,
    pub private_dir: PrivateDir,
    pub namer: FileNamer,
}

impl ExportSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        let platform = config.effective_platform();
        Self {
            platform,
            layout: StorageLayout::resolve(platform, config),
            private_dir: config.effective_private_dir(),
            namer: FileNamer::new(config.effective_timestamped_filenames()),
        }
    }
}

#[derive(Debug)]
pub enum ExportOutcome {
    /// Written and handed to the share target.
    Shared { path: PathBuf },
    /// Written; sharing was unavailable or failed.
    Saved { path: PathBuf },
    /// The user refused the storage permission. Nothing was written.
    PermissionDenied,
    Failed(ExportError),
}

impl ExportOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ExportOutcome::Shared { path } | ExportOutcome::Saved { path } => Some(path),
            _ => None,
        }
    }

    pub fn is_written(&self) -> bool {
        self.path().is_some()
    }
}

#[derive(Debug)]
pub struct ExportReport {
    pub outcome: ExportOutcome,
    /// Where the file went, when it was written.
    pub destination: Option<Destination>,
    /// User-facing messages in the order they were raised.
    pub notices: Vec<Notice>,
}

impl ExportReport {
    fn new() -> Self {
        Self {
            outcome: ExportOutcome::PermissionDenied,
            destination: None,
            notices: Vec::new(),
        }
    }

    fn finish(mut self, outcome: ExportOutcome) -> Self {
        self.outcome = outcome;
        self
    }
}

pub struct ExportPipeline {
    settings: ExportSettings,
    permission: Arc<dyn PermissionGate>,
    share: Arc<dyn ShareTarget>,
}

impl ExportPipeline {
    pub fn new(
        settings: ExportSettings,
        permission: Arc<dyn PermissionGate>,
        share: Arc<dyn ShareTarget>,
    ) -> Self {
        Self {
            settings,
            permission,
            share,
        }
    }

    pub async fn run(&self, items: &[Item]) -> ExportReport {
        self.run_at(items, Utc::now().timestamp_millis()).await
    }

    /// Run with an explicit clock reading for the file name.
    pub async fn run_at(&self, items: &[Item], now_millis: i64) -> ExportReport {
        let mut report = ExportReport::new();
        tracing::debug!(
            "Export started: {} items on {}",
            items.len(),
            self.settings.platform
        );

        let payload = match Self::serialize(items) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Export serialization failed: {}", e);
                report
                    .notices
                    .push(Notice::error("Error saving file", e.to_string()));
                return report.finish(ExportOutcome::Failed(e));
            }
        };

        let primary = match self.choose_destination(&mut report).await {
            Some(destination) => destination,
            None => return report.finish(ExportOutcome::PermissionDenied),
        };

        let file_name = self.settings.namer.file_name(now_millis);
        let path = match self.persist(&mut report, primary, &file_name, &payload).await {
            Ok(path) => path,
            Err(e) => return report.finish(ExportOutcome::Failed(e)),
        };

        let outcome = self.share(&mut report, path).await;
        report.finish(outcome)
    }

    fn serialize(items: &[Item]) -> Result<SpreadsheetPayload, ExportError> {
        let sheet = ItemExporter::export_items(items);
        let bytes = XlsxWorkbook::from_sheet(&sheet)?.to_bytes()?;
        Ok(SpreadsheetPayload::encode(&bytes))
    }

    /// `None` when the user denied the storage permission.
    async fn choose_destination(&self, report: &mut ExportReport) -> Option<Destination> {
        if !self.settings.platform.has_scoped_storage() {
            return Some(self.settings.private_dir.into());
        }

        match self.ensure_permission().await {
            Ok(true) => Some(Destination::Downloads),
            Ok(false) => {
                tracing::warn!("Storage permission denied, export aborted");
                report.notices.push(Notice::error(
                    "Permission denied",
                    ExportError::PermissionDenied.to_string(),
                ));
                None
            }
            Err(e) => {
                let fallback = Destination::Downloads.fallback();
                tracing::warn!("Permission request failed ({}), using {}", e, fallback);
                report.notices.push(Notice::warning(
                    "Permission request failed",
                    format!("{}. Saving to {} instead.", e, fallback),
                ));
                Some(fallback)
            }
        }
    }

    async fn ensure_permission(&self) -> Result<bool, ExportError> {
        let granted_before = self.permission.check().await?;
        tracing::debug!("Permission before request: {}", granted_before);
        if granted_before {
            return Ok(true);
        }

        let status = self
            .permission
            .request(&PermissionRationale::external_storage())
            .await?;
        tracing::debug!("Permission result: {}", status);
        Ok(status.is_granted())
    }

    async fn persist(
        &self,
        report: &mut ExportReport,
        primary: Destination,
        file_name: &str,
        payload: &SpreadsheetPayload,
    ) -> Result<PathBuf, ExportError> {
        let path = self.settings.layout.dir(primary).join(file_name);
        let source = match AtomicWriter::write_payload(&path, payload).await {
            Ok(()) => {
                tracing::info!("Exported items to {}", path.display());
                report.destination = Some(primary);
                return Ok(path);
            }
            Err(source) => source,
        };

        let primary_err = ExportError::PrimaryWrite { path, source };
        tracing::error!("{}", primary_err);
        report.notices.push(Notice::error(
            format!("Error writing to {}", primary),
            primary_err.to_string(),
        ));

        let fallback = primary.fallback();
        let fallback_path = self.settings.layout.dir(fallback).join(file_name);
        match AtomicWriter::write_payload(&fallback_path, payload).await {
            Ok(()) => {
                tracing::warn!("Exported items to fallback {}", fallback_path.display());
                report.notices.push(Notice::warning(
                    "Saved to fallback location",
                    format!("Excel file saved to {}", fallback_path.display()),
                ));
                report.destination = Some(fallback);
                Ok(fallback_path)
            }
            Err(source) => {
                let err = ExportError::FallbackWrite {
                    path: fallback_path,
                    source,
                };
                tracing::error!("{}", err);
                report
                    .notices
                    .push(Notice::error("Fallback write error", err.to_string()));
                Err(err)
            }
        }
    }

    async fn share(&self, report: &mut ExportReport, path: PathBuf) -> ExportOutcome {
        if !self.share.is_available().await {
            tracing::debug!("{}", ExportError::ShareUnavailable);
            report.notices.push(Notice::success(
                "Saved",
                format!("Excel file saved to {}", path.display()),
            ));
            return ExportOutcome::Saved { path };
        }

        match self.share.share(&path).await {
            Ok(()) => ExportOutcome::Shared { path },
            Err(e) => {
                tracing::error!("Sharing {} failed: {}", path.display(), e);
                report.notices.push(Notice::error(
                    "Share failed",
                    format!("{}. The file was saved to {}", e, path.display()),
                ));
                ExportOutcome::Saved { path }
            }
        }
    }
}
