use crate::cli::ExportArgs;
use crate::output;
use scanlist_core::AppConfig;
use scanlist_domain::ItemStore;
use scanlist_export::{
    Destination, ExportOutcome, ExportPipeline, ExportSettings, NoShare, Notice, ShareTarget,
    StaticPermission, StorageLayout, SystemShare,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Serialize)]
pub struct ExportSummary {
    pub outcome: &'static str,
    pub item_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
    pub notices: Vec<Notice>,
}

pub async fn handle_export(mut config: AppConfig, args: ExportArgs) -> anyhow::Result<()> {
    if let Some(platform) = args.platform {
        config.platform = Some(platform);
    }

    let mut settings = ExportSettings::from_config(&config);
    if let Some(ref dir) = args.output_dir {
        settings.layout = StorageLayout::under(dir);
    }

    let share: Arc<dyn ShareTarget> = if args.no_share {
        Arc::new(NoShare)
    } else {
        Arc::new(SystemShare::detect(config.share_command.as_deref()))
    };
    let permission = Arc::new(StaticPermission::new(args.permission));

    let mut store = ItemStore::new();
    for text in &args.items {
        if store.add(text).is_none() {
            tracing::warn!("Skipping blank item {:?}", text);
        }
    }

    let pipeline = ExportPipeline::new(settings, permission, share);
    let report = pipeline.run(&store.snapshot()).await;

    let outcome = match &report.outcome {
        ExportOutcome::Shared { .. } => "shared",
        ExportOutcome::Saved { .. } => "saved",
        ExportOutcome::PermissionDenied => "permission-denied",
        ExportOutcome::Failed(_) => "failed",
    };
    let summary = ExportSummary {
        outcome,
        item_count: store.len(),
        path: report.outcome.path().map(|p| p.to_path_buf()),
        destination: report.destination,
        notices: report.notices,
    };

    match report.outcome {
        ExportOutcome::Shared { .. } | ExportOutcome::Saved { .. } => {
            output::output_success(&summary)
        }
        ExportOutcome::PermissionDenied => {
            output::output_error("Storage permission denied", Some(&summary))
        }
        ExportOutcome::Failed(e) => output::output_error(&e.to_string(), Some(&summary)),
    }
}
