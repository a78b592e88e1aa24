use scanlist_core::{Platform, PrivateDir};
use scanlist_domain::ItemStore;
use scanlist_export::{
    Destination, ExportOutcome, ExportPipeline, ExportSettings, FileNamer, NoShare,
    StaticPermission, StorageLayout,
};
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;
use zip::ZipArchive;

fn read_part(path: &Path, name: &str) -> String {
    let bytes = std::fs::read(path).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

/// Shared-string values in sheet order, header first.
fn sheet_values(path: &Path) -> Vec<String> {
    let sst = read_part(path, "xl/sharedStrings.xml");
    let strings: Vec<String> = sst
        .split("<si>")
        .skip(1)
        .map(|si| {
            let start = si.find('>').unwrap() + 1;
            let end = si.find("</t>").unwrap();
            si[start..end].to_string()
        })
        .collect();

    let sheet = read_part(path, "xl/worksheets/sheet1.xml");
    sheet
        .split("<v>")
        .skip(1)
        .map(|v| {
            let idx: usize = v[..v.find("</v>").unwrap()].parse().unwrap();
            strings[idx].clone()
        })
        .collect()
}

fn pipeline(platform: Platform, root: &Path, permission: StaticPermission) -> ExportPipeline {
    let settings = ExportSettings {
        platform,
        layout: StorageLayout::under(root),
        private_dir: PrivateDir::Documents,
        namer: FileNamer::new(false),
    };
    ExportPipeline::new(settings, Arc::new(permission), Arc::new(NoShare))
}

#[tokio::test]
async fn test_export_two_items_in_order() {
    let dir = tempdir().unwrap();
    let mut store = ItemStore::new();
    store.add("A");
    store.add("B");

    let report = pipeline(Platform::Desktop, dir.path(), StaticPermission::granted())
        .run(&store.snapshot())
        .await;

    let path = report.outcome.path().unwrap().to_path_buf();
    assert_eq!(path, dir.path().join("documents/items.xlsx"));
    assert_eq!(sheet_values(&path), vec!["Text", "A", "B"]);
    assert!(read_part(&path, "xl/workbook.xml").contains(r#"<sheet name="Items""#));
}

#[tokio::test]
async fn test_export_empty_list_keeps_header() {
    let dir = tempdir().unwrap();

    let report = pipeline(Platform::Desktop, dir.path(), StaticPermission::granted())
        .run(&[])
        .await;

    let path = report.outcome.path().unwrap().to_path_buf();
    assert_eq!(sheet_values(&path), vec!["Text"]);
}

#[tokio::test]
async fn test_deleted_items_are_not_exported() {
    let dir = tempdir().unwrap();
    let mut store = ItemStore::new();
    store.add_at("Milk", 1);
    let eggs = store.add_at("Eggs", 2).unwrap().id.clone();
    store.add_at("Bread", 3);
    store.remove(&eggs);

    let report = pipeline(Platform::Android, dir.path(), StaticPermission::granted())
        .run(&store.snapshot())
        .await;

    assert_eq!(report.destination, Some(Destination::Downloads));
    let path = report.outcome.path().unwrap().to_path_buf();
    assert_eq!(sheet_values(&path), vec!["Text", "Milk", "Bread"]);
}

#[tokio::test]
async fn test_android_denial_produces_notice_and_no_file() {
    let dir = tempdir().unwrap();
    let mut store = ItemStore::new();
    store.add("A");

    let report = pipeline(Platform::Android, dir.path(), StaticPermission::denied())
        .run(&store.snapshot())
        .await;

    assert!(matches!(report.outcome, ExportOutcome::PermissionDenied));
    assert!(report.notices.iter().any(|n| n.title == "Permission denied"));
    assert!(!dir.path().join("Download").exists());
    assert!(!dir.path().join("documents").exists());
}

#[tokio::test]
async fn test_text_with_noncharacters_exports_clean_workbook() {
    let dir = tempdir().unwrap();
    let mut store = ItemStore::new();
    store.add("ok\u{FFFF}");

    let report = pipeline(Platform::Desktop, dir.path(), StaticPermission::granted())
        .run(&store.snapshot())
        .await;

    let path = report.outcome.path().unwrap().to_path_buf();
    let sst = read_part(&path, "xl/sharedStrings.xml");
    assert!(!sst.contains('\u{FFFF}'));
    assert_eq!(sheet_values(&path), vec!["Text", "ok"]);
}
